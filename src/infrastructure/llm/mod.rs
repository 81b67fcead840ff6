mod backend_factory;
pub mod content_sanitizer;
mod gemini_client;
mod openai_client;

pub use backend_factory::ChatBackendFactory;
pub use gemini_client::{build_contents, Content, GeminiChatClient, InlineData, Part};
pub use openai_client::{build_messages, OpenAiChatClient};
