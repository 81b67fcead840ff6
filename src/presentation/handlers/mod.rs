mod analyze;
mod chat;
mod chat_with_files;
mod convert;
mod health;

pub use analyze::analyze_handler;
pub use chat::chat_handler;
pub use chat_with_files::chat_with_files_handler;
pub use convert::{
    docx_to_pdf_handler, images_to_pdf_handler, pdf_to_docx_handler, text_to_pdf_handler,
};
pub use health::health_handler;
