mod chat_backend;
mod file_loader;
mod format_converter;
mod staging_store;

pub use chat_backend::{ChatBackend, ChatBackendError, GenerationOptions};
pub use file_loader::{FileLoader, FileLoaderError};
pub use format_converter::{ConversionError, FormatConverter, ImageInput};
pub use staging_store::{StagingStore, StagingStoreError};
