mod attachment_classifier;
mod chat_service;
mod conversion_service;

pub use attachment_classifier::{AttachmentClassifier, ClassifiedAttachments, UploadedFile};
pub use chat_service::{ChatService, ChatServiceError};
pub use conversion_service::{ConversionService, ConversionServiceError, StagedDocument};
