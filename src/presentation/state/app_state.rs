use std::sync::Arc;

use crate::application::ports::{FileLoader, FormatConverter, StagingStore};
use crate::application::services::{AttachmentClassifier, ChatService, ConversionService};
use crate::presentation::config::Settings;

pub struct AppState<F, C, S>
where
    F: FileLoader,
    C: FormatConverter,
    S: StagingStore,
{
    pub chat_service: Arc<ChatService>,
    pub attachment_classifier: Arc<AttachmentClassifier<F>>,
    pub conversion_service: Arc<ConversionService<C, S>>,
    pub settings: Settings,
}

impl<F, C, S> Clone for AppState<F, C, S>
where
    F: FileLoader,
    C: FormatConverter,
    S: StagingStore,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            attachment_classifier: Arc::clone(&self.attachment_classifier),
            conversion_service: Arc::clone(&self.conversion_service),
            settings: self.settings.clone(),
        }
    }
}
