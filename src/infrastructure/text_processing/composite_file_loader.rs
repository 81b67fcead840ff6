use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{MediaKind, SourceFile};

/// Routes an upload to the adapter registered for its media kind. Kinds
/// with no registered adapter fall through to the raw text fallback, so
/// unknown formats still produce something instead of failing.
pub struct CompositeFileLoader {
    adapters: HashMap<MediaKind, Arc<dyn FileLoader>>,
    fallback: Arc<dyn FileLoader>,
}

impl CompositeFileLoader {
    pub fn new(
        adapters: Vec<(MediaKind, Arc<dyn FileLoader>)>,
        fallback: Arc<dyn FileLoader>,
    ) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
            fallback,
        }
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        source: &SourceFile,
    ) -> Result<String, FileLoaderError> {
        match self.adapters.get(&source.media_kind) {
            Some(adapter) => adapter.extract_text(data, source).await,
            None => self.fallback.extract_text(data, source).await,
        }
    }
}
