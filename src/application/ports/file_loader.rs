use async_trait::async_trait;

use crate::domain::SourceFile;

#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Best-effort reduction of a document's bytes to plain text.
    async fn extract_text(&self, data: &[u8], source: &SourceFile)
        -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported media kind: {0}")]
    UnsupportedMediaKind(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
