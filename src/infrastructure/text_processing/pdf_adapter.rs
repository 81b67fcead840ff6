use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{MediaKind, SourceFile};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %source.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        source: &SourceFile,
    ) -> Result<String, FileLoaderError> {
        if source.media_kind != MediaKind::Pdf {
            return Err(FileLoaderError::UnsupportedMediaKind(
                source.media_kind.label().to_string(),
            ));
        }

        let bytes = data.to_vec();

        let raw = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let sanitized = sanitize_extracted_text(&raw);
        tracing::info!(chars = sanitized.len(), "PDF text extraction complete");

        Ok(sanitized)
    }
}
