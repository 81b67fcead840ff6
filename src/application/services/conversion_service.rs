use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{
    ConversionError, FormatConverter, ImageInput, StagingStore, StagingStoreError,
};

/// A finished conversion output sitting on staging storage, identified by
/// the key it was stored under and the filename the download should carry.
#[derive(Debug, Clone)]
pub struct StagedDocument {
    pub filename: String,
    pub key: String,
}

/// Orchestrates the format converters: runs the CPU-bound conversion off
/// the executor, lands the output on staging storage, and hands staged
/// bytes back out for download.
pub struct ConversionService<C: FormatConverter, S: StagingStore> {
    converter: Arc<C>,
    staging: Arc<S>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionServiceError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Staging(#[from] StagingStoreError),
    #[error("conversion task failed: {0}")]
    TaskFailed(String),
}

impl<C, S> ConversionService<C, S>
where
    C: FormatConverter + 'static,
    S: StagingStore,
{
    pub fn new(converter: Arc<C>, staging: Arc<S>) -> Self {
        Self { converter, staging }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len(), original_name = %original_name))]
    pub async fn pdf_to_docx(
        &self,
        data: Vec<u8>,
        original_name: &str,
    ) -> Result<StagedDocument, ConversionServiceError> {
        let converter = Arc::clone(&self.converter);
        let output = run_conversion(move || converter.pdf_to_docx(&data)).await?;
        self.stage(output, &with_extension(original_name, "docx"))
            .await
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len(), original_name = %original_name))]
    pub async fn docx_to_pdf(
        &self,
        data: Vec<u8>,
        original_name: &str,
    ) -> Result<StagedDocument, ConversionServiceError> {
        let converter = Arc::clone(&self.converter);
        let output = run_conversion(move || converter.docx_to_pdf(&data)).await?;
        self.stage(output, &with_extension(original_name, "pdf"))
            .await
    }

    #[tracing::instrument(skip(self, images), fields(image_count = images.len()))]
    pub async fn images_to_pdf(
        &self,
        images: Vec<ImageInput>,
    ) -> Result<StagedDocument, ConversionServiceError> {
        let converter = Arc::clone(&self.converter);
        let output = run_conversion(move || converter.images_to_pdf(&images)).await?;
        self.stage(output, "images.pdf").await
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn text_to_pdf(&self, text: &str) -> Result<StagedDocument, ConversionServiceError> {
        let converter = Arc::clone(&self.converter);
        let text = text.to_string();
        let output = run_conversion(move || converter.text_to_pdf(&text)).await?;
        self.stage(output, "text.pdf").await
    }

    /// Reads a staged output back for download, then removes it. The
    /// removal is best-effort and deliberately swallowed: the response
    /// bytes are already in hand, and a leftover staging object does not
    /// affect correctness.
    pub async fn retrieve(
        &self,
        staged: &StagedDocument,
    ) -> Result<Vec<u8>, ConversionServiceError> {
        let bytes = self.staging.fetch(&staged.key).await?;
        if let Err(e) = self.staging.delete(&staged.key).await {
            tracing::debug!(key = %staged.key, error = %e, "Staging cleanup failed, ignoring");
        }
        Ok(bytes)
    }

    async fn stage(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<StagedDocument, ConversionServiceError> {
        let key = format!("{}-{}", Utc::now().timestamp_millis(), filename);
        self.staging.store(&key, bytes).await?;
        tracing::info!(key = %key, "Conversion output staged");
        Ok(StagedDocument {
            filename: filename.to_string(),
            key,
        })
    }
}

async fn run_conversion<T, F>(job: F) -> Result<T, ConversionServiceError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ConversionError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ConversionServiceError::TaskFailed(e.to_string()))?
        .map_err(ConversionServiceError::from)
}

fn with_extension(original_name: &str, extension: &str) -> String {
    let base = original_name
        .rsplit_once('.')
        .map(|(b, _)| b)
        .unwrap_or(original_name);
    let base = if base.is_empty() { "file" } else { base };
    format!("{}.{}", base, extension)
}
