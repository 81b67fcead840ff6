use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::SourceFile;

/// Raw byte-to-text reduction. Also the fallback for formats no other
/// adapter claims, so it accepts any media kind and decodes lossily.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        _source: &SourceFile,
    ) -> Result<String, FileLoaderError> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}
