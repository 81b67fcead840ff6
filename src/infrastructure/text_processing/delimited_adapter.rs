use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{MediaKind, SourceFile};

/// CSV to readable text: each record becomes one line with its fields
/// joined by ", ".
#[derive(Default)]
pub struct DelimitedAdapter;

impl DelimitedAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for DelimitedAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %source.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        source: &SourceFile,
    ) -> Result<String, FileLoaderError> {
        if source.media_kind != MediaKind::Csv {
            return Err(FileLoaderError::UnsupportedMediaKind(
                source.media_kind.label().to_string(),
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut lines = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| FileLoaderError::ExtractionFailed(format!("bad csv: {e}")))?;
            lines.push(record.iter().collect::<Vec<_>>().join(", "));
        }

        Ok(lines.join("\n"))
    }
}
