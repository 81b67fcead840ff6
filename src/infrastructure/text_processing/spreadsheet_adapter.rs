use std::io::Cursor;

use async_trait::async_trait;
use calamine::Reader;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{MediaKind, SourceFile};

/// XLSX workbooks flattened to text, one section per sheet with cells
/// joined by ", " within each row.
#[derive(Default)]
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    pub fn new() -> Self {
        Self
    }

    fn flatten(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(data.to_vec()))
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("not a workbook: {e}")))?;

        let names: Vec<String> = workbook.sheet_names().to_owned();
        let mut sections = Vec::with_capacity(names.len());

        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| FileLoaderError::ExtractionFailed(format!("bad sheet {name}: {e}")))?;

            let mut lines = vec![format!("--- Sheet: {name} ---")];
            for row in range.rows() {
                lines.push(
                    row.iter()
                        .map(|cell| cell.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }
            sections.push(lines.join("\n"));
        }

        Ok(sections.join("\n\n"))
    }
}

#[async_trait]
impl FileLoader for SpreadsheetAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %source.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        source: &SourceFile,
    ) -> Result<String, FileLoaderError> {
        if source.media_kind != MediaKind::Xlsx {
            return Err(FileLoaderError::UnsupportedMediaKind(
                source.media_kind.label().to_string(),
            ));
        }

        let bytes = data.to_vec();
        tokio::task::spawn_blocking(move || Self::flatten(&bytes))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
    }
}
