use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::MediaKind;

use super::composite_file_loader::CompositeFileLoader;
use super::delimited_adapter::DelimitedAdapter;
use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;
use super::spreadsheet_adapter::SpreadsheetAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Wires the full extraction pipeline: one adapter per known document
    /// kind, raw text decode as the fallback for everything else.
    pub fn create() -> Arc<CompositeFileLoader> {
        let adapters: Vec<(MediaKind, Arc<dyn FileLoader>)> = vec![
            (MediaKind::Pdf, Arc::new(PdfAdapter::new())),
            (MediaKind::Docx, Arc::new(DocxAdapter::new())),
            (MediaKind::Csv, Arc::new(DelimitedAdapter::new())),
            (MediaKind::Xlsx, Arc::new(SpreadsheetAdapter::new())),
        ];

        Arc::new(CompositeFileLoader::new(
            adapters,
            Arc::new(PlainTextAdapter),
        ))
    }
}
