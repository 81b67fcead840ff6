mod composite_file_loader;
mod delimited_adapter;
mod docx_adapter;
mod extractor_factory;
mod pdf_adapter;
mod plain_text_adapter;
mod spreadsheet_adapter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use delimited_adapter::DelimitedAdapter;
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::ExtractorFactory;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use spreadsheet_adapter::SpreadsheetAdapter;
pub use text_sanitizer::sanitize_extracted_text;
