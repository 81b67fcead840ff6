/// One input image for an images-to-PDF conversion.
pub struct ImageInput {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Synchronous, CPU-bound format conversions. Callers are expected to run
/// these off the async executor.
pub trait FormatConverter: Send + Sync {
    fn pdf_to_docx(&self, data: &[u8]) -> Result<Vec<u8>, ConversionError>;
    fn docx_to_pdf(&self, data: &[u8]) -> Result<Vec<u8>, ConversionError>;
    fn images_to_pdf(&self, images: &[ImageInput]) -> Result<Vec<u8>, ConversionError>;
    fn text_to_pdf(&self, text: &str) -> Result<Vec<u8>, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("render failed: {0}")]
    RenderFailed(String),
}
