use crate::application::ports::{ConversionError, FormatConverter, ImageInput};
use crate::infrastructure::text_processing::{sanitize_extracted_text, DocxAdapter};

use super::docx_writer::build_docx;
use super::pdf_writer::{render_images_pdf, render_text_pdf};

/// The one converter behind every conversion route. All four operations
/// go through the intermediate text or image form; layout is not
/// preserved, content is.
#[derive(Default)]
pub struct DocumentConverter;

impl DocumentConverter {
    pub fn new() -> Self {
        Self
    }
}

impl FormatConverter for DocumentConverter {
    fn pdf_to_docx(&self, data: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let raw = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ConversionError::InvalidInput(format!("cannot read PDF: {e}")))?;

        let text = sanitize_extracted_text(&raw);
        let paragraphs: Vec<String> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        build_docx(&paragraphs)
    }

    fn docx_to_pdf(&self, data: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let paragraphs = DocxAdapter::read_paragraphs(data)
            .map_err(|e| ConversionError::InvalidInput(format!("cannot read DOCX: {e}")))?;

        render_text_pdf(&paragraphs.join("\n\n"))
    }

    fn images_to_pdf(&self, images: &[ImageInput]) -> Result<Vec<u8>, ConversionError> {
        let pairs: Vec<(String, Vec<u8>)> = images
            .iter()
            .map(|image| (image.filename.clone(), image.data.clone()))
            .collect();

        render_images_pdf(&pairs)
    }

    fn text_to_pdf(&self, text: &str) -> Result<Vec<u8>, ConversionError> {
        if text.trim().is_empty() {
            return Err(ConversionError::InvalidInput("text is empty".into()));
        }

        render_text_pdf(text)
    }
}
