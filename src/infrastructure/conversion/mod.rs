mod document_converter;
mod docx_writer;
mod pdf_writer;

pub use document_converter::DocumentConverter;
pub use docx_writer::build_docx;
pub use pdf_writer::{render_images_pdf, render_text_pdf};
