use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::application::ports::FileLoader;
use crate::domain::{DocumentText, ImageAttachment, MediaKind, SourceFile};

/// An uploaded file as it arrives from the transport layer.
pub struct UploadedFile {
    pub filename: String,
    pub declared_mime: String,
    pub data: Vec<u8>,
}

/// The result of splitting a batch of uploads into the two attachment
/// kinds. A file is never both.
#[derive(Default)]
pub struct ClassifiedAttachments {
    pub images: Vec<ImageAttachment>,
    pub document_texts: Vec<DocumentText>,
}

/// Splits uploads into images (kept as base64 bytes) and documents
/// (reduced to extracted text). Extraction is best-effort: a document
/// whose text cannot be recovered degrades to nothing rather than
/// failing the whole request.
pub struct AttachmentClassifier<F: FileLoader> {
    file_loader: Arc<F>,
}

impl<F: FileLoader> AttachmentClassifier<F> {
    pub fn new(file_loader: Arc<F>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(skip(self, files), fields(file_count = files.len()))]
    pub async fn classify(&self, files: Vec<UploadedFile>) -> ClassifiedAttachments {
        let mut classified = ClassifiedAttachments::default();

        for file in files {
            let kind = MediaKind::classify(&file.filename, &file.declared_mime);

            if kind.is_image() {
                let mime_type = if file.declared_mime.starts_with("image/") {
                    file.declared_mime.clone()
                } else {
                    image_mime_from_extension(&file.filename)
                };
                classified.images.push(ImageAttachment {
                    filename: file.filename,
                    mime_type,
                    base64: BASE64.encode(&file.data),
                });
                continue;
            }

            let source = SourceFile::new(file.filename.clone(), kind);
            match self.file_loader.extract_text(&file.data, &source).await {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::debug!(filename = %file.filename, chars = text.len(), "Document text extracted");
                    classified
                        .document_texts
                        .push(DocumentText::new(file.filename, text));
                }
                Ok(_) => {
                    tracing::debug!(filename = %file.filename, "Document produced no text, dropping");
                }
                Err(e) => {
                    tracing::warn!(filename = %file.filename, error = %e, "Extraction failed, dropping document");
                }
            }
        }

        classified
    }
}

fn image_mime_from_extension(filename: &str) -> String {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
    .to_string()
}
