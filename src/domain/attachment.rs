/// A user-supplied upload before classification: its bytes live elsewhere,
/// this is the identifying metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub filename: String,
    pub media_kind: MediaKind,
}

impl SourceFile {
    pub fn new(filename: impl Into<String>, media_kind: MediaKind) -> Self {
        Self {
            filename: filename.into(),
            media_kind,
        }
    }
}

/// What an uploaded file is, decided once at ingestion time. Everything
/// that is not an image is a document and gets reduced to extracted text;
/// unknown formats fall back to a raw text read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Pdf,
    Docx,
    Csv,
    Xlsx,
    Text,
    Unknown,
}

impl MediaKind {
    /// Classify from the original filename and the declared MIME type.
    /// The extension wins when the declared type is generic or absent,
    /// mirroring extension-first lookup on the upload path.
    pub fn classify(filename: &str, declared_mime: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, e)| e.to_ascii_lowercase())
            .unwrap_or_default();

        if declared_mime.starts_with("image/")
            || matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
        {
            return Self::Image;
        }

        match ext.as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "csv" => Self::Csv,
            "xlsx" => Self::Xlsx,
            "txt" => Self::Text,
            _ => match declared_mime {
                "application/pdf" => Self::Pdf,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                    Self::Docx
                }
                "text/csv" => Self::Csv,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => Self::Xlsx,
                m if m.starts_with("text/") => Self::Text,
                _ => Self::Unknown,
            },
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

/// An image attachment as it is transmitted: raw bytes base64-encoded,
/// with the MIME type the provider needs alongside the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub filename: String,
    pub mime_type: String,
    pub base64: String,
}

/// A non-image attachment reduced to extracted plain text. Raw document
/// bytes are never sent to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentText {
    pub filename: String,
    pub text: String,
}

impl DocumentText {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}
