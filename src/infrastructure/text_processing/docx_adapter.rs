use std::io::{Cursor, Read};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{MediaKind, SourceFile};

use super::text_sanitizer::sanitize_extracted_text;

static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>").unwrap());

/// Reads the main document part of an OOXML word file and pulls the text
/// runs out of it, one line per paragraph.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("not a docx archive: {e}")))?;

        let mut entry = archive.by_name("word/document.xml").map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing word/document.xml: {e}"))
        })?;

        let mut xml = String::new();
        entry
            .read_to_string(&mut xml)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read xml: {e}")))?;

        Ok(xml)
    }

    /// Paragraph texts in document order, empty paragraphs dropped.
    pub fn read_paragraphs(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let xml = Self::read_document_xml(data)?;
        Ok(Self::paragraphs(&xml))
    }

    fn paragraphs(xml: &str) -> Vec<String> {
        xml.split("</w:p>")
            .map(|paragraph| {
                TEXT_RUN
                    .captures_iter(paragraph)
                    .map(|c| unescape_xml(&c[1]))
                    .collect::<String>()
            })
            .filter(|text| !text.trim().is_empty())
            .collect()
    }
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %source.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        source: &SourceFile,
    ) -> Result<String, FileLoaderError> {
        if source.media_kind != MediaKind::Docx {
            return Err(FileLoaderError::UnsupportedMediaKind(
                source.media_kind.label().to_string(),
            ));
        }

        let paragraphs = Self::read_paragraphs(data)?;
        tracing::info!(paragraph_count = paragraphs.len(), "DOCX text extraction complete");

        Ok(sanitize_extracted_text(&paragraphs.join("\n")))
    }
}
