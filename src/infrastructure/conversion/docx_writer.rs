use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::application::ports::ConversionError;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// Packages paragraphs into a minimal OOXML word document: the three
/// required parts and one run per paragraph, nothing else.
pub fn build_docx(paragraphs: &[String]) -> Result<Vec<u8>, ConversionError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    write_entry(&mut writer, options, "[Content_Types].xml", CONTENT_TYPES_XML)?;
    write_entry(&mut writer, options, "_rels/.rels", RELS_XML)?;
    write_entry(&mut writer, options, "word/document.xml", &document_xml(paragraphs))?;

    let cursor = writer
        .finish()
        .map_err(|e| ConversionError::RenderFailed(format!("docx packaging failed: {e}")))?;
    Ok(cursor.into_inner())
}

fn write_entry(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
    name: &str,
    content: &str,
) -> Result<(), ConversionError> {
    writer
        .start_file(name, options)
        .map_err(|e| ConversionError::RenderFailed(format!("docx packaging failed: {e}")))?;
    writer
        .write_all(content.as_bytes())
        .map_err(|e| ConversionError::RenderFailed(format!("docx packaging failed: {e}")))?;
    Ok(())
}

fn document_xml(paragraphs: &[String]) -> String {
    let mut body = String::new();
    for paragraph in paragraphs {
        body.push_str("<w:p><w:r><w:t xml:space=\"preserve\">");
        body.push_str(&escape_xml(paragraph));
        body.push_str("</w:t></w:r></w:p>");
    }
    if paragraphs.is_empty() {
        body.push_str("<w:p/>");
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
<w:body>{body}</w:body></w:document>"
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
