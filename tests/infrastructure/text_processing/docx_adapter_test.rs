use docrelay::application::ports::{FileLoader, FileLoaderError};
use docrelay::domain::{MediaKind, SourceFile};
use docrelay::infrastructure::conversion::build_docx;
use docrelay::infrastructure::text_processing::DocxAdapter;

fn docx_source() -> SourceFile {
    SourceFile::new("memo.docx", MediaKind::Docx)
}

#[tokio::test]
async fn given_docx_archive_when_extracting_then_paragraph_text_recovered() {
    let data = build_docx(&[
        "First paragraph.".to_string(),
        "Second paragraph.".to_string(),
    ])
    .unwrap();

    let text = DocxAdapter::new()
        .extract_text(&data, &docx_source())
        .await
        .unwrap();

    assert_eq!(text, "First paragraph.\nSecond paragraph.");
}

#[tokio::test]
async fn given_escaped_characters_when_extracting_then_entities_unescaped() {
    let data = build_docx(&["a < b & c > d".to_string()]).unwrap();

    let text = DocxAdapter::new()
        .extract_text(&data, &docx_source())
        .await
        .unwrap();

    assert_eq!(text, "a < b & c > d");
}

#[tokio::test]
async fn given_bytes_that_are_not_a_zip_when_extracting_then_extraction_failed() {
    let result = DocxAdapter::new()
        .extract_text(b"definitely not a zip", &docx_source())
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_wrong_media_kind_when_extracting_then_unsupported_error() {
    let source = SourceFile::new("table.csv", MediaKind::Csv);

    let result = DocxAdapter::new().extract_text(b"x", &source).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedMediaKind(_))
    ));
}
