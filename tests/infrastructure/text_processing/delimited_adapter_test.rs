use docrelay::application::ports::{FileLoader, FileLoaderError};
use docrelay::domain::{MediaKind, SourceFile};
use docrelay::infrastructure::text_processing::DelimitedAdapter;

#[tokio::test]
async fn given_csv_rows_when_extracting_then_fields_joined_per_line() {
    let source = SourceFile::new("sales.csv", MediaKind::Csv);
    let data = b"region,total\nnorth,100\nsouth,250\n";

    let text = DelimitedAdapter::new()
        .extract_text(data, &source)
        .await
        .unwrap();

    assert_eq!(text, "region, total\nnorth, 100\nsouth, 250");
}

#[tokio::test]
async fn given_ragged_rows_when_extracting_then_flexible_parsing_succeeds() {
    let source = SourceFile::new("ragged.csv", MediaKind::Csv);
    let data = b"a,b,c\nd,e\n";

    let text = DelimitedAdapter::new()
        .extract_text(data, &source)
        .await
        .unwrap();

    assert_eq!(text, "a, b, c\nd, e");
}

#[tokio::test]
async fn given_wrong_media_kind_when_extracting_then_unsupported_error() {
    let source = SourceFile::new("a.pdf", MediaKind::Pdf);

    let result = DelimitedAdapter::new().extract_text(b"x", &source).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedMediaKind(_))
    ));
}
