use std::sync::Arc;

use docrelay::application::ports::FileLoader;
use docrelay::domain::{MediaKind, SourceFile};
use docrelay::infrastructure::text_processing::{
    CompositeFileLoader, DelimitedAdapter, PlainTextAdapter,
};

fn loader() -> CompositeFileLoader {
    let csv_adapter: Arc<dyn FileLoader> = Arc::new(DelimitedAdapter::new());
    CompositeFileLoader::new(
        vec![(MediaKind::Csv, csv_adapter)],
        Arc::new(PlainTextAdapter),
    )
}

#[tokio::test]
async fn given_registered_kind_when_loading_then_delegates_to_adapter() {
    let source = SourceFile::new("table.csv", MediaKind::Csv);

    let text = loader()
        .extract_text(b"a,b\nc,d\n", &source)
        .await
        .unwrap();

    assert_eq!(text, "a, b\nc, d");
}

#[tokio::test]
async fn given_unregistered_kind_when_loading_then_falls_back_to_plain_text() {
    let source = SourceFile::new("README", MediaKind::Unknown);

    let text = loader()
        .extract_text(b"just bytes", &source)
        .await
        .unwrap();

    assert_eq!(text, "just bytes");
}

#[tokio::test]
async fn given_invalid_utf8_when_falling_back_then_decoded_lossily() {
    let source = SourceFile::new("blob", MediaKind::Unknown);

    let text = loader()
        .extract_text(&[0x68, 0x69, 0xFF], &source)
        .await
        .unwrap();

    assert!(text.starts_with("hi"));
}
