use std::sync::Arc;

use docrelay::application::ports::ImageInput;
use docrelay::application::services::{ConversionService, ConversionServiceError};

use crate::helpers::{InMemoryStagingStore, MockConverter};

fn service() -> (
    ConversionService<MockConverter, InMemoryStagingStore>,
    Arc<InMemoryStagingStore>,
) {
    let staging = Arc::new(InMemoryStagingStore::default());
    (
        ConversionService::new(Arc::new(MockConverter), Arc::clone(&staging)),
        staging,
    )
}

#[tokio::test]
async fn given_pdf_when_converting_to_docx_then_filename_extension_swapped() {
    let (service, _) = service();

    let staged = service
        .pdf_to_docx(b"%PDF fake".to_vec(), "annual report.pdf")
        .await
        .unwrap();

    assert_eq!(staged.filename, "annual report.docx");
    assert!(staged.key.ends_with("-annual report.docx"));
}

#[tokio::test]
async fn given_name_without_extension_when_converting_then_extension_appended() {
    let (service, _) = service();

    let staged = service
        .docx_to_pdf(b"PK fake".to_vec(), "notes")
        .await
        .unwrap();

    assert_eq!(staged.filename, "notes.pdf");
}

#[tokio::test]
async fn given_conversion_output_when_staged_then_key_carries_timestamp_prefix() {
    let (service, staging) = service();

    let staged = service.text_to_pdf("hello").await.unwrap();

    let (prefix, rest) = staged.key.split_once('-').unwrap();
    assert!(prefix.parse::<i64>().is_ok());
    assert_eq!(rest, "text.pdf");
    assert_eq!(staging.key_count(), 1);
}

#[tokio::test]
async fn given_staged_output_when_retrieved_then_bytes_returned_and_object_removed() {
    let (service, staging) = service();

    let staged = service.text_to_pdf("hello").await.unwrap();
    let bytes = service.retrieve(&staged).await.unwrap();

    assert_eq!(bytes, b"text-pdf-bytes");
    assert_eq!(staging.key_count(), 0);
}

#[tokio::test]
async fn given_empty_image_list_when_converting_then_invalid_input() {
    let (service, staging) = service();

    let result = service.images_to_pdf(Vec::<ImageInput>::new()).await;

    assert!(matches!(
        result,
        Err(ConversionServiceError::Conversion(_))
    ));
    assert_eq!(staging.key_count(), 0);
}

#[tokio::test]
async fn given_images_when_converting_then_single_staged_pdf() {
    let (service, _) = service();

    let images = vec![
        ImageInput {
            filename: "a.png".to_string(),
            data: vec![1, 2, 3],
        },
        ImageInput {
            filename: "b.png".to_string(),
            data: vec![4, 5, 6],
        },
    ];

    let staged = service.images_to_pdf(images).await.unwrap();
    assert_eq!(staged.filename, "images.pdf");
}
