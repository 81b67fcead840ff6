use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use docrelay::application::ports::{FileLoader, FileLoaderError};
use docrelay::application::services::{AttachmentClassifier, UploadedFile};
use docrelay::domain::SourceFile;

use crate::helpers::MockFileLoader;

struct FailingFileLoader;

#[async_trait::async_trait]
impl FileLoader for FailingFileLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        _source: &SourceFile,
    ) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::ExtractionFailed("corrupt file".to_string()))
    }
}

fn upload(filename: &str, mime: &str, data: &[u8]) -> UploadedFile {
    UploadedFile {
        filename: filename.to_string(),
        declared_mime: mime.to_string(),
        data: data.to_vec(),
    }
}

#[tokio::test]
async fn given_image_upload_when_classifying_then_bytes_kept_as_base64() {
    let classifier = AttachmentClassifier::new(Arc::new(MockFileLoader));

    let result = classifier
        .classify(vec![upload("photo.png", "image/png", b"rawbytes")])
        .await;

    assert_eq!(result.images.len(), 1);
    assert!(result.document_texts.is_empty());
    assert_eq!(result.images[0].mime_type, "image/png");
    assert_eq!(result.images[0].base64, BASE64.encode(b"rawbytes"));
}

#[tokio::test]
async fn given_image_with_generic_mime_when_classifying_then_mime_derived_from_extension() {
    let classifier = AttachmentClassifier::new(Arc::new(MockFileLoader));

    let result = classifier
        .classify(vec![upload(
            "photo.jpg",
            "application/octet-stream",
            b"rawbytes",
        )])
        .await;

    assert_eq!(result.images[0].mime_type, "image/jpeg");
}

#[tokio::test]
async fn given_text_document_when_classifying_then_text_extracted() {
    let classifier = AttachmentClassifier::new(Arc::new(MockFileLoader));

    let result = classifier
        .classify(vec![upload("notes.txt", "text/plain", b"meeting notes")])
        .await;

    assert!(result.images.is_empty());
    assert_eq!(result.document_texts.len(), 1);
    assert_eq!(result.document_texts[0].filename, "notes.txt");
    assert_eq!(result.document_texts[0].text, "meeting notes");
}

#[tokio::test]
async fn given_document_with_no_text_when_classifying_then_document_dropped() {
    let classifier = AttachmentClassifier::new(Arc::new(MockFileLoader));

    let result = classifier
        .classify(vec![upload("blank.txt", "text/plain", b"   \n")])
        .await;

    assert!(result.document_texts.is_empty());
}

#[tokio::test]
async fn given_failing_extraction_when_classifying_then_request_survives() {
    let classifier = AttachmentClassifier::new(Arc::new(FailingFileLoader));

    let result = classifier
        .classify(vec![
            upload("broken.pdf", "application/pdf", b"garbage"),
            upload("photo.png", "image/png", b"rawbytes"),
        ])
        .await;

    assert!(result.document_texts.is_empty());
    assert_eq!(result.images.len(), 1);
}

#[tokio::test]
async fn given_mixed_batch_when_classifying_then_split_into_both_kinds() {
    let classifier = AttachmentClassifier::new(Arc::new(MockFileLoader));

    let result = classifier
        .classify(vec![
            upload("photo.png", "image/png", b"rawbytes"),
            upload("notes.txt", "text/plain", b"some text"),
        ])
        .await;

    assert_eq!(result.images.len(), 1);
    assert_eq!(result.document_texts.len(), 1);
}
