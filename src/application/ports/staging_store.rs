use async_trait::async_trait;

#[async_trait]
pub trait StagingStore: Send + Sync {
    /// Writes one finished output under the given key and returns it.
    async fn store(&self, key: &str, bytes: Vec<u8>) -> Result<(), StagingStoreError>;

    async fn fetch(&self, key: &str) -> Result<Vec<u8>, StagingStoreError>;

    async fn delete(&self, key: &str) -> Result<(), StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
