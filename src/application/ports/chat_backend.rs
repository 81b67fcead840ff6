use async_trait::async_trait;

use crate::domain::{OutboundRequest, ProviderReply};

/// Per-call sampling parameters chosen by the service layer, not by the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Maps the normalized request into this provider's wire schema,
    /// invokes it, and extracts the primary reply text. A response that
    /// carries no text is an empty reply, not an error.
    async fn generate(
        &self,
        request: &OutboundRequest,
        options: &GenerationOptions,
    ) -> Result<ProviderReply, ChatBackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatBackendError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
