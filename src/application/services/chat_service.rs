use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{ChatBackend, GenerationOptions};
use crate::domain::{
    ConversationTurn, DocumentText, ImageAttachment, OutboundRequest, ProviderId, ProviderReply,
};

/// Sampling temperature for free-form conversation.
const CHAT_TEMPERATURE: f32 = 0.6;
/// Lower temperature for document analysis favors extractive, less
/// speculative answers.
const ANALYSIS_TEMPERATURE: f32 = 0.4;

/// Routes normalized requests to whichever providers were configured at
/// startup. Stateless across invocations; the only side effect is the
/// backend's outbound network call.
pub struct ChatService {
    backends: HashMap<ProviderId, Arc<dyn ChatBackend>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("empty request: no prompt and no attachments")]
    EmptyRequest,
    #[error("provider not configured: {0}")]
    ProviderUnavailable(ProviderId),
    #[error("provider call failed: {0}")]
    ProviderCallFailed(String),
}

impl ChatService {
    pub fn new(backends: HashMap<ProviderId, Arc<dyn ChatBackend>>) -> Self {
        Self { backends }
    }

    /// Free-form chat, with optional prior history and attachments.
    #[tracing::instrument(skip(self, prompt, history, images, document_texts), fields(provider = %provider))]
    pub async fn converse(
        &self,
        provider: ProviderId,
        prompt: &str,
        history: Vec<ConversationTurn>,
        images: Vec<ImageAttachment>,
        document_texts: Vec<DocumentText>,
    ) -> Result<ProviderReply, ChatServiceError> {
        let request = OutboundRequest::new(history, prompt, images, document_texts);
        self.dispatch(provider, request, CHAT_TEMPERATURE).await
    }

    /// Same mechanics as [`converse`](Self::converse) but with no history
    /// and a task-framing instruction instead of a free-form prompt.
    #[tracing::instrument(skip(self, question, images, document_texts), fields(provider = %provider))]
    pub async fn analyze(
        &self,
        provider: ProviderId,
        question: &str,
        images: Vec<ImageAttachment>,
        document_texts: Vec<DocumentText>,
    ) -> Result<ProviderReply, ChatServiceError> {
        let framed = if document_texts.is_empty() {
            question.trim().to_string()
        } else {
            format!(
                "You will get extracted text from files. Task: {}",
                question.trim()
            )
        };
        let request = OutboundRequest::new(Vec::new(), &framed, images, document_texts);
        self.dispatch(provider, request, ANALYSIS_TEMPERATURE).await
    }

    /// Validation happens here, before any provider is even looked up:
    /// a caller error must never cost a network call.
    async fn dispatch(
        &self,
        provider: ProviderId,
        request: OutboundRequest,
        temperature: f32,
    ) -> Result<ProviderReply, ChatServiceError> {
        if !request.has_content() {
            tracing::warn!("Rejecting request with no prompt and no attachments");
            return Err(ChatServiceError::EmptyRequest);
        }

        let backend = self
            .backends
            .get(&provider)
            .ok_or(ChatServiceError::ProviderUnavailable(provider))?;

        let options = GenerationOptions { temperature };
        let reply = backend
            .generate(&request, &options)
            .await
            .map_err(|e| ChatServiceError::ProviderCallFailed(e.to_string()))?;

        tracing::debug!(reply_len = reply.text.len(), "Provider reply received");
        Ok(reply)
    }
}
