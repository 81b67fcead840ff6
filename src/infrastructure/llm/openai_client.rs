use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::application::ports::{ChatBackend, ChatBackendError, GenerationOptions};
use crate::domain::{OutboundRequest, ProviderReply, EMPTY_TURN_PLACEHOLDER};

use super::content_sanitizer::sanitize_messages;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Value>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key, model)
    }

    pub fn with_base_url(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

/// Builds the chat-completions message array: one plain-content turn per
/// history entry, then the final user turn as a block list (text blocks
/// first, then one image_url block per image, placeholder if neither),
/// sanitized before transmission.
pub fn build_messages(request: &OutboundRequest) -> Vec<Value> {
    let mut messages: Vec<Value> = request
        .history
        .iter()
        .map(|turn| json!({ "role": turn.role.as_str(), "content": turn.content }))
        .collect();

    let mut content: Vec<Value> = request
        .user_text_blocks()
        .into_iter()
        .map(|text| json!({ "type": "text", "text": text }))
        .collect();

    for image in &request.images {
        content.push(json!({
            "type": "image_url",
            "image_url": {
                "url": format!("data:{};base64,{}", image.mime_type, image.base64),
            },
        }));
    }

    if content.is_empty() {
        content.push(json!({ "type": "text", "text": EMPTY_TURN_PLACEHOLDER }));
    }

    messages.push(json!({ "role": "user", "content": content }));

    sanitize_messages(messages)
}

#[async_trait]
impl ChatBackend for OpenAiChatClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(
        &self,
        request: &OutboundRequest,
        options: &GenerationOptions,
    ) -> Result<ProviderReply, ChatBackendError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: build_messages(request),
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatBackendError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatBackendError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatBackendError::InvalidResponse(e.to_string()))?;

        // No choices or no content is an empty reply, not an error.
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        Ok(ProviderReply::new(text))
    }
}
