use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatBackend, ChatBackendError, GenerationOptions};
use crate::domain::{OutboundRequest, ProviderReply, TurnRole, EMPTY_TURN_PLACEHOLDER};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media parts. Variant order matters
/// for `#[serde(untagged)]` decoding; `Other` absorbs response part kinds
/// this client does not use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Other(serde_json::Value),
}

/// Base64 inline payload for image parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiChatClient {
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

fn gemini_role(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Assistant => "model",
    }
}

/// Builds the generateContent payload: one role-tagged content per history
/// turn, then the final user content with text parts first and inline
/// image data after them.
pub fn build_contents(request: &OutboundRequest) -> Vec<Content> {
    let mut contents: Vec<Content> = request
        .history
        .iter()
        .map(|turn| Content {
            role: Some(gemini_role(turn.role).to_string()),
            parts: vec![Part::Text {
                text: turn.content.clone(),
            }],
        })
        .collect();

    let mut parts: Vec<Part> = request
        .user_text_blocks()
        .into_iter()
        .map(|text| Part::Text { text })
        .collect();

    for image in &request.images {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.base64.clone(),
            },
        });
    }

    if parts.is_empty() {
        parts.push(Part::Text {
            text: EMPTY_TURN_PLACEHOLDER.to_string(),
        });
    }

    contents.push(Content {
        role: Some("user".to_string()),
        parts,
    });

    contents
}

#[async_trait]
impl ChatBackend for GeminiChatClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(
        &self,
        request: &OutboundRequest,
        options: &GenerationOptions,
    ) -> Result<ProviderReply, ChatBackendError> {
        let body = GenerateContentRequest {
            contents: build_contents(request),
            generation_config: GenerationConfig {
                temperature: options.temperature,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(url)
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

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatBackendError::InvalidResponse(e.to_string()))?;

        // First candidate's text parts, concatenated. No candidate or no
        // text is an empty reply, not an error.
        let text = generated
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| match part {
                        Part::Text { text } => Some(text),
                        _ => None,
                    })
                    .collect::<String>()
            })
            .unwrap_or_default()
            .trim()
            .to_string();

        Ok(ProviderReply::new(text))
    }
}
