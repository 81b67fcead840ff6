use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, FormatConverter, StagingStore};
use crate::application::services::ChatServiceError;
use crate::domain::{ConversationTurn, ProviderId};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<F, C, S>(
    State(state): State<AppState<F, C, S>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let provider = match parse_provider(request.provider.as_deref()) {
        Ok(p) => p,
        Err(response) => return response,
    };

    tracing::debug!(
        provider = %provider,
        prompt = %sanitize_prompt(&request.message),
        history_turns = request.history.len(),
        "Processing chat request"
    );

    match state
        .chat_service
        .converse(
            provider,
            &request.message,
            request.history,
            Vec::new(),
            Vec::new(),
        )
        .await
    {
        Ok(reply) => {
            tracing::info!("Chat request successful");
            (StatusCode::OK, Json(ChatResponse { reply: reply.text })).into_response()
        }
        Err(e) => chat_error_response(e),
    }
}

/// Maps the service error taxonomy onto HTTP statuses: caller mistakes
/// are 400, an upstream provider failure is 502.
pub(super) fn chat_error_response(error: ChatServiceError) -> axum::response::Response {
    let status = match &error {
        ChatServiceError::EmptyRequest | ChatServiceError::ProviderUnavailable(_) => {
            StatusCode::BAD_REQUEST
        }
        ChatServiceError::ProviderCallFailed(_) => StatusCode::BAD_GATEWAY,
    };
    tracing::error!(error = %error, "Chat request failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub(super) fn parse_provider(
    provider: Option<&str>,
) -> Result<ProviderId, axum::response::Response> {
    let name = provider.unwrap_or("openai");
    name.parse::<ProviderId>().map_err(|e| {
        tracing::warn!(provider = %name, "Unknown provider requested");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response()
    })
}
