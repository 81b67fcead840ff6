use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, FormatConverter, StagingStore};
use crate::application::services::UploadedFile;
use crate::domain::ConversationTurn;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::chat::{chat_error_response, parse_provider, ChatResponse};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Multipart variant of the chat endpoint. Text fields carry the prompt,
/// provider and history; every part with a filename is an upload.
#[tracing::instrument(skip(state, multipart))]
pub async fn chat_with_files_handler<F, C, S>(
    State(state): State<AppState<F, C, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let mut message = String::new();
    let mut provider_name: Option<String> = None;
    let mut history: Vec<ConversationTurn> = Vec::new();
    let mut files: Vec<UploadedFile> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        if let Some(filename) = field.file_name().map(String::from) {
            let declared_mime = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = match field.bytes().await {
                Ok(d) => d,
                Err(e) => {
                    tracing::error!(error = %e, filename = %filename, "Failed to read file bytes");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read file: {}", e),
                        }),
                    )
                        .into_response();
                }
            };
            tracing::debug!(filename = %filename, bytes = data.len(), "File upload received");
            files.push(UploadedFile {
                filename,
                declared_mime,
                data: data.to_vec(),
            });
            continue;
        }

        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        match name.as_str() {
            "message" => message = value,
            "provider" => provider_name = Some(value),
            "history" => match serde_json::from_str(&value) {
                Ok(turns) => history = turns,
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed history field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Malformed history: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            other => tracing::debug!(field = %other, "Ignoring unknown multipart field"),
        }
    }

    let provider = match parse_provider(provider_name.as_deref()) {
        Ok(p) => p,
        Err(response) => return response,
    };

    tracing::debug!(
        provider = %provider,
        prompt = %sanitize_prompt(&message),
        file_count = files.len(),
        "Processing chat request with files"
    );

    let attachments = state.attachment_classifier.classify(files).await;

    match state
        .chat_service
        .converse(
            provider,
            &message,
            history,
            attachments.images,
            attachments.document_texts,
        )
        .await
    {
        Ok(reply) => {
            tracing::info!("Chat with files successful");
            (StatusCode::OK, Json(ChatResponse { reply: reply.text })).into_response()
        }
        Err(e) => chat_error_response(e),
    }
}
