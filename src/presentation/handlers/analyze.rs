use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, FormatConverter, StagingStore};
use crate::application::services::UploadedFile;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::chat::{chat_error_response, parse_provider};

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One-shot document analysis: a question plus uploads, no history.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<F, C, S>(
    State(state): State<AppState<F, C, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let mut question = String::new();
    let mut provider_name: Option<String> = None;
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
            "question" => question = value,
            "provider" => provider_name = Some(value),
            other => tracing::debug!(field = %other, "Ignoring unknown multipart field"),
        }
    }

    let provider = match parse_provider(provider_name.as_deref()) {
        Ok(p) => p,
        Err(response) => return response,
    };

    if files.is_empty() {
        tracing::warn!("Analyze request with no files");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No files uploaded".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(
        provider = %provider,
        question = %sanitize_prompt(&question),
        file_count = files.len(),
        "Processing analyze request"
    );

    let attachments = state.attachment_classifier.classify(files).await;

    match state
        .chat_service
        .analyze(
            provider,
            &question,
            attachments.images,
            attachments.document_texts,
        )
        .await
    {
        Ok(reply) => {
            tracing::info!("Analyze request successful");
            (
                StatusCode::OK,
                Json(AnalyzeResponse { reply: reply.text }),
            )
                .into_response()
        }
        Err(e) => chat_error_response(e),
    }
}
