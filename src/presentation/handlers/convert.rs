use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    ConversionError, FileLoader, FormatConverter, ImageInput, StagingStore,
};
use crate::application::services::{ConversionServiceError, StagedDocument};
use crate::presentation::state::AppState;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const PDF_MIME: &str = "application/pdf";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct TextToPdfRequest {
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn pdf_to_docx_handler<F, C, S>(
    State(state): State<AppState<F, C, S>>,
    multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let (filename, data) = match read_single_file(multipart).await {
        Ok(file) => file,
        Err(response) => return response,
    };

    let staged = match state.conversion_service.pdf_to_docx(data, &filename).await {
        Ok(staged) => staged,
        Err(e) => return conversion_error_response(e),
    };

    download_response(&state, staged, DOCX_MIME).await
}

#[tracing::instrument(skip(state, multipart))]
pub async fn docx_to_pdf_handler<F, C, S>(
    State(state): State<AppState<F, C, S>>,
    multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let (filename, data) = match read_single_file(multipart).await {
        Ok(file) => file,
        Err(response) => return response,
    };

    let staged = match state.conversion_service.docx_to_pdf(data, &filename).await {
        Ok(staged) => staged,
        Err(e) => return conversion_error_response(e),
    };

    download_response(&state, staged, PDF_MIME).await
}

#[tracing::instrument(skip(state, multipart))]
pub async fn images_to_pdf_handler<F, C, S>(
    State(state): State<AppState<F, C, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let mut images: Vec<ImageInput> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => return multipart_error_response(e),
        };

        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => return multipart_error_response(e),
        };
        images.push(ImageInput {
            filename,
            data: data.to_vec(),
        });
    }

    if images.is_empty() {
        tracing::warn!("Images-to-PDF request with no files");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No images uploaded".to_string(),
            }),
        )
            .into_response();
    }

    let staged = match state.conversion_service.images_to_pdf(images).await {
        Ok(staged) => staged,
        Err(e) => return conversion_error_response(e),
    };

    download_response(&state, staged, PDF_MIME).await
}

#[tracing::instrument(skip(state, request))]
pub async fn text_to_pdf_handler<F, C, S>(
    State(state): State<AppState<F, C, S>>,
    Json(request): Json<TextToPdfRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let staged = match state.conversion_service.text_to_pdf(&request.text).await {
        Ok(staged) => staged,
        Err(e) => return conversion_error_response(e),
    };

    download_response(&state, staged, PDF_MIME).await
}

/// Pulls the one expected upload out of the multipart body.
async fn read_single_file(
    mut multipart: Multipart,
) -> Result<(String, Vec<u8>), axum::response::Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => return Err(multipart_error_response(e)),
        };

        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(multipart_error_response)?
            .to_vec();
        tracing::debug!(filename = %filename, bytes = data.len(), "File upload received");
        return Ok((filename, data));
    }

    tracing::warn!("Conversion request with no file");
    Err((
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "No file uploaded".to_string(),
        }),
    )
        .into_response())
}

async fn download_response<F, C, S>(
    state: &AppState<F, C, S>,
    staged: StagedDocument,
    content_type: &str,
) -> axum::response::Response
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    match state.conversion_service.retrieve(&staged).await {
        Ok(bytes) => {
            tracing::info!(filename = %staged.filename, bytes = bytes.len(), "Conversion download ready");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", staged.filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => conversion_error_response(e),
    }
}

fn conversion_error_response(error: ConversionServiceError) -> axum::response::Response {
    let status = match &error {
        ConversionServiceError::Conversion(ConversionError::InvalidInput(_)) => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::error!(error = %error, "Conversion failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn multipart_error_response(error: axum::extract::multipart::MultipartError) -> axum::response::Response {
    tracing::error!(error = %error, "Failed to read multipart");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("Failed to read multipart: {}", error),
        }),
    )
        .into_response()
}
