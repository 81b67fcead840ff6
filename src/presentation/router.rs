use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, FormatConverter, StagingStore};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, chat_handler, chat_with_files_handler, docx_to_pdf_handler, health_handler,
    images_to_pdf_handler, pdf_to_docx_handler, text_to_pdf_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, C, S>(state: AppState<F, C, S>) -> Router
where
    F: FileLoader + 'static,
    C: FormatConverter + 'static,
    S: StagingStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler::<F, C, S>))
        .route(
            "/api/chat-with-files",
            post(chat_with_files_handler::<F, C, S>),
        )
        .route("/api/analyze", post(analyze_handler::<F, C, S>))
        .route(
            "/api/convert/pdf-to-docx",
            post(pdf_to_docx_handler::<F, C, S>),
        )
        .route(
            "/api/convert/docx-to-pdf",
            post(docx_to_pdf_handler::<F, C, S>),
        )
        .route(
            "/api/convert/images-to-pdf",
            post(images_to_pdf_handler::<F, C, S>),
        )
        .route(
            "/api/convert/text-to-pdf",
            post(text_to_pdf_handler::<F, C, S>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
