use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use docrelay::application::services::{AttachmentClassifier, ChatService, ConversionService};
use docrelay::infrastructure::conversion::DocumentConverter;
use docrelay::infrastructure::llm::ChatBackendFactory;
use docrelay::infrastructure::observability::{init_tracing, TracingConfig};
use docrelay::infrastructure::storage::LocalStagingStore;
use docrelay::infrastructure::text_processing::ExtractorFactory;
use docrelay::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(|e| anyhow::anyhow!(e))?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        },
        settings.server.port,
    );

    let backends = ChatBackendFactory::create(&settings.providers);
    let chat_service = Arc::new(ChatService::new(backends));

    let file_loader = ExtractorFactory::create();
    let attachment_classifier = Arc::new(AttachmentClassifier::new(file_loader));

    let staging = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.storage.staging_dir))
            .map_err(|e| anyhow::anyhow!("staging store init failed: {e}"))?,
    );
    let converter = Arc::new(DocumentConverter::new());
    let conversion_service = Arc::new(ConversionService::new(converter, staging));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        chat_service,
        attachment_classifier,
        conversion_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
