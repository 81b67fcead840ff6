use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::ChatBackend;
use crate::domain::ProviderId;
use crate::presentation::config::ProviderSettings;

use super::gemini_client::GeminiChatClient;
use super::openai_client::OpenAiChatClient;

pub struct ChatBackendFactory;

impl ChatBackendFactory {
    /// Builds one backend per configured provider. A provider with no API
    /// key is simply absent from the map; requests naming it fail with a
    /// client error instead of a startup error.
    pub fn create(settings: &ProviderSettings) -> HashMap<ProviderId, Arc<dyn ChatBackend>> {
        let mut backends: HashMap<ProviderId, Arc<dyn ChatBackend>> = HashMap::new();

        if let Some(key) = non_empty(settings.openai_api_key.as_deref()) {
            backends.insert(
                ProviderId::OpenAi,
                Arc::new(OpenAiChatClient::new(key, settings.openai_model.clone())),
            );
            tracing::info!(model = %settings.openai_model, "OpenAI backend enabled");
        }

        if let Some(key) = non_empty(settings.gemini_api_key.as_deref()) {
            backends.insert(
                ProviderId::Gemini,
                Arc::new(GeminiChatClient::new(key, settings.gemini_model.clone())),
            );
            tracing::info!(model = %settings.gemini_model, "Gemini backend enabled");
        }

        if backends.is_empty() {
            tracing::warn!("No provider API keys configured, chat endpoints will reject requests");
        }

        backends
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
