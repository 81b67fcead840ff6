use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProviderSettings,
    pub storage: StorageSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Per-provider credentials and model names. A `None` key leaves that
/// provider unconfigured rather than failing startup.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub staging_dir: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        let environment = std::env::var("APP_ENV")
            .map(Environment::try_from)
            .unwrap_or(Ok(Environment::Local))?;

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            providers: ProviderSettings {
                openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
                openai_model: std::env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
                gemini_model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            },
            storage: StorageSettings {
                staging_dir: std::env::var("STAGING_DIR")
                    .unwrap_or_else(|_| "./staging".to_string()),
            },
            environment,
        })
    }
}
