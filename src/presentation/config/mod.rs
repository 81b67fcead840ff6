mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ProviderSettings, ServerSettings, Settings, StorageSettings};
