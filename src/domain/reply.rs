use serde::Serialize;

/// The only information kept from a provider response. An empty string
/// means the provider answered with no text; callers treat that as
/// "no answer", not as failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderReply {
    pub text: String,
}

impl ProviderReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
