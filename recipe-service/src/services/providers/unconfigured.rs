//! Stand-in used when the real provider could not be constructed.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Fails every call with the error captured at startup, so the service can
/// come up and report the problem per request.
pub struct UnconfiguredTextProvider {
    error: ProviderError,
}

impl UnconfiguredTextProvider {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl TextProvider for UnconfiguredTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<ProviderResponse, ProviderError> {
        Err(self.error.clone())
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Err(self.error.clone())
    }
}
