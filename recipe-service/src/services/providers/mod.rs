//! Text generation provider abstractions and implementations.
//!
//! Handlers only see [`TextProvider`]; the concrete client is chosen at
//! startup and injected through application state.

pub mod gemini;
pub mod mock;
pub mod unconfigured;

pub use gemini::{GeminiConfig, GeminiTextProvider};
pub use mock::MockTextProvider;
pub use unconfigured::UnconfiguredTextProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Empty response from provider")]
    EmptyResponse,
}

/// A single completion.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

/// Single-shot text completion.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send one prompt and wait for the whole reply.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Local readiness check; never calls the upstream API.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
