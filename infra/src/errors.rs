//! Infrastructure error types

use thiserror::Error;

/// Errors raised while constructing infrastructure components
///
/// These surface at startup only; once a provider is built, call-time
/// failures are reported through `sg_core::ProviderError` instead.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Invalid or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Metrics recorder construction or registration failed
    #[error("Metrics error: {0}")]
    Metrics(String),
}
