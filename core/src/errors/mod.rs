//! Domain-specific error types for provider calls

use crate::domain::SmsSendingReport;
use sg_shared::ErrorCode;
use thiserror::Error;

/// Errors a provider call can end in
///
/// Every variant is terminal for the current request; nothing is
/// retried. The receiver variants carry the decoded report so partial
/// outcomes stay visible to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// Transport failure, non-success status code, or undecodable body
    #[error("provider api call failed: {reason}")]
    Call { reason: String },

    /// The provider rejected every receiver
    #[error("all receivers were rejected by the provider")]
    AllReceiversInvalid { report: SmsSendingReport },

    /// The provider rejected some receivers but accepted others
    #[error("some receivers were rejected by the provider")]
    SomeReceiversInvalid { report: SmsSendingReport },
}

impl ProviderError {
    /// Shorthand for a call-level failure
    pub fn call(reason: impl Into<String>) -> Self {
        ProviderError::Call {
            reason: reason.into(),
        }
    }

    /// Wire-level error code of this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ProviderError::Call { .. } => ErrorCode::CallError,
            ProviderError::AllReceiversInvalid { .. } => ErrorCode::InvalidReceiversAll,
            ProviderError::SomeReceiversInvalid { .. } => ErrorCode::InvalidReceiversPartial,
        }
    }

    /// Report attached to this error, when the provider produced one
    pub fn report(&self) -> Option<&SmsSendingReport> {
        match self {
            ProviderError::Call { .. } => None,
            ProviderError::AllReceiversInvalid { report }
            | ProviderError::SomeReceiversInvalid { report } => Some(report),
        }
    }
}
