//! Reply envelope and wire-level error codes
//!
//! Callers on the message bus distinguish outcomes solely by the
//! `status` and `message` fields of the reply; transport-level signals
//! never leak through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of error codes a reply can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Transport failure, non-success status, or undecodable body
    CallError,
    /// The provider rejected every receiver
    InvalidReceiversAll,
    /// The provider rejected some receivers and accepted others
    InvalidReceiversPartial,
    /// The request named an unregistered provider
    InvalidProvider,
    /// The request carried an unknown action
    InvalidAction,
}

impl ErrorCode {
    /// Wire string of the code, as seen by bus callers
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::CallError => "provider.apicall.error",
            ErrorCode::InvalidReceiversAll => "invalid.receivers.all",
            ErrorCode::InvalidReceiversPartial => "invalid.receivers.partial",
            ErrorCode::InvalidProvider => "invalid.provider",
            ErrorCode::InvalidAction => "invalid.action",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reply status discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Ok,
    Error,
}

/// The reply envelope sent back on the bus for every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsReply {
    /// Outcome discriminator
    pub status: ReplyStatus,

    /// Error code; only present on error replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Report payload; present on successful sends and on partial
    /// failures so the caller can see which receivers went through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl SmsReply {
    /// Successful reply with no payload
    pub fn ok() -> Self {
        Self {
            status: ReplyStatus::Ok,
            message: None,
            data: None,
        }
    }

    /// Successful reply carrying a payload
    pub fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            status: ReplyStatus::Ok,
            message: None,
            data: Some(data),
        }
    }

    /// Error reply with no payload
    pub fn error(code: ErrorCode) -> Self {
        Self {
            status: ReplyStatus::Error,
            message: Some(code.code().to_string()),
            data: None,
        }
    }

    /// Error reply carrying a (possibly partial) report payload
    pub fn error_with_data(code: ErrorCode, data: serde_json::Value) -> Self {
        Self {
            status: ReplyStatus::Error,
            message: Some(code.code().to_string()),
            data: Some(data),
        }
    }

    /// Whether this reply reports success
    pub fn is_ok(&self) -> bool {
        self.status == ReplyStatus::Ok
    }
}
