//! Generic sending report
//!
//! Every backend decodes its provider-specific response and maps it to
//! this shape before it reaches the caller.

use serde::{Deserialize, Serialize};

/// Outcome of one send call, normalized across providers
///
/// `valid_receivers` and `invalid_receivers` partition the normalized
/// receiver set: a receiver appears in exactly one of them, and either
/// list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsSendingReport {
    /// Opaque message identifiers assigned by the provider
    #[serde(default)]
    pub ids: Vec<String>,

    /// Receivers the provider rejected
    #[serde(default)]
    pub invalid_receivers: Vec<String>,

    /// Receivers the provider accepted
    #[serde(default)]
    pub valid_receivers: Vec<String>,
}

impl SmsSendingReport {
    /// Serialize the report into the reply payload shape
    pub fn to_value(&self) -> serde_json::Value {
        // A report is plain data; serialization cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
