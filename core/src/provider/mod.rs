//! Provider contract and the generic send path
//!
//! Backends implement [`SmsProvider`]; everything providers have in
//! common lives here as free functions composed by the dispatcher:
//! receiver normalization, latency metrics, and reply construction.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{debug, error};

use crate::domain::SmsSendingReport;
use crate::errors::ProviderError;
use crate::metrics::SmsMetricsRecorder;
use sg_shared::{format_phone, SmsReply};

/// Contract every SMS delivery backend implements
///
/// Implementations are constructed once at startup from their
/// configuration block and live for the process lifetime, shared by all
/// concurrent requests.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send a text message
    ///
    /// `parameters` carries the already-normalized `receivers` list and
    /// the `message` body, plus any provider-specific fields the caller
    /// supplied.
    async fn send_sms(
        &self,
        parameters: Map<String, Value>,
    ) -> Result<SmsSendingReport, ProviderError>;

    /// Retrieve account/quota information
    ///
    /// Parameters are forwarded verbatim; the provider's response body
    /// is returned as-is.
    async fn get_info(&self, parameters: Map<String, Value>) -> Result<Value, ProviderError>;
}

/// Normalize the `receivers` parameter in place
///
/// Entries that are not strings are dropped; string entries are run
/// through [`format_phone`]. A missing or non-array `receivers` value
/// is replaced by an empty list.
pub fn normalize_receivers(parameters: &mut Map<String, Value>) {
    let receivers = match parameters.get("receivers") {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(|receiver| Value::String(format_phone(receiver)))
            .collect(),
        _ => Vec::new(),
    };
    parameters.insert("receivers".to_string(), Value::Array(receivers));
}

/// The generic send path wrapped around every provider's `send_sms`
///
/// Normalizes the receivers, times the provider interaction, hands the
/// elapsed duration to the metrics recorder whatever the outcome, and
/// maps the result to a reply.
pub async fn send_with_metrics(
    provider: &dyn SmsProvider,
    metrics: &dyn SmsMetricsRecorder,
    mut parameters: Map<String, Value>,
) -> SmsReply {
    normalize_receivers(&mut parameters);

    let start = Instant::now();
    let result = provider.send_sms(parameters).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(report) => {
            metrics.on_sms_sent(duration_ms);
            reply_ok(&report)
        }
        Err(err) => {
            metrics.on_sms_failure(duration_ms);
            reply_error(&err)
        }
    }
}

/// Build the success reply for a send report
pub fn reply_ok(report: &SmsSendingReport) -> SmsReply {
    debug!(valid = report.valid_receivers.len(), ids = report.ids.len(), "sms sent");
    SmsReply::ok_with_data(report.to_value())
}

/// Log a provider error and build the matching error reply
///
/// Partial reports travel in the reply's data field so the caller can
/// see which receivers went through.
pub fn reply_error(err: &ProviderError) -> SmsReply {
    let code = err.error_code();
    error!(code = code.code(), "provider call failed: {err}");
    match err.report() {
        Some(report) => SmsReply::error_with_data(code, report.to_value()),
        None => SmsReply::error(code),
    }
}
