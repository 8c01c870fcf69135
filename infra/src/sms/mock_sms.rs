//! Mock SMS provider
//!
//! Logs messages instead of sending them. Registered under the `mock`
//! provider kind for development setups and used directly by tests.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use sg_core::{ProviderError, SmsProvider, SmsSendingReport};
use sg_shared::mask_phone_number;

/// Provider that accepts every receiver without any network call
#[derive(Debug, Default)]
pub struct MockSmsProvider {
    message_count: AtomicU64,
}

impl MockSmsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of send calls this instance has served
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send_sms(
        &self,
        parameters: Map<String, Value>,
    ) -> Result<SmsSendingReport, ProviderError> {
        let receivers: Vec<String> = match parameters.get("receivers") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        let batch = self.message_count.fetch_add(1, Ordering::SeqCst);
        for receiver in &receivers {
            info!("[MOCK SMS] to {}", mask_phone_number(receiver));
        }

        let ids = (0..receivers.len())
            .map(|i| format!("mock-{batch}-{i}"))
            .collect();
        Ok(SmsSendingReport {
            ids,
            invalid_receivers: Vec::new(),
            valid_receivers: receivers,
        })
    }

    async fn get_info(&self, _parameters: Map<String, Value>) -> Result<Value, ProviderError> {
        Ok(json!({ "provider": "mock", "creditsLeft": 0 }))
    }
}
