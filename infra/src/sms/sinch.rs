//! Sinch SMS provider
//!
//! The simple backend: one batch POST authenticated with a static
//! bearer token. The batches API answers 201 on success with the batch
//! descriptor; every receiver in the batch is considered accepted.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, error};

use crate::errors::InfrastructureError;
use sg_core::{ProviderError, SmsProvider, SmsSendingReport};
use sg_shared::SinchConfig;

/// Provider backed by the token-authenticated batches API
pub struct SinchSmsProvider {
    http: reqwest::Client,
    api_token: String,
    endpoint: String,
    sender_id: String,
    client_reference: String,
}

impl SinchSmsProvider {
    /// Create a provider for the configured service plan
    pub fn new(config: SinchConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| InfrastructureError::Http(e.to_string()))?;
        Ok(Self {
            http,
            api_token: config.api_token,
            endpoint: format!("{}/{}/batches", config.base_url, config.service_plan_id),
            sender_id: config.sender_id,
            client_reference: config.client_reference,
        })
    }
}

#[async_trait]
impl SmsProvider for SinchSmsProvider {
    async fn send_sms(
        &self,
        parameters: Map<String, Value>,
    ) -> Result<SmsSendingReport, ProviderError> {
        let mut batch = json!({
            "to": parameters.get("receivers").cloned().unwrap_or(Value::Array(Vec::new())),
            "body": parameters.get("message").cloned().unwrap_or(Value::Null),
            "client_reference": self.client_reference,
        });
        if !self.sender_id.is_empty() {
            batch["from"] = Value::String(self.sender_id.clone());
        }

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_token)
            .json(&batch)
            .send()
            .await
            .map_err(|e| ProviderError::call(format!("http request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::call(format!("could not read batch response: {e}")))?;
        if status != reqwest::StatusCode::CREATED {
            error!(status = %status, body = %body, "batch call returned an error status");
            return Err(ProviderError::call(format!(
                "batch call returned status {status}"
            )));
        }

        let report: SinchBatchReport = serde_json::from_str(&body).map_err(|e| {
            error!(body = %body, "could not decode batch report");
            ProviderError::call(format!("could not decode batch report: {e}"))
        })?;
        debug!(batch = %report.id, "batch accepted");
        Ok(report.into_generic())
    }

    async fn get_info(&self, _parameters: Map<String, Value>) -> Result<Value, ProviderError> {
        let response = self
            .http
            .get(&self.endpoint)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| ProviderError::call(format!("http request failed: {e}")))?;
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::call(format!("could not read info response: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::call(format!("could not decode info response: {e}")))
    }
}

/// Batch descriptor as the API returns it
#[derive(Debug, Clone, Default, Deserialize)]
struct SinchBatchReport {
    #[serde(default)]
    id: String,
    #[serde(default)]
    to: Vec<String>,
}

impl SinchBatchReport {
    /// Map to the generic report: one batch id, every receiver accepted
    fn into_generic(self) -> SmsSendingReport {
        SmsSendingReport {
            ids: vec![self.id],
            invalid_receivers: Vec::new(),
            valid_receivers: self.to,
        }
    }
}
