//! OVH SMS provider
//!
//! Sending is a two-step protocol: a discovery call lists the sms
//! services attached to the account, then the message job is posted to
//! the first one. The job response is decoded into the provider report
//! and classified against the receiver lists.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::errors::InfrastructureError;
use crate::sms::ovh_client::OvhClient;
use sg_core::{ProviderError, SmsProvider, SmsSendingReport};
use sg_shared::OvhConfig;

/// Provider backed by the signed OVH client
pub struct OvhSmsProvider {
    client: OvhClient,
}

impl OvhSmsProvider {
    /// Create a provider for the configured region endpoint
    pub fn new(config: OvhConfig) -> Result<Self, InfrastructureError> {
        Self::with_base_url(config.endpoint.base_url(), config)
    }

    /// Create a provider against a non-standard deployment of the API;
    /// used by integration tests
    pub fn with_base_url(
        base_url: impl Into<String>,
        config: OvhConfig,
    ) -> Result<Self, InfrastructureError> {
        let client = OvhClient::new(
            base_url,
            config.application_key,
            config.application_secret,
            config.consumer_key,
        )?;
        Ok(Self { client })
    }

    /// Discovery step: the sms service identifier for the account
    ///
    /// Returns the first element of `GET /sms/`. Accounts with several
    /// services always get the first one, an arbitrary but
    /// deterministic choice.
    async fn retrieve_sms_service(&self) -> Result<String, ProviderError> {
        let response = self.client.get("/sms/", &Map::new()).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::call(format!("could not read /sms/ response: {e}")))?;
        if status != reqwest::StatusCode::OK {
            error!(status = %status, body = %body, "/sms/ returned an error status");
            return Err(ProviderError::call(format!("/sms/ returned status {status}")));
        }
        debug!(body = %body, "/sms/ call returned");
        let services: Vec<String> = serde_json::from_str(&body)
            .map_err(|e| ProviderError::call(format!("could not decode service list: {e}")))?;
        services
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::call("account has no sms service"))
    }
}

#[async_trait]
impl SmsProvider for OvhSmsProvider {
    async fn send_sms(
        &self,
        parameters: Map<String, Value>,
    ) -> Result<SmsSendingReport, ProviderError> {
        let service = self.retrieve_sms_service().await?;

        let response = self
            .client
            .post(&format!("/sms/{service}/jobs/"), &parameters)
            .await?;
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::call(format!("could not read job response: {e}")))?;

        let report: OvhSendingReport = serde_json::from_str(&body).map_err(|e| {
            error!(body = %body, "could not decode sending report");
            ProviderError::call(format!("could not decode sending report: {e}"))
        })?;
        debug!(credits = report.total_credits_removed, "credits removed by send");

        classify(report.into_generic())
    }

    async fn get_info(&self, parameters: Map<String, Value>) -> Result<Value, ProviderError> {
        let service = self.retrieve_sms_service().await?;

        let response = self.client.get(&format!("/sms/{service}"), &parameters).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::call(format!("could not read info response: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::call(format!("could not decode info response: {e}")))
    }
}

/// Job response shape as OVH returns it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OvhSendingReport {
    #[serde(default)]
    ids: Vec<i64>,
    #[serde(default)]
    invalid_receivers: Vec<String>,
    #[serde(default)]
    total_credits_removed: f64,
    #[serde(default)]
    valid_receivers: Vec<String>,
}

impl OvhSendingReport {
    /// Map to the generic report; numeric ids become opaque strings
    fn into_generic(self) -> SmsSendingReport {
        SmsSendingReport {
            ids: self.ids.iter().map(i64::to_string).collect(),
            invalid_receivers: self.invalid_receivers,
            valid_receivers: self.valid_receivers,
        }
    }
}

/// Classify a decoded report against its receiver lists
fn classify(report: SmsSendingReport) -> Result<SmsSendingReport, ProviderError> {
    if report.valid_receivers.is_empty() {
        Err(ProviderError::AllReceiversInvalid { report })
    } else if !report.invalid_receivers.is_empty() {
        Err(ProviderError::SomeReceiversInvalid { report })
    } else {
        Ok(report)
    }
}
