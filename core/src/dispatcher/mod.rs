//! Request dispatcher
//!
//! The single entry point the message-bus transport calls for every
//! inbound request. Routing errors are detected here before any
//! provider is touched; every code path produces exactly one reply.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{SmsAction, SmsRequest};
use crate::metrics::SmsMetricsRecorder;
use crate::provider::{reply_error, send_with_metrics};
use crate::registry::ProviderRegistry;
use sg_shared::{ErrorCode, SmsReply};

#[cfg(test)]
mod tests;

/// Routes inbound requests to the configured providers
pub struct Dispatcher {
    registry: ProviderRegistry,
    metrics: Arc<dyn SmsMetricsRecorder>,
}

impl Dispatcher {
    /// Create a dispatcher over a populated registry
    pub fn new(registry: ProviderRegistry, metrics: Arc<dyn SmsMetricsRecorder>) -> Self {
        Self { registry, metrics }
    }

    /// Handle one request, producing exactly one reply
    pub async fn handle(&self, request: SmsRequest) -> SmsReply {
        let SmsRequest {
            action,
            provider,
            parameters,
        } = request;

        let Some(backend) = self.registry.resolve(&provider) else {
            warn!(provider = %provider, "request for unregistered provider");
            return SmsReply::error(ErrorCode::InvalidProvider);
        };

        debug!(provider = %provider, action = action.as_str(), "dispatching request");

        match action {
            SmsAction::SendSms => {
                send_with_metrics(backend.as_ref(), self.metrics.as_ref(), parameters).await
            }
            SmsAction::GetInfo => match backend.get_info(parameters).await {
                Ok(info) => SmsReply::ok_with_data(info),
                Err(err) => reply_error(&err),
            },
            SmsAction::Ping => SmsReply::ok(),
            SmsAction::Unknown(other) => {
                warn!(action = %other, "request with unknown action");
                SmsReply::error(ErrorCode::InvalidAction)
            }
        }
    }
}
