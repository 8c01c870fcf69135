//! SMS provider backends
//!
//! One module per provider kind plus the registry factory:
//!
//! - **ovh_client / ovh**: signed-request client and the two-step
//!   send protocol
//! - **sinch**: token-authenticated batches API
//! - **mock_sms**: log-only provider for development and tests

pub mod mock_sms;
pub mod ovh;
pub mod ovh_client;
pub mod sinch;

// Re-export commonly used types
pub use mock_sms::MockSmsProvider;
pub use ovh::OvhSmsProvider;
pub use ovh_client::OvhClient;
pub use sinch::SinchSmsProvider;

use std::sync::Arc;
use tracing::info;

use crate::errors::InfrastructureError;
use sg_core::{ProviderRegistry, SmsProvider};
use sg_shared::{GatewayConfig, ProviderConfig};

/// Instantiate every configured provider block into a registry
///
/// Called once at startup. Each block's `kind` selects the backend
/// constructor; the registry and all providers are read-only for the
/// rest of the process lifetime.
pub fn build_registry(config: &GatewayConfig) -> Result<ProviderRegistry, InfrastructureError> {
    let mut registry = ProviderRegistry::new();
    for (name, block) in &config.providers {
        let provider: Arc<dyn SmsProvider> = match block {
            ProviderConfig::Ovh(ovh) => Arc::new(OvhSmsProvider::new(ovh.clone())?),
            ProviderConfig::Sinch(sinch) => Arc::new(SinchSmsProvider::new(sinch.clone())?),
            ProviderConfig::Mock => Arc::new(MockSmsProvider::new()),
        };
        info!(provider = %name, "provider registered");
        registry.register(name.clone(), provider);
    }
    Ok(registry)
}
