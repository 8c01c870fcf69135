//! Configuration module for the gateway
//!
//! This module organizes configuration into logical areas:
//! - `providers` - Per-provider credentials and endpoints
//! - `metrics` - Optional metrics recording options
//!
//! Loading and merging configuration files is the embedding process's
//! job; this crate only defines the deserialized shape.

pub mod metrics;
pub mod providers;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Re-export commonly used types
pub use metrics::MetricsOptions;
pub use providers::{OvhConfig, OvhEndpoint, ProviderConfig, SinchConfig};

/// Complete gateway configuration consumed once at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Address under which the gateway listens on the message bus
    #[serde(default = "default_address")]
    pub address: String,

    /// Provider blocks keyed by provider name
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    /// Metrics options; presence enables the active metrics recorder
    #[serde(default)]
    pub metrics: Option<MetricsOptions>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            providers: HashMap::new(),
            metrics: None,
        }
    }
}

fn default_address() -> String {
    String::from("sms.gateway")
}
