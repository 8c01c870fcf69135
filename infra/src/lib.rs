//! # Infrastructure Layer
//!
//! Concrete backends for the SMS gateway:
//! - **sms**: the provider implementations (OVH signed client, Sinch
//!   token client, mock) and the registry factory
//! - **metrics**: the Prometheus metrics recorder and its selection
//!   logic
//!
//! The embedding process loads a [`GatewayConfig`], calls
//! [`create_gateway`], and feeds bus requests to the returned
//! dispatcher.

pub mod errors;
pub mod metrics;
pub mod sms;

pub use errors::InfrastructureError;

use sg_core::Dispatcher;
use sg_shared::GatewayConfig;

/// Build a ready-to-serve dispatcher from configuration
///
/// Constructs the metrics recorder (active when a metrics block is
/// configured, no-op otherwise), instantiates every configured provider
/// block, and wires both into a dispatcher. Called once at startup; the
/// result lives for the process lifetime.
pub fn create_gateway(
    config: &GatewayConfig,
    prometheus_registry: &prometheus::Registry,
) -> Result<Dispatcher, InfrastructureError> {
    let recorder = metrics::create_metrics_recorder(config.metrics.as_ref(), prometheus_registry)?;
    let registry = sms::build_registry(config)?;
    Ok(Dispatcher::new(registry, recorder))
}
