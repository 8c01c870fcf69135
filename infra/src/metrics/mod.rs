//! Metrics recording backends
//!
//! The active recorder publishes to Prometheus; selection between it
//! and the no-op recorder happens once at startup based on whether the
//! configuration carries a metrics block.

pub mod prometheus;

pub use self::prometheus::PrometheusSmsMetricsRecorder;

use std::sync::Arc;

use crate::errors::InfrastructureError;
use sg_core::{NoopSmsMetricsRecorder, SmsMetricsRecorder};
use sg_shared::MetricsOptions;

/// Build the recorder the gateway will use for its whole lifetime
///
/// A configured metrics block selects the Prometheus recorder; absence
/// selects the no-op recorder that collects nothing.
pub fn create_metrics_recorder(
    options: Option<&MetricsOptions>,
    registry: &::prometheus::Registry,
) -> Result<Arc<dyn SmsMetricsRecorder>, InfrastructureError> {
    match options {
        Some(options) => Ok(Arc::new(PrometheusSmsMetricsRecorder::new(
            registry, options,
        )?)),
        None => Ok(Arc::new(NoopSmsMetricsRecorder)),
    }
}
