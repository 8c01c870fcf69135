//! Metrics recording options

use serde::{Deserialize, Serialize};

/// Options for the active metrics recorder
///
/// The presence of this block in the gateway configuration is what
/// enables metrics recording; when it is absent a no-op recorder is
/// used instead.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetricsOptions {
    /// Ordered latency bucket boundaries in milliseconds for the
    /// send-time histogram. When empty, the recorder falls back to a
    /// default histogram bounded at the maximum expected send time.
    #[serde(default)]
    pub sla: Vec<u64>,
}
