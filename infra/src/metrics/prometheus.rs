//! Prometheus metrics recorder

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};

use crate::errors::InfrastructureError;
use sg_core::SmsMetricsRecorder;
use sg_shared::MetricsOptions;

/// Upper bound of the default latency histogram, in milliseconds
const DEFAULT_MAX_EXPECTED_MS: f64 = 2_000.0;

/// Recorder publishing send latencies and failure counts
///
/// Successful sends feed a latency histogram whose buckets come from
/// the configured `sla` boundaries; failures feed a counter.
pub struct PrometheusSmsMetricsRecorder {
    sending_times: Histogram,
    failures: IntCounter,
}

impl PrometheusSmsMetricsRecorder {
    /// Build the recorder and register its collectors
    pub fn new(registry: &Registry, options: &MetricsOptions) -> Result<Self, InfrastructureError> {
        let sending_times = Histogram::with_opts(
            HistogramOpts::new("sms_sending_time_milliseconds", "Time to send SMS")
                .buckets(buckets_from(options)),
        )
        .map_err(|e| InfrastructureError::Metrics(e.to_string()))?;
        let failures = IntCounter::new("sms_sending_failures_total", "Number of failed SMS sends")
            .map_err(|e| InfrastructureError::Metrics(e.to_string()))?;

        registry
            .register(Box::new(sending_times.clone()))
            .map_err(|e| InfrastructureError::Metrics(e.to_string()))?;
        registry
            .register(Box::new(failures.clone()))
            .map_err(|e| InfrastructureError::Metrics(e.to_string()))?;

        Ok(Self {
            sending_times,
            failures,
        })
    }
}

impl SmsMetricsRecorder for PrometheusSmsMetricsRecorder {
    fn on_sms_sent(&self, duration_ms: u64) {
        self.sending_times.observe(duration_ms as f64);
    }

    fn on_sms_failure(&self, _duration_ms: u64) {
        self.failures.inc();
    }
}

/// Histogram buckets: the sorted configured sla boundaries, or a
/// default progression bounded at the maximum expected send time
fn buckets_from(options: &MetricsOptions) -> Vec<f64> {
    if options.sla.is_empty() {
        let mut buckets = Vec::new();
        let mut bound = 50.0;
        while bound < DEFAULT_MAX_EXPECTED_MS {
            buckets.push(bound);
            bound *= 2.0;
        }
        buckets.push(DEFAULT_MAX_EXPECTED_MS);
        buckets
    } else {
        let mut buckets: Vec<f64> = options.sla.iter().map(|&ms| ms as f64).collect();
        buckets.sort_by(f64::total_cmp);
        buckets.dedup();
        buckets
    }
}
