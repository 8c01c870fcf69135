//! Metrics recorder contract
//!
//! The gateway records one sample per send attempt: the elapsed time of
//! the provider interaction and whether it succeeded. Which recorder
//! backs the trait is a one-time decision at startup; the
//! infrastructure crate provides the active implementation and this
//! module the disabled one.

/// Records send latency and failure counts
pub trait SmsMetricsRecorder: Send + Sync {
    /// A send interaction completed successfully after `duration_ms`
    /// milliseconds.
    fn on_sms_sent(&self, duration_ms: u64);

    /// A send interaction failed after `duration_ms` milliseconds.
    fn on_sms_failure(&self, duration_ms: u64);
}

/// Recorder used when metrics are disabled; collects nothing
#[derive(Debug, Default)]
pub struct NoopSmsMetricsRecorder;

impl SmsMetricsRecorder for NoopSmsMetricsRecorder {
    fn on_sms_sent(&self, _duration_ms: u64) {}

    fn on_sms_failure(&self, _duration_ms: u64) {}
}
