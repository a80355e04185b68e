use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;

pub const ACTIONS_SUCCEEDED_COUNTER: &str = "actions_succeeded";
pub const ACTIONS_FAILED_COUNTER: &str = "actions_failed";
pub const ACTIONS_TOTAL: &str = "actions_total";

/// Action tallies, kept in a process-wide Prometheus recorder.
///
/// Only the first instance gets to install the recorder; later ones record nothing.
#[derive(Clone, Default)]
pub struct Metrics {
    handle: Option<PrometheusHandle>,
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("is_installed", &self.handle.is_some())
            .finish()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| {
                tracing::warn!("Failed to install prometheus recorder: {}", e);
            })
            .ok();

        if handle.is_some() {
            metrics::describe_counter!(
                ACTIONS_SUCCEEDED_COUNTER,
                "The number of action results that succeeded"
            );

            metrics::describe_counter!(
                ACTIONS_FAILED_COUNTER,
                "The number of action results that failed"
            );

            metrics::describe_counter!(ACTIONS_TOTAL, "The total number of action results");
        }

        Self { handle }
    }

    pub fn is_installed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn add_succeeded(&self, value: u64) {
        if self.is_installed() {
            metrics::counter!(ACTIONS_SUCCEEDED_COUNTER, value);
            metrics::counter!(ACTIONS_TOTAL, value);
        }
    }

    pub fn add_failed(&self, value: u64) {
        if self.is_installed() {
            metrics::counter!(ACTIONS_FAILED_COUNTER, value);
            metrics::counter!(ACTIONS_TOTAL, value);
        }
    }

    /// Current values in the Prometheus text format.
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}
