//! Prometheus exposition of the console's metrics.
//!
//! `--metrics-bind` installs a global recorder that serves everything recorded
//! through [`crate::metrics::MetricsCollector`] at `/metrics`. Without it the
//! collector records into the no-op recorder.

use std::net::{SocketAddr, ToSocketAddrs};

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::{METRIC_REQUEST_DURATION, METRIC_TUI_FRAME_RENDER_DURATION};

/// Request latency buckets, reaching the extended timeout of confirmed aggregates.
const REQUEST_BUCKETS: &[f64] = &[0.025, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0];

/// Frame render buckets; a frame should stay well under the 250ms UI tick.
const FRAME_BUCKETS: &[f64] = &[0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25];

/// Handle of an installed exporter.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Resolve `bind` (`host:port`, host names allowed) and install the exporter.
    ///
    /// # Errors
    /// Fails when the address does not resolve, or when a recorder is already
    /// installed in this process.
    pub fn install(bind: &str) -> Result<Self, MetricsExporterError> {
        let bind_addr = resolve(bind)?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                REQUEST_BUCKETS,
            )?
            .set_buckets_for_metric(
                Matcher::Full(METRIC_TUI_FRAME_RENDER_DURATION.to_string()),
                FRAME_BUCKETS,
            )?
            .with_http_listener(bind_addr)
            .install()
            .map_err(|e| MetricsExporterError::Install(e.to_string()))?;

        info!(%bind_addr, "Prometheus exporter listening");
        Ok(Self { bind_addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn resolve(bind: &str) -> Result<SocketAddr, MetricsExporterError> {
    let invalid = |reason: String| MetricsExporterError::InvalidBindAddress {
        bind: bind.to_string(),
        reason,
    };
    bind.to_socket_addrs()
        .map_err(|e| invalid(e.to_string()))?
        .next()
        .ok_or_else(|| invalid("no address resolved".to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid metrics bind address '{bind}': {reason}")]
    InvalidBindAddress { bind: String, reason: String },

    #[error("Failed to install Prometheus exporter: {0}")]
    Install(String),
}

impl From<metrics_exporter_prometheus::BuildError> for MetricsExporterError {
    fn from(err: metrics_exporter_prometheus::BuildError) -> Self {
        Self::Install(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_port_is_rejected() {
        let result = MetricsExporter::install("not-a-valid-addr");
        assert!(matches!(
            result,
            Err(MetricsExporterError::InvalidBindAddress { .. })
        ));
    }

    #[test]
    fn test_host_names_resolve() {
        let addr = resolve("localhost:9464").unwrap();
        assert_eq!(addr.port(), 9464);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_buckets_are_sorted() {
        assert!(REQUEST_BUCKETS.windows(2).all(|w| w[0] < w[1]));
        assert!(FRAME_BUCKETS.windows(2).all(|w| w[0] < w[1]));
    }
}
