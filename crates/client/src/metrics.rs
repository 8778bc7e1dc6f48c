//! Metrics collection for admin API calls and console synchronization.
//!
//! This module provides metrics collection for:
//! - Request latency histograms and request/error counters
//! - Error categorization
//! - Synchronization outcomes (applied, superseded and failed fetches)
//! - Console frame render time and action queue depth
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - All request metrics use the label names `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "gateway_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "gateway_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "gateway_api_errors_total";

/// Metric name for fetch outcomes of synchronized resources.
pub const METRIC_SYNC_OUTCOMES: &str = "gateway_console_sync_outcomes_total";

/// Metric name for console frame render duration histogram.
pub const METRIC_TUI_FRAME_RENDER_DURATION: &str = "gateway_console_frame_render_duration_seconds";

/// Metric name for console action queue depth gauge.
pub const METRIC_TUI_ACTION_QUEUE_DEPTH: &str = "gateway_console_action_queue_depth";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 401, the token was rejected
    Auth,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// `success: false` envelopes on a 2xx status
    Api,
    /// Request timeout
    Timeout,
    /// Response body could not be decoded
    Decode,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Api => "api",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::ConnectionRefused(_) => ErrorCategory::Transport,
            ClientError::Unauthorized(_) => ErrorCategory::Auth,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::Api { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Api
                }
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_request() => {
                ErrorCategory::Transport
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// How a synchronized fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied,
    Superseded,
    Failed,
}

impl SyncOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SyncOutcome::Applied => "applied",
            SyncOutcome::Superseded => "superseded",
            SyncOutcome::Failed => "failed",
        }
    }
}

/// Metrics collector for admin API calls.
///
/// A lightweight wrapper around the `metrics` crate macros providing
/// type-safe methods with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    /// Whether metrics collection is enabled.
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` if the request failed before receiving a response.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error from a ClientError, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    /// Record how a fetch of a synchronized resource ended.
    pub fn record_sync_outcome(&self, resource: &'static str, outcome: SyncOutcome) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_SYNC_OUTCOMES,
            "resource" => resource,
            "outcome" => outcome.as_str(),
        )
        .increment(1);
    }

    /// Record console frame render duration.
    pub fn record_tui_frame_render_duration(&self, duration: Duration) {
        if !self.enabled {
            return;
        }
        metrics::histogram!(METRIC_TUI_FRAME_RENDER_DURATION).record(duration.as_secs_f64());
    }

    /// Record console action queue depth.
    pub fn record_tui_action_queue_depth(&self, depth: usize) {
        if !self.enabled {
            return;
        }
        metrics::gauge!(METRIC_TUI_ACTION_QUEUE_DEPTH).set(depth as f64);
    }
}
