//! Model health monitor models.

use gateway_config::TimeWindow;
use serde::{Deserialize, Serialize};

/// Coarse health classification of an upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelHealth {
    Healthy,
    Degraded,
    Down,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One time bucket of a model's status history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusSlot {
    pub start: i64,
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default)]
    pub requests: u64,
}

/// Health of one monitored model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub model: String,
    #[serde(default)]
    pub health: ModelHealth,
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default)]
    pub avg_latency_ms: f64,
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub slots: Vec<StatusSlot>,
}

/// Monitor selection stored on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub selected_models: Vec<String>,
    #[serde(default)]
    pub refresh_interval_secs: u64,
    #[serde(default)]
    pub window: String,
}

/// Query parameters of the model status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelStatusParams {
    pub models: Vec<String>,
    pub window: TimeWindow,
}
