//! Risk leaderboard and per-user analysis models.

use gateway_config::{LeaderboardMetric, TimeWindow};
use serde::{Deserialize, Serialize};

use super::users::UserStatus;

/// One ranked row of the risk leaderboard. Rank is the array position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub username: String,
    /// Value of the ranking metric.
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub request_count: u64,
    #[serde(default)]
    pub failure_rate: Option<f64>,
    #[serde(default)]
    pub status: UserStatus,
}

/// A generated leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub window: String,
    pub metric: String,
    /// Unix seconds at which the server computed the ranking.
    pub generated_at: i64,
    #[serde(default)]
    pub entries: Vec<LeaderboardEntry>,
}

/// Query parameters of the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeaderboardParams {
    pub window: TimeWindow,
    pub metric: LeaderboardMetric,
    pub limit: u32,
}

/// Headline counters of a user analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSummary {
    pub total_requests: u64,
    pub failed_requests: u64,
    pub quota_used: i64,
    pub distinct_ips: u64,
    pub distinct_models: u64,
    pub distinct_tokens: u64,
    pub risk_score: f64,
}

impl AnalysisSummary {
    pub fn failure_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.failed_requests as f64 / self.total_requests as f64
        }
    }
}

/// A top-N breakdown row (model, IP, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub share: Option<f64>,
}

/// A sampled request log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLogSample {
    pub timestamp: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub quota: i64,
}

/// Per-user risk analysis shown in the inspection dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub user_id: i64,
    pub username: String,
    pub window: String,
    #[serde(default)]
    pub end_time: Option<i64>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub whitelisted: bool,
    #[serde(default)]
    pub summary: AnalysisSummary,
    #[serde(default)]
    pub top_models: Vec<BreakdownEntry>,
    #[serde(default)]
    pub top_ips: Vec<BreakdownEntry>,
    #[serde(default)]
    pub recent_logs: Vec<RequestLogSample>,
}

/// Query parameters of a user analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisParams {
    pub user_id: i64,
    pub window: TimeWindow,
    /// Upper cutoff in unix seconds, aligning the analysis with a leaderboard snapshot.
    pub end_time: Option<i64>,
}

/// Body of the whitelist add call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistRequest {
    pub user_id: i64,
}
