//! Usage dashboard models.

use serde::{Deserialize, Serialize};

/// Per-model usage row of the overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelUsage {
    pub model: String,
    #[serde(default)]
    pub requests: u64,
    #[serde(default)]
    pub quota: i64,
}

/// Aggregated usage for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageOverview {
    pub period: String,
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub total_quota: i64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub error_rate: f64,
    #[serde(default)]
    pub top_models: Vec<ModelUsage>,
    #[serde(default)]
    pub generated_at: i64,
}

/// Server-side estimate of what an aggregate query will scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostEstimate {
    pub estimated_rows: u64,
    pub estimated_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_overview() {
        let json = r#"{
            "period": "7d",
            "total_requests": 12000,
            "error_rate": 0.012,
            "top_models": [{"model": "gpt-4o", "requests": 9000, "quota": 1500}]
        }"#;
        let overview: UsageOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.total_requests, 12000);
        assert_eq!(overview.top_models[0].model, "gpt-4o");
        assert_eq!(overview.active_users, 0);
    }
}
