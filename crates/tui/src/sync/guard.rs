//! Large-dataset confirmation rule for expensive aggregate refreshes.

use gateway_client::CostEstimate;
use gateway_config::constants::{DEFAULT_COST_GUARD_ROWS, DEFAULT_COST_GUARD_SECONDS};

/// Thresholds above which a manual refresh must be confirmed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostGuard {
    pub max_rows: u64,
    pub max_seconds: f64,
}

impl Default for CostGuard {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_COST_GUARD_ROWS,
            max_seconds: DEFAULT_COST_GUARD_SECONDS,
        }
    }
}

impl CostGuard {
    /// Guard with a custom row threshold. Zero falls back to the default.
    pub fn with_rows(max_rows: u64) -> Self {
        Self {
            max_rows: if max_rows == 0 {
                DEFAULT_COST_GUARD_ROWS
            } else {
                max_rows
            },
            ..Self::default()
        }
    }

    pub fn requires_confirmation(&self, estimate: &CostEstimate) -> bool {
        estimate.estimated_rows > self.max_rows || estimate.estimated_seconds > self.max_seconds
    }
}
