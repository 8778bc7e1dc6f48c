//! Usage dashboard API methods for [`GatewayClient`].

use gateway_config::UsagePeriod;

use crate::client::{GatewayClient, TimeoutPolicy};
use crate::endpoints;
use crate::error::Result;
use crate::models::{CostEstimate, UsageOverview};

impl GatewayClient {
    /// Fetch the usage overview. `no_cache` asks the server to recompute.
    pub async fn usage_overview(
        &self,
        period: UsagePeriod,
        no_cache: bool,
        policy: TimeoutPolicy,
    ) -> Result<UsageOverview> {
        endpoints::get_usage_overview(
            &self.http,
            &self.base_url,
            self.token(),
            period,
            no_cache,
            self.timeout_for(policy),
            self.metrics(),
        )
        .await
    }

    /// Estimate the cost of a usage overview.
    pub async fn usage_cost_estimate(&self, period: UsagePeriod) -> Result<CostEstimate> {
        endpoints::estimate_usage_cost(
            &self.http,
            &self.base_url,
            self.token(),
            period,
            self.timeout,
            self.metrics(),
        )
        .await
    }
}
