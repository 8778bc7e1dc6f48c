//! Risk API methods for [`GatewayClient`].

use crate::client::GatewayClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AnalysisParams, AnalysisSnapshot, LeaderboardParams, LeaderboardSnapshot};

impl GatewayClient {
    /// Fetch the risk leaderboard.
    pub async fn risk_leaderboard(
        &self,
        params: &LeaderboardParams,
        no_cache: bool,
    ) -> Result<LeaderboardSnapshot> {
        endpoints::get_leaderboard(
            &self.http,
            &self.base_url,
            self.token(),
            params,
            no_cache,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Fetch the risk analysis of one user.
    pub async fn user_analysis(&self, params: &AnalysisParams) -> Result<AnalysisSnapshot> {
        endpoints::get_user_analysis(
            &self.http,
            &self.base_url,
            self.token(),
            params,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Add or remove a user's whitelist entry.
    pub async fn set_whitelisted(&self, user_id: i64, whitelisted: bool) -> Result<()> {
        if whitelisted {
            endpoints::add_to_whitelist(
                &self.http,
                &self.base_url,
                self.token(),
                user_id,
                self.timeout,
                self.metrics(),
            )
            .await
        } else {
            endpoints::remove_from_whitelist(
                &self.http,
                &self.base_url,
                self.token(),
                user_id,
                self.timeout,
                self.metrics(),
            )
            .await
        }
    }
}
