//! Redemption code API methods for [`GatewayClient`].

use crate::client::GatewayClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    BatchDeleteResult, GenerateCodesRequest, ListPage, PurgeCodesRequest, RedemptionCode,
    RedemptionListParams,
};

impl GatewayClient {
    /// List one page of redemption codes.
    pub async fn list_redemptions(
        &self,
        params: &RedemptionListParams,
    ) -> Result<ListPage<RedemptionCode>> {
        endpoints::list_redemptions(
            &self.http,
            &self.base_url,
            self.token(),
            params,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Generate codes, returning their keys.
    pub async fn generate_redemptions(&self, request: &GenerateCodesRequest) -> Result<Vec<String>> {
        endpoints::generate_redemptions(
            &self.http,
            &self.base_url,
            self.token(),
            request,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Delete one code.
    pub async fn delete_redemption(&self, code_id: i64) -> Result<()> {
        endpoints::delete_redemption(
            &self.http,
            &self.base_url,
            self.token(),
            code_id,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Delete (or preview deleting) every code with a status.
    pub async fn purge_redemptions(&self, request: &PurgeCodesRequest) -> Result<BatchDeleteResult> {
        endpoints::purge_redemptions(
            &self.http,
            &self.base_url,
            self.token(),
            request,
            self.timeout,
            self.metrics(),
        )
        .await
    }
}
