//! User management API methods for [`GatewayClient`].
//!
//! # What this module handles:
//! - Listing users and the activity aggregate
//! - Ban, unban, single and batch delete
//!
//! # What this module does NOT handle:
//! - Patching local state after a mutation (the caller owns its view state)

use crate::client::GatewayClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    BanRequest, BatchDeleteResult, BatchDeleteUsersRequest, DeleteMode, ListPage, UnbanRequest,
    UserActivityStats, UserListParams, UserRecord,
};

impl GatewayClient {
    /// List one page of users.
    pub async fn list_users(&self, params: &UserListParams) -> Result<ListPage<UserRecord>> {
        endpoints::list_users(
            &self.http,
            &self.base_url,
            self.token(),
            params,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Fetch the activity-bucket aggregate.
    pub async fn user_activity_stats(&self) -> Result<UserActivityStats> {
        endpoints::get_user_stats(
            &self.http,
            &self.base_url,
            self.token(),
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Ban a user.
    pub async fn ban_user(&self, user_id: i64, request: &BanRequest) -> Result<()> {
        endpoints::ban_user(
            &self.http,
            &self.base_url,
            self.token(),
            user_id,
            request,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Lift a ban.
    pub async fn unban_user(&self, user_id: i64, request: &UnbanRequest) -> Result<()> {
        endpoints::unban_user(
            &self.http,
            &self.base_url,
            self.token(),
            user_id,
            request,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Delete a user.
    pub async fn delete_user(&self, user_id: i64, mode: DeleteMode) -> Result<()> {
        endpoints::delete_user(
            &self.http,
            &self.base_url,
            self.token(),
            user_id,
            mode,
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Delete (or preview deleting) every user of an activity bucket.
    pub async fn batch_delete_users(
        &self,
        request: &BatchDeleteUsersRequest,
    ) -> Result<BatchDeleteResult> {
        endpoints::batch_delete_users(
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
