//! Model health monitor API methods for [`GatewayClient`].

use crate::client::GatewayClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ModelStatus, ModelStatusParams, MonitorConfig};

impl GatewayClient {
    /// List every routable model.
    pub async fn available_models(&self) -> Result<Vec<String>> {
        endpoints::list_available_models(
            &self.http,
            &self.base_url,
            self.token(),
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Fetch health of the given models.
    pub async fn model_statuses(
        &self,
        params: &ModelStatusParams,
        no_cache: bool,
    ) -> Result<Vec<ModelStatus>> {
        endpoints::get_model_statuses(
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

    /// Read the backend monitor selection.
    pub async fn monitor_config(&self) -> Result<MonitorConfig> {
        endpoints::get_monitor_config(
            &self.http,
            &self.base_url,
            self.token(),
            self.timeout,
            self.metrics(),
        )
        .await
    }

    /// Replace the backend monitor selection.
    pub async fn save_monitor_config(&self, config: &MonitorConfig) -> Result<()> {
        endpoints::save_monitor_config(
            &self.http,
            &self.base_url,
            self.token(),
            config,
            self.timeout,
            self.metrics(),
        )
        .await
    }
}
