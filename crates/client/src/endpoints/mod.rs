//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, the normalized base URL
//! and the bearer token explicitly, so endpoints can be exercised against a
//! mock server without constructing a [`crate::GatewayClient`].

mod dashboard;
mod monitor;
mod redemptions;
pub mod request;
mod risk;
mod users;

pub use dashboard::{estimate_usage_cost, get_usage_overview};
pub use monitor::{
    get_model_statuses, get_monitor_config, list_available_models, save_monitor_config,
};
pub use redemptions::{
    delete_redemption, generate_redemptions, list_redemptions, purge_redemptions,
};
pub use request::{CallSite, request_ack, request_data};
pub use risk::{add_to_whitelist, get_leaderboard, get_user_analysis, remove_from_whitelist};
pub use users::{
    ban_user, batch_delete_users, delete_user, get_user_stats, list_users, unban_user,
};
