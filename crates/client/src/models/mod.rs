//! Data models for gateway admin API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod dashboard;
pub mod monitor;
pub mod redemptions;
pub mod risk;
pub mod users;

pub use common::{ApiErrorBody, Envelope, ListPage};
pub use dashboard::{CostEstimate, ModelUsage, UsageOverview};
pub use monitor::{ModelHealth, ModelStatus, ModelStatusParams, MonitorConfig, StatusSlot};
pub use redemptions::{
    GenerateCodesRequest, PurgeCodesRequest, RedemptionCode, RedemptionListParams,
    RedemptionStatus,
};
pub use risk::{
    AnalysisParams, AnalysisSnapshot, AnalysisSummary, BreakdownEntry, LeaderboardEntry,
    LeaderboardParams, LeaderboardSnapshot, RequestLogSample, WhitelistRequest,
};
pub use users::{
    ActivityLevel, BanRequest, BatchDeleteResult, BatchDeleteUsersRequest, DeleteMode,
    UnbanRequest, UserActivityStats, UserListParams, UserRecord, UserStatus,
};
