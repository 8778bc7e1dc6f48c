//! Gateway admin API client.
//!
//! This crate provides a type-safe async client for the admin API of an LLM
//! gateway: usage analytics, risk leaderboards, user and redemption-code
//! management, and model health monitoring. Every response envelope is
//! decoded at this boundary into `Result<T, ClientError>`.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;

pub use client::builder::GatewayClientBuilder;
pub use client::{GatewayClient, TimeoutPolicy};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector, SyncOutcome};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    ActivityLevel, AnalysisParams, AnalysisSnapshot, BanRequest, BatchDeleteResult,
    BatchDeleteUsersRequest, CostEstimate, DeleteMode, GenerateCodesRequest, LeaderboardEntry,
    LeaderboardParams, LeaderboardSnapshot, ListPage, ModelHealth, ModelStatus, ModelStatusParams,
    MonitorConfig, PurgeCodesRequest, RedemptionCode, RedemptionListParams, RedemptionStatus,
    UnbanRequest, UsageOverview, UserActivityStats, UserListParams, UserRecord, UserStatus,
};
