//! Redemption code models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a redemption code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionStatus {
    #[default]
    Unused,
    Used,
    Expired,
    Disabled,
    /// Unknown or unrecognized status.
    #[serde(other)]
    Unknown,
}

impl RedemptionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unused => "unused",
            Self::Used => "used",
            Self::Expired => "expired",
            Self::Disabled => "disabled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RedemptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A redemption code row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionCode {
    pub id: i64,
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub quota: i64,
    #[serde(default)]
    pub status: RedemptionStatus,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub redeemed_by: Option<String>,
}

/// Query parameters of the redemption list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RedemptionListParams {
    pub page: u64,
    pub page_size: u64,
    pub name: Option<String>,
    pub status: Option<RedemptionStatus>,
}

impl RedemptionListParams {
    pub fn first_page(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size,
            name: None,
            status: None,
        }
    }
}

/// Body of the generate call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCodesRequest {
    pub name: String,
    pub count: u32,
    pub quota: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// Body of the purge-by-status call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeCodesRequest {
    pub status: RedemptionStatus,
    pub dry_run: bool,
}
