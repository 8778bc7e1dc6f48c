//! User models for the gateway user management API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account status of a gateway user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Disabled,
    Banned,
    /// Unknown or unrecognized status.
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Banned => "banned",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-computed activity bucket of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    VeryActive,
    Active,
    Inactive,
    #[default]
    Never,
}

impl ActivityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryActive => "very_active",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Never => "never",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::VeryActive => "Very active",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Never => "Never used",
        }
    }
}

/// A gateway user row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub quota: i64,
    #[serde(default)]
    pub used_quota: i64,
    #[serde(default)]
    pub request_count: u64,
    #[serde(default)]
    pub activity: ActivityLevel,
    #[serde(default)]
    pub last_active_at: Option<i64>,
}

/// Activity-bucket aggregate shown next to the user list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserActivityStats {
    pub total: u64,
    pub very_active: u64,
    pub active: u64,
    pub inactive: u64,
    pub never: u64,
}

impl UserActivityStats {
    /// Count of users in one bucket.
    pub fn bucket(&self, level: ActivityLevel) -> u64 {
        match level {
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::Active => self.active,
            ActivityLevel::Inactive => self.inactive,
            ActivityLevel::Never => self.never,
        }
    }

    /// Remove up to `count` users of the given bucket from the aggregate.
    ///
    /// `total` drops by what the bucket actually lost, so the buckets keep
    /// summing to it when the aggregate is older than the deletion.
    pub fn discount(&mut self, level: ActivityLevel, count: u64) {
        let bucket = match level {
            ActivityLevel::VeryActive => &mut self.very_active,
            ActivityLevel::Active => &mut self.active,
            ActivityLevel::Inactive => &mut self.inactive,
            ActivityLevel::Never => &mut self.never,
        };
        let dropped = count.min(*bucket);
        *bucket -= dropped;
        self.total = self.total.saturating_sub(dropped);
    }
}

/// Query parameters of the user list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserListParams {
    pub page: u64,
    pub page_size: u64,
    pub name: Option<String>,
    pub status: Option<UserStatus>,
}

impl UserListParams {
    pub fn first_page(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size,
            name: None,
            status: None,
        }
    }
}

/// Body of a ban call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRequest {
    pub reason: String,
    pub disable_tokens: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Body of an unban call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbanRequest {
    pub reason: String,
    pub enable_tokens: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Whether a delete can be undone server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeleteMode {
    #[default]
    Soft,
    Hard,
}

impl DeleteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Hard => "hard",
        }
    }
}

/// Body of the batch delete-by-activity call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDeleteUsersRequest {
    pub activity: ActivityLevel,
    pub mode: DeleteMode,
    pub dry_run: bool,
}

/// Result of a batch delete, both for the dry run and the commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchDeleteResult {
    pub affected: u64,
    /// Display names of a sample of affected records.
    pub sample: Vec<String>,
    /// Ids actually deleted (empty for a dry run).
    pub deleted_ids: Vec<i64>,
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_record() {
        let json = r#"{
            "id": 42,
            "username": "alice",
            "status": "banned",
            "quota": 500000,
            "used_quota": 1200,
            "request_count": 87,
            "activity": "very_active"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.status, UserStatus::Banned);
        assert_eq!(user.activity, ActivityLevel::VeryActive);
        assert!(user.display_name.is_none());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let user: UserRecord =
            serde_json::from_str(r#"{"id":1,"username":"bob","status":"frozen"}"#).unwrap();
        assert_eq!(user.status, UserStatus::Unknown);
    }

    #[test]
    fn test_stats_discount_saturates() {
        let mut stats = UserActivityStats {
            total: 10,
            very_active: 1,
            active: 2,
            inactive: 3,
            never: 4,
        };
        stats.discount(ActivityLevel::Inactive, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.total, 8);

        stats.discount(ActivityLevel::VeryActive, 5);
        assert_eq!(stats.very_active, 0);
        assert_eq!(stats.total, 7);
        assert_eq!(
            stats.very_active + stats.active + stats.inactive + stats.never,
            stats.total
        );
    }

    #[test]
    fn test_ban_request_skips_empty_context() {
        let body = serde_json::to_value(BanRequest {
            reason: "spam".to_string(),
            disable_tokens: true,
            context: None,
        })
        .unwrap();
        assert_eq!(body["reason"], "spam");
        assert!(body.get("context").is_none());
    }
}
