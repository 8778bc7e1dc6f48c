//! Popup type definitions for different dialog variants.

use gateway_client::{
    ActivityLevel, BatchDeleteResult, CostEstimate, DeleteMode, RedemptionStatus,
};
use gateway_config::UsagePeriod;
use gateway_config::constants::HARD_DELETE_PHRASE;

use crate::app::{BanReason, FilterTarget};
use crate::ui::popup::GenerateForm;

/// The type/kind of popup dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupType {
    /// Help dialog with keyboard shortcuts
    Help,
    /// Blocking notice after the API rejected the admin token
    SessionExpired,
    /// Manual dashboard refresh whose estimate exceeds the cost guard
    CostGuard {
        period: UsagePeriod,
        estimate: CostEstimate,
    },
    /// Ban (`ban == true`) or unban sub-dialog with reason selection
    BanUser {
        user_id: i64,
        username: String,
        ban: bool,
        reason: BanReason,
        toggle_tokens: bool,
    },
    /// Single user delete; hard mode requires the typed phrase
    ConfirmDeleteUser {
        user_id: i64,
        username: String,
        mode: DeleteMode,
        typed: String,
    },
    /// Choose activity level and mode before the batch dry run
    SelectUserBatch {
        activity: ActivityLevel,
        mode: DeleteMode,
    },
    /// Dry-run preview of a batch user delete
    ConfirmUserBatch {
        activity: ActivityLevel,
        mode: DeleteMode,
        preview: BatchDeleteResult,
        typed: String,
    },
    ConfirmDeleteRedemption {
        code_id: i64,
        name: String,
    },
    /// Choose the status whose codes are purged
    SelectPurgeStatus {
        status: RedemptionStatus,
    },
    /// Dry-run preview of a purge
    ConfirmPurge {
        status: RedemptionStatus,
        preview: BatchDeleteResult,
    },
    GenerateForm(GenerateForm),
    /// Keys returned by a successful generate call
    GeneratedKeys(Vec<String>),
    FilterInput {
        target: FilterTarget,
        input: String,
    },
    /// Checklist of available models for the monitor
    ModelPicker {
        selected: usize,
    },
}

impl PopupType {
    /// Whether the popup's confirm key is accepted in its current state.
    ///
    /// Hard deletes stay locked until the exact phrase has been typed.
    pub fn confirm_enabled(&self) -> bool {
        match self {
            Self::ConfirmDeleteUser { mode, typed, .. }
            | Self::ConfirmUserBatch { mode, typed, .. } => {
                *mode == DeleteMode::Soft || typed == HARD_DELETE_PHRASE
            }
            _ => true,
        }
    }

    /// Whether the popup renders with the destructive color.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Self::ConfirmDeleteUser { .. }
                | Self::ConfirmUserBatch { .. }
                | Self::ConfirmDeleteRedemption { .. }
                | Self::ConfirmPurge { .. }
                | Self::SessionExpired
        ) || matches!(self, Self::BanUser { ban: true, .. })
    }
}

pub(crate) const ACTIVITY_LEVELS: [ActivityLevel; 4] = [
    ActivityLevel::VeryActive,
    ActivityLevel::Active,
    ActivityLevel::Inactive,
    ActivityLevel::Never,
];

pub(crate) const PURGEABLE_STATUSES: [RedemptionStatus; 3] = [
    RedemptionStatus::Used,
    RedemptionStatus::Expired,
    RedemptionStatus::Disabled,
];

pub(crate) fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next]
}
