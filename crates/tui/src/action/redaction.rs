//! Security-focused redaction wrapper for Action logging.
//!
//! Always use `RedactedAction(&action)` instead of `?action` when logging.
//!
//! # Security Invariants
//!
//! - Generated redemption keys are never logged, only their count.
//! - Ban/unban reasons and context, usernames and notification text are
//!   replaced by size indicators.
//! - Error payloads are reduced to `<error>`.
//! - Variants without sensitive payloads fall through to their `Debug` output.

use std::fmt;

use crate::action::variants::Action;

/// Redacted wrapper for Action that prevents sensitive payloads from being logged.
pub struct RedactedAction<'a>(pub &'a Action);

fn outcome<T, E>(result: &Result<T, E>) -> &'static str {
    if result.is_ok() { "ok" } else { "<error>" }
}

impl fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Action::Input(_) => write!(f, "Input(<key>)"),
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.len())
            }
            Action::SavePreferences(_) => write!(f, "SavePreferences(<state>)"),

            Action::LoadDashboard { ticket, policy } => write!(
                f,
                "LoadDashboard(seq={}, period={}, {:?}, {:?})",
                ticket.seq, ticket.params, ticket.origin, policy
            ),
            Action::LoadLeaderboard(ticket) => {
                write!(f, "LoadLeaderboard(seq={}, {:?})", ticket.seq, ticket.origin)
            }
            Action::LoadAnalysis(ticket) => write!(
                f,
                "LoadAnalysis(seq={}, user_id={})",
                ticket.seq, ticket.params.user_id
            ),
            Action::LoadUsers(ticket) => write!(
                f,
                "LoadUsers(seq={}, page={})",
                ticket.seq, ticket.params.page
            ),
            Action::LoadUserStats(ticket) => write!(f, "LoadUserStats(seq={})", ticket.seq),
            Action::LoadRedemptions(ticket) => write!(
                f,
                "LoadRedemptions(seq={}, page={})",
                ticket.seq, ticket.params.page
            ),
            Action::LoadModelStatuses(ticket) => write!(
                f,
                "LoadModelStatuses(seq={}, <{} models>)",
                ticket.seq,
                ticket.params.models.len()
            ),

            Action::DashboardLoaded(done) => {
                write!(f, "DashboardLoaded(seq={}, {})", done.seq, outcome(&done.result))
            }
            Action::DashboardCostEstimated { seq, result, .. } => {
                write!(f, "DashboardCostEstimated(seq={}, {})", seq, outcome(result))
            }
            Action::LeaderboardLoaded(done) => match &done.result {
                Ok(snapshot) => write!(
                    f,
                    "LeaderboardLoaded(seq={}, <{} entries>)",
                    done.seq,
                    snapshot.entries.len()
                ),
                Err(_) => write!(f, "LeaderboardLoaded(seq={}, <error>)", done.seq),
            },
            Action::AnalysisLoaded(done) => {
                write!(f, "AnalysisLoaded(seq={}, {})", done.seq, outcome(&done.result))
            }
            Action::UsersLoaded(done) => match &done.result {
                Ok(page) => write!(
                    f,
                    "UsersLoaded(seq={}, <{} users>)",
                    done.seq,
                    page.items.len()
                ),
                Err(_) => write!(f, "UsersLoaded(seq={}, <error>)", done.seq),
            },
            Action::UserStatsLoaded(done) => {
                write!(f, "UserStatsLoaded(seq={}, {})", done.seq, outcome(&done.result))
            }
            Action::RedemptionsLoaded(done) => match &done.result {
                Ok(page) => write!(
                    f,
                    "RedemptionsLoaded(seq={}, <{} codes>)",
                    done.seq,
                    page.items.len()
                ),
                Err(_) => write!(f, "RedemptionsLoaded(seq={}, <error>)", done.seq),
            },
            Action::ModelStatusesLoaded(done) => {
                write!(
                    f,
                    "ModelStatusesLoaded(seq={}, {})",
                    done.seq,
                    outcome(&done.result)
                )
            }
            Action::AvailableModelsLoaded(result) => match result {
                Ok(models) => write!(f, "AvailableModelsLoaded(<{} models>)", models.len()),
                Err(_) => write!(f, "AvailableModelsLoaded(<error>)"),
            },
            Action::MonitorConfigLoaded(result) => {
                write!(f, "MonitorConfigLoaded({})", outcome(result))
            }

            Action::BanUser { user_id, request } => write!(
                f,
                "BanUser(user_id={}, reason=<{} chars>, disable_tokens={})",
                user_id,
                request.reason.len(),
                request.disable_tokens
            ),
            Action::UnbanUser { user_id, request } => write!(
                f,
                "UnbanUser(user_id={}, reason=<{} chars>, enable_tokens={})",
                user_id,
                request.reason.len(),
                request.enable_tokens
            ),
            Action::UserStatusChanged {
                user_id,
                status,
                result,
            } => write!(
                f,
                "UserStatusChanged(user_id={}, {}, {})",
                user_id,
                status,
                outcome(result)
            ),
            Action::UserDeleted {
                user_id,
                mode,
                result,
            } => write!(
                f,
                "UserDeleted(user_id={}, {:?}, {})",
                user_id,
                mode,
                outcome(result)
            ),
            Action::UserBatchPreviewed {
                activity, result, ..
            } => match result {
                Ok(preview) => write!(
                    f,
                    "UserBatchPreviewed({:?}, affected={}, <{} names>)",
                    activity,
                    preview.affected,
                    preview.sample.len()
                ),
                Err(_) => write!(f, "UserBatchPreviewed({:?}, <error>)", activity),
            },
            Action::UserBatchDeleted {
                activity, result, ..
            } => match result {
                Ok(done) => write!(
                    f,
                    "UserBatchDeleted({:?}, affected={})",
                    activity, done.affected
                ),
                Err(_) => write!(f, "UserBatchDeleted({:?}, <error>)", activity),
            },
            Action::WhitelistChanged {
                user_id,
                whitelisted,
                result,
            } => write!(
                f,
                "WhitelistChanged(user_id={}, {}, {})",
                user_id,
                whitelisted,
                outcome(result)
            ),
            Action::GenerateRedemptions(request) => write!(
                f,
                "GenerateRedemptions(name=<{} chars>, count={}, quota={})",
                request.name.len(),
                request.count,
                request.quota
            ),
            Action::RedemptionsGenerated(result) => match result {
                Ok(keys) => write!(f, "RedemptionsGenerated(<{} keys>)", keys.len()),
                Err(_) => write!(f, "RedemptionsGenerated(<error>)"),
            },
            Action::RedemptionDeleted { code_id, result } => write!(
                f,
                "RedemptionDeleted(code_id={}, {})",
                code_id,
                outcome(result)
            ),
            Action::RedemptionPurgePreviewed { status, result } => match result {
                Ok(preview) => write!(
                    f,
                    "RedemptionPurgePreviewed({}, affected={})",
                    status, preview.affected
                ),
                Err(_) => write!(f, "RedemptionPurgePreviewed({}, <error>)", status),
            },
            Action::RedemptionsPurged { status, result } => match result {
                Ok(done) => write!(f, "RedemptionsPurged({}, affected={})", status, done.affected),
                Err(_) => write!(f, "RedemptionsPurged({}, <error>)", status),
            },
            Action::SaveMonitorConfig(config) => write!(
                f,
                "SaveMonitorConfig(<{} models>)",
                config.selected_models.len()
            ),
            Action::MonitorConfigSaved(result) => {
                write!(f, "MonitorConfigSaved({})", outcome(result))
            }

            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ToastLevel;
    use gateway_client::{BanRequest, ClientError};
    use std::sync::Arc;

    #[test]
    fn test_generated_keys_are_not_logged() {
        let action = Action::RedemptionsGenerated(Ok(vec![
            "KEY-SECRET-1".to_string(),
            "KEY-SECRET-2".to_string(),
        ]));
        let output = format!("{:?}", RedactedAction(&action));
        assert!(!output.contains("KEY-SECRET"));
        assert!(output.contains("<2 keys>"));
    }

    #[test]
    fn test_ban_reason_is_redacted() {
        let action = Action::BanUser {
            user_id: 42,
            request: BanRequest {
                reason: "spam".to_string(),
                disable_tokens: true,
                context: Some("ticket 991 from alice@example.com".to_string()),
            },
        };
        let output = format!("{:?}", RedactedAction(&action));
        assert!(output.contains("user_id=42"));
        assert!(!output.contains("alice@example.com"));
    }

    #[test]
    fn test_error_payload_is_redacted() {
        let action = Action::RedemptionDeleted {
            code_id: 3,
            result: Err(Arc::new(ClientError::Unauthorized(
                "token abc123 revoked".to_string(),
            ))),
        };
        let output = format!("{:?}", RedactedAction(&action));
        assert!(!output.contains("abc123"));
        assert!(output.contains("<error>"));
    }

    #[test]
    fn test_notify_text_is_redacted() {
        let action = Action::Notify(ToastLevel::Info, "user bob banned".to_string());
        let output = format!("{:?}", RedactedAction(&action));
        assert!(!output.contains("bob"));
    }

    #[test]
    fn test_simple_variants_use_debug() {
        assert_eq!(format!("{:?}", RedactedAction(&Action::Quit)), "Quit");
    }
}
