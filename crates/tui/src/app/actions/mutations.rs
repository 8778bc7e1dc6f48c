//! Mutation result handlers.
//!
//! Responsibilities:
//! - Patch or remove the affected entities locally once the server confirmed
//! - Move two-phase operations from preview to confirmation
//! - Release the in-flight marker of each mutation
//! - Keep the session-expired dialog on top of late results
//!
//! Invariants:
//! - Nothing is patched on failure; the server's message is surfaced instead.
//! - A successful ban, unban or delete never triggers a list re-fetch.

use gateway_client::{ActivityLevel, BatchDeleteResult, UserStatus};

use crate::action::Action;
use crate::app::App;
use crate::sync::{FetchOrigin, MutationKey, patch_item, remove_items};
use crate::ui::ToastLevel;
use crate::ui::popup::{Popup, PopupType};

impl App {
    pub(crate) fn handle_mutation_result(&mut self, action: Action) {
        match action {
            Action::UserStatusChanged {
                user_id,
                status,
                result,
            } => {
                self.pending.finish(&MutationKey::UserStatus(user_id));
                match result {
                    Ok(()) => self.apply_user_status(user_id, status),
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::UserDeleted {
                user_id,
                mode,
                result,
            } => {
                self.pending.finish(&MutationKey::UserDelete(user_id));
                match result {
                    Ok(()) => {
                        self.remove_user(user_id);
                        self.toast(
                            ToastLevel::Success,
                            format!("User #{user_id} deleted ({})", mode.as_str()),
                        );
                    }
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::UserBatchPreviewed {
                activity,
                mode,
                result,
            } => {
                self.pending.finish(&MutationKey::UserBatch(activity, mode));
                match result {
                    Ok(preview) if preview.affected == 0 => {
                        self.toast(
                            ToastLevel::Info,
                            format!("No {} users to delete", activity.display_name()),
                        );
                    }
                    Ok(preview) => self.open_preview(PopupType::ConfirmUserBatch {
                        activity,
                        mode,
                        preview,
                        typed: String::new(),
                    }),
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::UserBatchDeleted {
                activity,
                mode,
                result,
            } => {
                self.pending.finish(&MutationKey::UserBatch(activity, mode));
                match result {
                    Ok(done) => {
                        self.remove_user_batch(activity, &done);
                        self.toast(
                            ToastLevel::Success,
                            format!("Deleted {} users ({})", done.affected, mode.as_str()),
                        );
                    }
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::WhitelistChanged {
                user_id,
                whitelisted,
                result,
            } => {
                self.pending.finish(&MutationKey::Whitelist(user_id));
                match result {
                    Ok(()) => {
                        self.analysis.patch(|snapshot| {
                            if snapshot.user_id == user_id {
                                snapshot.whitelisted = whitelisted;
                            }
                        });
                        let verb = if whitelisted { "added to" } else { "removed from" };
                        self.toast(
                            ToastLevel::Success,
                            format!("User #{user_id} {verb} the whitelist"),
                        );
                    }
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::RedemptionsGenerated(result) => {
                self.pending.finish(&MutationKey::RedemptionGenerate);
                match result {
                    Ok(keys) if self.session_expired => {
                        tracing::info!(count = keys.len(), "Holding generated keys until reconnect");
                        self.deferred_popup = Some(Popup::of(PopupType::GeneratedKeys(keys)));
                    }
                    Ok(keys) => {
                        self.popup = Some(Popup::of(PopupType::GeneratedKeys(keys)));
                        self.fetch_redemptions(FetchOrigin::Manual);
                    }
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::RedemptionDeleted { code_id, result } => {
                self.pending.finish(&MutationKey::RedemptionDelete(code_id));
                match result {
                    Ok(()) => {
                        self.redemptions.patch(|page| {
                            remove_items(page, &[code_id]);
                        });
                        self.clamp_redemptions();
                        self.toast(ToastLevel::Success, format!("Code #{code_id} deleted"));
                    }
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::RedemptionPurgePreviewed { status, result } => {
                self.pending.finish(&MutationKey::RedemptionPurge(status));
                match result {
                    Ok(preview) if preview.affected == 0 => {
                        self.toast(ToastLevel::Info, format!("No {status} codes to purge"));
                    }
                    Ok(preview) => self.open_preview(PopupType::ConfirmPurge { status, preview }),
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::RedemptionsPurged { status, result } => {
                self.pending.finish(&MutationKey::RedemptionPurge(status));
                match result {
                    Ok(done) => {
                        self.redemptions.patch(|page| {
                            remove_items(page, &done.deleted_ids);
                            let unlisted = done.affected.saturating_sub(done.deleted_ids.len() as u64);
                            page.total = page.total.saturating_sub(unlisted);
                            page.recompute_pages();
                        });
                        self.clamp_redemptions();
                        self.toast(
                            ToastLevel::Success,
                            format!("Purged {} {status} codes", done.affected),
                        );
                    }
                    Err(err) => self.report_mutation_failure(&err),
                }
            }
            Action::MonitorConfigSaved(result) => {
                self.pending.finish(&MutationKey::MonitorConfig);
                match result {
                    Ok(()) => tracing::debug!("Monitor selection mirrored to backend"),
                    Err(err) if err.is_auth_error() => self.enter_session_expired(),
                    Err(err) => {
                        tracing::warn!(error = %err, "Failed to mirror monitor selection");
                        self.toast(
                            ToastLevel::Warning,
                            format!("Model selection saved locally only: {}", err.user_message()),
                        );
                    }
                }
            }
            _ => {}
        }
    }

    /// Show a dry-run preview, unless the session expired while it was computed.
    fn open_preview(&mut self, kind: PopupType) {
        if self.session_expired {
            tracing::debug!("Dropped dry-run preview of an expired session");
            return;
        }
        self.popup = Some(Popup::of(kind));
    }

    fn apply_user_status(&mut self, user_id: i64, status: UserStatus) {
        let mut username = None;
        self.users.patch(|page| {
            patch_item(page, &user_id, |user| {
                user.status = status;
                username = Some(user.username.clone());
            });
        });
        self.leaderboard.patch(|snapshot| {
            for entry in snapshot.entries.iter_mut().filter(|e| e.user_id == user_id) {
                entry.status = status;
            }
        });
        self.analysis.patch(|snapshot| {
            if snapshot.user_id == user_id {
                snapshot.status = status;
            }
        });
        let who = username.unwrap_or_else(|| format!("#{user_id}"));
        let verb = if status == UserStatus::Banned {
            "banned"
        } else {
            "unbanned"
        };
        self.toast(ToastLevel::Success, format!("User {who} {verb}"));
    }

    fn remove_user(&mut self, user_id: i64) {
        let activity = self
            .users
            .data()
            .and_then(|page| page.items.iter().find(|u| u.id == user_id))
            .map(|u| u.activity);
        self.users.patch(|page| {
            remove_items(page, &[user_id]);
        });
        if let Some(activity) = activity {
            self.user_stats.patch(|stats| stats.discount(activity, 1));
        }
        self.leaderboard.patch(|snapshot| snapshot.entries.retain(|e| e.user_id != user_id));
        if self
            .analysis_view
            .as_ref()
            .is_some_and(|view| view.user_id == user_id)
        {
            self.close_analysis();
        }
        self.clamp_users();
    }

    fn remove_user_batch(&mut self, activity: ActivityLevel, done: &BatchDeleteResult) {
        self.users.patch(|page| {
            remove_items(page, &done.deleted_ids);
            let unlisted = done.affected.saturating_sub(done.deleted_ids.len() as u64);
            page.total = page.total.saturating_sub(unlisted);
            page.recompute_pages();
        });
        self.user_stats
            .patch(|stats| stats.discount(activity, done.affected));
        self.clamp_users();
    }

    fn clamp_users(&mut self) {
        let len = self.users.data().map_or(0, |p| p.items.len());
        Self::clamp_selection(&mut self.users_state, len);
    }

    fn clamp_redemptions(&mut self) {
        let len = self.redemptions.data().map_or(0, |p| p.items.len());
        Self::clamp_selection(&mut self.redemptions_state, len);
    }
}
