//! Confirmation popup input handlers.
//!
//! Responsibilities:
//! - Cost guard confirmation of an expensive dashboard refresh
//! - Single and batch user deletes, including the typed phrase of hard deletes
//! - Redemption delete and the two-phase purge
//!
//! Invariants:
//! - A hard delete is never sent before `confirm_enabled` holds.
//! - Batch operations always run their dry run before the commit dialog opens.

use crossterm::event::{KeyCode, KeyEvent};
use gateway_client::{DeleteMode, TimeoutPolicy};

use crate::action::Action;
use crate::app::App;
use crate::app::input::helpers::is_printable_char;
use crate::sync::MutationKey;
use crate::ui::ToastLevel;
use crate::ui::popup::{ACTIVITY_LEVELS, PURGEABLE_STATUSES, PopupType, cycle};

/// Keys that accept a confirmation dialog in its current mode.
fn is_confirm(kind: &PopupType, key: KeyEvent) -> bool {
    // Selection dialogs advance with Enter instead.
    if matches!(
        kind,
        PopupType::SelectUserBatch { .. } | PopupType::SelectPurgeStatus { .. }
    ) {
        return false;
    }
    let typed_phrase = matches!(
        kind,
        PopupType::ConfirmDeleteUser {
            mode: DeleteMode::Hard,
            ..
        } | PopupType::ConfirmUserBatch {
            mode: DeleteMode::Hard,
            ..
        }
    );
    if typed_phrase {
        key.code == KeyCode::Enter && kind.confirm_enabled()
    } else {
        matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'))
    }
}

/// Edit the typed phrase of a hard delete. Returns whether the key was consumed.
fn edit_phrase(typed: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => {
            typed.pop();
            true
        }
        KeyCode::Char(c) if is_printable_char(key) => {
            typed.push(c);
            true
        }
        _ => false,
    }
}

impl App {
    pub(super) fn handle_confirm_popup(
        &mut self,
        mut kind: PopupType,
        key: KeyEvent,
    ) -> Option<PopupType> {
        if key.code == KeyCode::Esc {
            return None;
        }
        if is_confirm(&kind, key) {
            self.confirm(kind);
            return None;
        }

        match &mut kind {
            PopupType::ConfirmDeleteUser {
                mode: DeleteMode::Hard,
                typed,
                ..
            }
            | PopupType::ConfirmUserBatch {
                mode: DeleteMode::Hard,
                typed,
                ..
            } => {
                edit_phrase(typed, key);
            }
            PopupType::SelectUserBatch { activity, mode } => match key.code {
                KeyCode::Left => *activity = cycle(&ACTIVITY_LEVELS, *activity, false),
                KeyCode::Right => *activity = cycle(&ACTIVITY_LEVELS, *activity, true),
                KeyCode::Char('m') => {
                    *mode = match mode {
                        DeleteMode::Soft => DeleteMode::Hard,
                        DeleteMode::Hard => DeleteMode::Soft,
                    }
                }
                KeyCode::Enter => {
                    let (activity, mode) = (*activity, *mode);
                    self.begin_mutation(
                        MutationKey::UserBatch(activity, mode),
                        Action::PreviewUserBatchDelete { activity, mode },
                    );
                    return None;
                }
                _ => {}
            },
            PopupType::SelectPurgeStatus { status } => match key.code {
                KeyCode::Left => *status = cycle(&PURGEABLE_STATUSES, *status, false),
                KeyCode::Right => *status = cycle(&PURGEABLE_STATUSES, *status, true),
                KeyCode::Enter => {
                    let status = *status;
                    self.begin_mutation(
                        MutationKey::RedemptionPurge(status),
                        Action::PreviewRedemptionPurge { status },
                    );
                    return None;
                }
                _ => {}
            },
            _ => {
                if matches!(key.code, KeyCode::Char('n') | KeyCode::Char('N')) {
                    return None;
                }
            }
        }
        Some(kind)
    }

    fn confirm(&mut self, kind: PopupType) {
        match kind {
            PopupType::CostGuard { period, .. } => {
                if !self.session_expired {
                    self.commit_dashboard_period(period, TimeoutPolicy::Extended);
                }
            }
            PopupType::ConfirmDeleteUser { user_id, mode, .. } => self.begin_mutation(
                MutationKey::UserDelete(user_id),
                Action::DeleteUser { user_id, mode },
            ),
            PopupType::ConfirmUserBatch { activity, mode, .. } => self.begin_mutation(
                MutationKey::UserBatch(activity, mode),
                Action::CommitUserBatchDelete { activity, mode },
            ),
            PopupType::ConfirmDeleteRedemption { code_id, .. } => self.begin_mutation(
                MutationKey::RedemptionDelete(code_id),
                Action::DeleteRedemption { code_id },
            ),
            PopupType::ConfirmPurge { status, .. } => self.begin_mutation(
                MutationKey::RedemptionPurge(status),
                Action::CommitRedemptionPurge { status },
            ),
            _ => {}
        }
    }

    /// Queue a mutation unless the same one is still in flight.
    pub(crate) fn begin_mutation(&mut self, key: MutationKey, action: Action) {
        if self.session_expired {
            return;
        }
        if !self.pending.try_begin(key) {
            self.toast(ToastLevel::Info, "That operation is already in progress");
            return;
        }
        self.push_effect(action);
    }
}
