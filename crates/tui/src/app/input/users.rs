//! Users screen input handler.
//!
//! Responsibilities:
//! - Open the ban/unban, delete and batch-delete dialogs for the selection
//! - Edit the name and status filters and page through the list
//! - Open the analysis dialog for the selected user
//!
//! Does NOT handle:
//! - Does NOT send mutations directly; dialogs confirm first (see popups)

use crossterm::event::{KeyCode, KeyEvent};
use gateway_client::{ActivityLevel, DeleteMode, UserStatus};

use crate::app::App;
use crate::app::state::{BanReason, FilterTarget};
use crate::sync::FetchOrigin;
use crate::ui::ToastLevel;
use crate::ui::popup::{Popup, PopupType};

const STATUS_FILTERS: [Option<UserStatus>; 4] = [
    None,
    Some(UserStatus::Active),
    Some(UserStatus::Disabled),
    Some(UserStatus::Banned),
];

impl App {
    /// Handle input for the users screen.
    pub fn handle_users_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b') => self.open_ban_dialog(true),
            KeyCode::Char('u') => self.open_ban_dialog(false),
            KeyCode::Char('d') => self.open_delete_user(DeleteMode::Soft),
            KeyCode::Char('D') => self.open_delete_user(DeleteMode::Hard),
            KeyCode::Char('X') => {
                self.popup = Some(Popup::of(PopupType::SelectUserBatch {
                    activity: ActivityLevel::Never,
                    mode: DeleteMode::Soft,
                }));
            }
            KeyCode::Char('/') => {
                let input = self.users.params().name.clone().unwrap_or_default();
                self.popup = Some(Popup::of(PopupType::FilterInput {
                    target: FilterTarget::Users,
                    input,
                }));
            }
            KeyCode::Char('s') => {
                let current = self.users.params().status;
                let idx = STATUS_FILTERS.iter().position(|s| *s == current).unwrap_or(0);
                let mut params = self.users.params().clone();
                params.status = STATUS_FILTERS[(idx + 1) % STATUS_FILTERS.len()];
                self.apply_user_filter(params);
            }
            KeyCode::Char('c') => {
                let mut params = self.users.params().clone();
                params.name = None;
                params.status = None;
                self.apply_user_filter(params);
            }
            KeyCode::Char('n') => self.page_users(true),
            KeyCode::Char('p' | 'N') => self.page_users(false),
            KeyCode::Enter => {
                if let Some(user) = self.selected_user() {
                    let (id, username) = (user.id, user.username.clone());
                    self.open_analysis(id, username, None);
                }
            }
            _ => {}
        }
    }

    /// Open the ban (`ban == true`) or unban dialog for the selected user, or
    /// for the user in the analysis dialog when one is open.
    pub(crate) fn open_ban_dialog(&mut self, ban: bool) {
        let target = match &self.analysis_view {
            Some(view) => Some((view.user_id, view.username.clone())),
            None => self.selected_user().map(|u| (u.id, u.username.clone())),
        };
        let Some((user_id, username)) = target else {
            self.toast(ToastLevel::Info, "No user selected");
            return;
        };
        self.popup = Some(Popup::of(PopupType::BanUser {
            user_id,
            username,
            ban,
            reason: BanReason::default(),
            toggle_tokens: true,
        }));
    }

    fn open_delete_user(&mut self, mode: DeleteMode) {
        let Some(user) = self.selected_user() else {
            self.toast(ToastLevel::Info, "No user selected");
            return;
        };
        let (user_id, username) = (user.id, user.username.clone());
        self.popup = Some(Popup::of(PopupType::ConfirmDeleteUser {
            user_id,
            username,
            mode,
            typed: String::new(),
        }));
    }

    /// Replace the user list filter and re-fetch from the first page.
    pub(crate) fn apply_user_filter(&mut self, mut params: gateway_client::UserListParams) {
        params.page = 1;
        if params == *self.users.params() {
            return;
        }
        self.users.set_params(params);
        self.users_state.select(Some(0));
        if !self.session_expired {
            self.fetch_users(FetchOrigin::Manual);
        }
    }
}
