//! Popup input handling for the TUI app.
//!
//! Responsibilities:
//! - Handle keyboard input when a popup is active
//! - Dispatch to sub-handlers by popup type
//! - Rebuild the popup after every state change so its content stays current
//!
//! Non-responsibilities:
//! - Does NOT render popups (handled by ui::popup module)
//! - Does NOT define popup types (handled by ui::popup module)

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::ui::popup::{Popup, PopupType};

mod confirm;
mod misc;
mod user;

impl App {
    /// Handle keyboard input when a popup is active.
    ///
    /// Returns an action only for main-loop control flow.
    pub fn handle_popup_input(&mut self, key: KeyEvent) -> Option<Action> {
        let kind = self.popup.take()?.kind;

        if kind == PopupType::SessionExpired {
            return match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('r') => {
                    self.popup = Some(Popup::of(kind));
                    Some(Action::Reconnect)
                }
                _ => {
                    self.popup = Some(Popup::of(kind));
                    None
                }
            };
        }

        let next = match kind {
            PopupType::BanUser { .. } => self.handle_ban_popup(kind, key),
            PopupType::CostGuard { .. }
            | PopupType::ConfirmDeleteUser { .. }
            | PopupType::SelectUserBatch { .. }
            | PopupType::ConfirmUserBatch { .. }
            | PopupType::ConfirmDeleteRedemption { .. }
            | PopupType::SelectPurgeStatus { .. }
            | PopupType::ConfirmPurge { .. } => self.handle_confirm_popup(kind, key),
            _ => self.handle_misc_popup(kind, key),
        };

        // A handler may open a different popup itself; keep that one.
        if self.popup.is_none() {
            self.popup = next.map(Popup::of);
        }
        None
    }
}
