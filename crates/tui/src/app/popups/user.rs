//! Ban/unban popup input handler.

use crossterm::event::{KeyCode, KeyEvent};
use gateway_client::{BanRequest, UnbanRequest};

use crate::action::Action;
use crate::app::App;
use crate::sync::MutationKey;
use crate::ui::ToastLevel;
use crate::ui::popup::PopupType;

impl App {
    pub(super) fn handle_ban_popup(&mut self, kind: PopupType, key: KeyEvent) -> Option<PopupType> {
        let PopupType::BanUser {
            user_id,
            username,
            ban,
            mut reason,
            mut toggle_tokens,
        } = kind
        else {
            return None;
        };

        match key.code {
            KeyCode::Esc => return None,
            KeyCode::Left => reason = reason.previous(),
            KeyCode::Right => reason = reason.next(),
            KeyCode::Char(' ') => toggle_tokens = !toggle_tokens,
            KeyCode::Enter => {
                if !self.pending.try_begin(MutationKey::UserStatus(user_id)) {
                    self.toast(ToastLevel::Info, format!("Update of {username} already in progress"));
                    return None;
                }
                let action = if ban {
                    Action::BanUser {
                        user_id,
                        request: BanRequest {
                            reason: reason.as_str().to_string(),
                            disable_tokens: toggle_tokens,
                            context: None,
                        },
                    }
                } else {
                    Action::UnbanUser {
                        user_id,
                        request: UnbanRequest {
                            reason: reason.as_str().to_string(),
                            enable_tokens: toggle_tokens,
                            context: None,
                        },
                    }
                };
                self.push_effect(action);
                return None;
            }
            _ => {}
        }

        Some(PopupType::BanUser {
            user_id,
            username,
            ban,
            reason,
            toggle_tokens,
        })
    }
}
