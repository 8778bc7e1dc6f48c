//! Analysis dialog input handler.

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::sync::{FetchOrigin, MutationKey};
use crate::ui::ToastLevel;

impl App {
    /// Handle input while the analysis dialog is open.
    pub fn handle_analysis_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_analysis(),
            KeyCode::Char('[') => self.shift_analysis_window(false),
            KeyCode::Char(']') => self.shift_analysis_window(true),
            KeyCode::Char('r') if !self.session_expired => self.fetch_analysis(FetchOrigin::Manual),
            KeyCode::Char('w') => self.toggle_whitelist(),
            KeyCode::Char('b') => self.open_ban_dialog(true),
            KeyCode::Char('u') => self.open_ban_dialog(false),
            _ => {}
        }
    }

    fn toggle_whitelist(&mut self) {
        let Some(snapshot) = self.analysis.data() else {
            self.toast(ToastLevel::Info, "Analysis still loading");
            return;
        };
        let (user_id, whitelisted) = (snapshot.user_id, !snapshot.whitelisted);
        if !self.pending.try_begin(MutationKey::Whitelist(user_id)) {
            self.toast(ToastLevel::Info, "Whitelist update already in progress");
            return;
        }
        self.push_effect(Action::SetWhitelisted {
            user_id,
            whitelisted,
        });
    }
}
