//! Risk leaderboard input handler.
//!
//! Responsibilities:
//! - Change the ranking window and metric (persisted, re-fetched immediately)
//! - Open the analysis dialog for the selected entry, aligned with the
//!   snapshot's generation time

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::sync::FetchOrigin;

impl App {
    /// Handle input for the leaderboard screen.
    pub fn handle_leaderboard_input(&mut self, key: KeyEvent) {
        let mut params = *self.leaderboard.params();
        match key.code {
            KeyCode::Char('[') => params.window = params.window.narrower(),
            KeyCode::Char(']') => params.window = params.window.wider(),
            KeyCode::Char('m') => params.metric = params.metric.cycle_next(),
            KeyCode::Enter => {
                let end_time = self.leaderboard.data().map(|s| s.generated_at);
                if let Some(entry) = self.selected_leaderboard_entry() {
                    let (user_id, username) = (entry.user_id, entry.username.clone());
                    self.open_analysis(user_id, username, end_time);
                }
                return;
            }
            _ => return,
        }

        if params == *self.leaderboard.params() {
            return;
        }
        self.leaderboard.set_params(params);
        self.persist_preferences();
        if !self.session_expired {
            self.leaderboard_countdown.reset();
            self.fetch_leaderboard(FetchOrigin::Manual);
        }
    }
}
