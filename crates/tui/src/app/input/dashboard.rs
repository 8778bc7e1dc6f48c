//! Dashboard screen input handler.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

impl App {
    /// Handle input for the dashboard screen.
    pub fn handle_dashboard_input(&mut self, key: KeyEvent) {
        if let KeyCode::Char('p') = key.code {
            if self.session_expired {
                return;
            }
            // Cycle from the period still being estimated, if any.
            let current = self.dashboard_estimate.unwrap_or(*self.dashboard.params());
            self.request_dashboard_period(current.cycle_next());
        }
    }
}
