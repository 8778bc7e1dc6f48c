//! Screen mounting and row navigation.
//!
//! Responsibilities:
//! - Switch screens: unmount cancels the old screen's fetches (keeping their
//!   snapshots), mount loads the new screen and restarts its countdown.
//! - Move the selection of the current table.
//! - Page through the users and redemptions lists.
//!
//! Does NOT handle:
//! - Key decoding (see input/)

use gateway_client::{LeaderboardEntry, RedemptionCode, UserRecord};
use ratatui::widgets::TableState;

use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::sync::FetchOrigin;

fn step(state: &mut TableState, len: usize, down: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0).min(len - 1);
    let next = if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    };
    state.select(Some(next));
}

impl App {
    /// Switch to `screen`, unmounting the current one.
    pub fn switch_screen(&mut self, screen: CurrentScreen) {
        if screen == self.current_screen {
            return;
        }
        self.unmount_screen(self.current_screen);
        self.current_screen = screen;
        self.load_screen(screen);
    }

    fn unmount_screen(&mut self, screen: CurrentScreen) {
        match screen {
            CurrentScreen::Dashboard => {
                self.dashboard.cancel();
                self.estimate_seq += 1;
                self.dashboard_estimate = None;
            }
            CurrentScreen::Leaderboard => self.leaderboard.cancel(),
            CurrentScreen::Users => {
                self.users.cancel();
                self.user_stats.cancel();
            }
            CurrentScreen::Redemptions => self.redemptions.cancel(),
            CurrentScreen::Models => self.models.cancel(),
        }
    }

    pub(crate) fn move_selection(&mut self, down: bool) {
        match self.current_screen {
            CurrentScreen::Dashboard => {}
            CurrentScreen::Leaderboard => {
                let len = self.leaderboard.data().map_or(0, |s| s.entries.len());
                step(&mut self.leaderboard_state, len, down);
            }
            CurrentScreen::Users => {
                let len = self.users.data().map_or(0, |p| p.items.len());
                step(&mut self.users_state, len, down);
            }
            CurrentScreen::Redemptions => {
                let len = self.redemptions.data().map_or(0, |p| p.items.len());
                step(&mut self.redemptions_state, len, down);
            }
            CurrentScreen::Models => {
                let len = self.models.data().map_or(0, Vec::len);
                step(&mut self.models_state, len, down);
            }
        }
    }

    pub fn selected_leaderboard_entry(&self) -> Option<&LeaderboardEntry> {
        let idx = self.leaderboard_state.selected()?;
        self.leaderboard.data()?.entries.get(idx)
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        let idx = self.users_state.selected()?;
        self.users.data()?.items.get(idx)
    }

    pub fn selected_redemption(&self) -> Option<&RedemptionCode> {
        let idx = self.redemptions_state.selected()?;
        self.redemptions.data()?.items.get(idx)
    }

    /// Move the users list one page forward or back.
    pub(crate) fn page_users(&mut self, forward: bool) {
        let Some(page) = self.users.data() else {
            return;
        };
        let target = if forward {
            if !page.has_next() {
                return;
            }
            self.users.params().page + 1
        } else {
            if self.users.params().page <= 1 {
                return;
            }
            self.users.params().page - 1
        };
        let mut params = self.users.params().clone();
        params.page = target;
        self.users.set_params(params);
        self.users_state.select(Some(0));
        self.fetch_users(FetchOrigin::Manual);
    }

    /// Move the redemptions list one page forward or back.
    pub(crate) fn page_redemptions(&mut self, forward: bool) {
        let Some(page) = self.redemptions.data() else {
            return;
        };
        let target = if forward {
            if !page.has_next() {
                return;
            }
            self.redemptions.params().page + 1
        } else {
            if self.redemptions.params().page <= 1 {
                return;
            }
            self.redemptions.params().page - 1
        };
        let mut params = self.redemptions.params().clone();
        params.page = target;
        self.redemptions.set_params(params);
        self.redemptions_state.select(Some(0));
        self.fetch_redemptions(FetchOrigin::Manual);
    }

    /// Keep a table selection inside the list after rows were removed.
    pub(crate) fn clamp_selection(state: &mut TableState, len: usize) {
        match (state.selected(), len) {
            (_, 0) => state.select(None),
            (Some(idx), len) if idx >= len => state.select(Some(len - 1)),
            (None, _) => state.select(Some(0)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_saturates_at_bounds() {
        let mut state = TableState::default();
        state.select(Some(0));
        step(&mut state, 3, false);
        assert_eq!(state.selected(), Some(0));
        step(&mut state, 3, true);
        step(&mut state, 3, true);
        step(&mut state, 3, true);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut state = TableState::default();
        state.select(Some(4));
        App::clamp_selection(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
        App::clamp_selection(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
