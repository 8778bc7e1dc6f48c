//! Fetch issuing for every synchronized resource.
//!
//! Responsibilities:
//! - Start fetch tickets and queue the matching load effect.
//! - Drive the refresh countdowns of the polled screens.
//! - Route manual refreshes (the dashboard goes through the cost guard first).
//!
//! Does NOT handle:
//! - Applying results (see actions/data_loading.rs).
//!
//! Invariants:
//! - Polling is suspended while the session is expired.
//! - A manual refresh restarts the screen's countdown at its full interval.

use gateway_client::TimeoutPolicy;
use gateway_config::UsagePeriod;

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::sync::FetchOrigin;

impl App {
    pub(crate) fn fetch_dashboard(&mut self, origin: FetchOrigin, policy: TimeoutPolicy) {
        let ticket = self.dashboard.begin_fetch(origin);
        self.push_effect(Action::LoadDashboard { ticket, policy });
    }

    /// Manual dashboard refresh: request a cost estimate before fetching.
    pub(crate) fn request_dashboard_refresh(&mut self) {
        self.request_dashboard_period(*self.dashboard.params());
    }

    /// Estimate the cost of showing `period`. The dashboard keeps its current
    /// period and snapshot until the fetch for `period` is issued.
    pub(crate) fn request_dashboard_period(&mut self, period: UsagePeriod) {
        self.dashboard_countdown.reset();
        self.estimate_seq += 1;
        self.dashboard_estimate = Some(period);
        self.push_effect(Action::EstimateDashboardCost {
            seq: self.estimate_seq,
            period,
        });
    }

    /// Switch the dashboard to `period` and fetch it.
    pub(crate) fn commit_dashboard_period(&mut self, period: UsagePeriod, policy: TimeoutPolicy) {
        if period != *self.dashboard.params() {
            self.dashboard.set_params(period);
            self.persist_preferences();
        }
        self.fetch_dashboard(FetchOrigin::Manual, policy);
    }

    pub(crate) fn fetch_leaderboard(&mut self, origin: FetchOrigin) {
        let ticket = self.leaderboard.begin_fetch(origin);
        self.push_effect(Action::LoadLeaderboard(ticket));
    }

    pub(crate) fn fetch_users(&mut self, origin: FetchOrigin) {
        let ticket = self.users.begin_fetch(origin);
        self.push_effect(Action::LoadUsers(ticket));
    }

    pub(crate) fn fetch_user_stats(&mut self, origin: FetchOrigin) {
        let ticket = self.user_stats.begin_fetch(origin);
        self.push_effect(Action::LoadUserStats(ticket));
    }

    pub(crate) fn fetch_redemptions(&mut self, origin: FetchOrigin) {
        let ticket = self.redemptions.begin_fetch(origin);
        self.push_effect(Action::LoadRedemptions(ticket));
    }

    /// Fetch statuses for the monitored selection. Nothing is requested while
    /// the selection is empty.
    pub(crate) fn fetch_models(&mut self, origin: FetchOrigin) {
        let mut params = self.models.params().clone();
        params.models = self.monitored_models.clone();
        self.models.set_params(params);
        if self.monitored_models.is_empty() {
            self.models.clear();
            return;
        }
        let ticket = self.models.begin_fetch(origin);
        self.push_effect(Action::LoadModelStatuses(ticket));
    }

    pub(crate) fn fetch_analysis(&mut self, origin: FetchOrigin) {
        let ticket = self.analysis.begin_fetch(origin);
        self.push_effect(Action::LoadAnalysis(ticket));
    }

    /// Initial load of the start screen.
    pub fn mount(&mut self) {
        self.load_screen(self.current_screen);
    }

    /// Load everything a screen shows when it is mounted.
    pub(crate) fn load_screen(&mut self, screen: CurrentScreen) {
        if self.session_expired {
            return;
        }
        match screen {
            CurrentScreen::Dashboard => {
                self.dashboard_countdown.reset();
                self.fetch_dashboard(FetchOrigin::Initial, TimeoutPolicy::Standard);
            }
            CurrentScreen::Leaderboard => {
                self.leaderboard_countdown.reset();
                self.fetch_leaderboard(FetchOrigin::Initial);
            }
            CurrentScreen::Users => {
                self.fetch_users(FetchOrigin::Initial);
                self.fetch_user_stats(FetchOrigin::Initial);
            }
            CurrentScreen::Redemptions => self.fetch_redemptions(FetchOrigin::Initial),
            CurrentScreen::Models => {
                self.models_countdown.reset();
                self.push_effect(Action::LoadMonitorConfig);
            }
        }
    }

    /// Operator-triggered refresh of the current screen.
    pub(crate) fn refresh_current_screen(&mut self) {
        if self.session_expired {
            return;
        }
        match self.current_screen {
            CurrentScreen::Dashboard => self.request_dashboard_refresh(),
            CurrentScreen::Leaderboard => {
                self.leaderboard_countdown.reset();
                self.fetch_leaderboard(FetchOrigin::Manual);
            }
            CurrentScreen::Users => {
                self.fetch_users(FetchOrigin::Manual);
                self.fetch_user_stats(FetchOrigin::Manual);
            }
            CurrentScreen::Redemptions => self.fetch_redemptions(FetchOrigin::Manual),
            CurrentScreen::Models => {
                self.models_countdown.reset();
                self.fetch_models(FetchOrigin::Manual);
            }
        }
    }

    /// Advance the active screen's countdown by one second.
    pub(crate) fn on_countdown_tick(&mut self) {
        if self.session_expired {
            return;
        }
        match self.current_screen {
            CurrentScreen::Dashboard => {
                if self.dashboard_countdown.tick() {
                    self.fetch_dashboard(FetchOrigin::Poll, TimeoutPolicy::Standard);
                }
            }
            CurrentScreen::Leaderboard => {
                if self.leaderboard_countdown.tick() {
                    self.fetch_leaderboard(FetchOrigin::Poll);
                }
            }
            CurrentScreen::Models => {
                if self.models_countdown.tick() {
                    self.fetch_models(FetchOrigin::Poll);
                }
            }
            CurrentScreen::Users | CurrentScreen::Redemptions => {}
        }
    }

    /// Cycle the refresh interval of the current screen and persist it.
    pub(crate) fn cycle_refresh_interval(&mut self) {
        match self.current_screen {
            CurrentScreen::Dashboard => {
                self.dashboard_refresh = self.dashboard_refresh.cycle_next();
                self.dashboard_countdown
                    .set_interval(self.dashboard_refresh.seconds());
            }
            CurrentScreen::Models => {
                self.models_refresh = self.models_refresh.cycle_next();
                self.models_countdown.set_interval(self.models_refresh.seconds());
            }
            _ => return,
        }
        self.persist_preferences();
    }
}
