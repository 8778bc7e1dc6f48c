//! System action handlers: timers, notifications, resize.

use std::time::Instant;

use crate::action::Action;
use crate::app::App;
use crate::sync::MutationKey;

impl App {
    pub(crate) fn handle_system_action(&mut self, action: Action) {
        match action {
            Action::Tick => self.on_tick(Instant::now()),
            Action::CountdownTick => self.on_countdown_tick(),
            Action::Notify(level, message) => self.toast(level, message),
            Action::Resize(width, height) => {
                self.last_area = ratatui::layout::Rect::new(0, 0, width, height);
            }
            _ => {}
        }
    }

    /// UI tick: expire toasts, animate the spinner and flush the monitor debounce.
    pub(crate) fn on_tick(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired());
        if self.is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }

        if self.session_expired {
            return;
        }
        if let Some(config) = self.monitor_sync.take_due(now) {
            if self.pending.try_begin(MutationKey::MonitorConfig) {
                self.push_effect(Action::SaveMonitorConfig(config));
            } else {
                // A save is still in flight; retry once it is quiet again.
                self.monitor_sync.schedule(config, now);
            }
        }
    }

    /// Whether any visible resource is loading.
    pub fn is_busy(&self) -> bool {
        self.dashboard.is_loading()
            || self.dashboard_estimate.is_some()
            || self.leaderboard.is_loading()
            || self.users.is_loading()
            || self.redemptions.is_loading()
            || self.models.is_loading()
            || self.analysis.is_loading()
            || self.available_models_loading
    }
}
