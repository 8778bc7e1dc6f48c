//! Model health screen input handler.
//!
//! Responsibilities:
//! - Open the model picker (loading the available models on first use)
//! - Toggle monitored models and shift the status window
//!
//! Invariants:
//! - Every selection or window change is persisted locally at once and
//!   mirrored to the backend through the debouncer.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use gateway_client::MonitorConfig;

use crate::action::Action;
use crate::app::App;
use crate::sync::FetchOrigin;
use crate::ui::popup::{Popup, PopupType};

impl App {
    /// Handle input for the models screen.
    pub fn handle_models_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') => self.open_model_picker(),
            KeyCode::Char('x') | KeyCode::Delete => {
                let model = self
                    .models_state
                    .selected()
                    .and_then(|idx| self.models.data()?.get(idx))
                    .map(|status| status.model.clone());
                if let Some(model) = model {
                    self.toggle_monitored_model(&model);
                }
            }
            KeyCode::Char('[') => self.shift_models_window(false),
            KeyCode::Char(']') => self.shift_models_window(true),
            _ => {}
        }
    }

    fn open_model_picker(&mut self) {
        if self.available_models.is_empty() && !self.available_models_loading && !self.session_expired
        {
            self.available_models_loading = true;
            self.push_effect(Action::LoadAvailableModels);
        }
        self.popup = Some(Popup::of(PopupType::ModelPicker { selected: 0 }));
    }

    /// Add or remove `model` from the monitored selection.
    pub(crate) fn toggle_monitored_model(&mut self, model: &str) {
        match self.monitored_models.iter().position(|m| m == model) {
            Some(pos) => {
                self.monitored_models.remove(pos);
            }
            None => self.monitored_models.push(model.to_string()),
        }
        self.monitor_selection_changed();
    }

    fn shift_models_window(&mut self, wider: bool) {
        let mut params = self.models.params().clone();
        let window = if wider {
            params.window.wider()
        } else {
            params.window.narrower()
        };
        if window == params.window {
            return;
        }
        params.window = window;
        self.models.set_params(params);
        self.monitor_selection_changed();
    }

    fn monitor_selection_changed(&mut self) {
        self.persist_preferences();
        if self.session_expired {
            return;
        }
        self.monitor_sync
            .schedule(self.monitor_config(), Instant::now());
        self.models_countdown.reset();
        self.fetch_models(FetchOrigin::Manual);
    }

    /// The selection as mirrored to the backend.
    pub(crate) fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            selected_models: self.monitored_models.clone(),
            refresh_interval_secs: self.models_refresh.seconds().unwrap_or(0),
            window: self.models.params().window.as_str().to_string(),
        }
    }
}
