//! Redemptions screen input handler.

use crossterm::event::{KeyCode, KeyEvent};
use gateway_client::{RedemptionListParams, RedemptionStatus};

use crate::app::App;
use crate::app::state::FilterTarget;
use crate::sync::FetchOrigin;
use crate::ui::ToastLevel;
use crate::ui::popup::{GenerateForm, Popup, PopupType};

const STATUS_FILTERS: [Option<RedemptionStatus>; 5] = [
    None,
    Some(RedemptionStatus::Unused),
    Some(RedemptionStatus::Used),
    Some(RedemptionStatus::Expired),
    Some(RedemptionStatus::Disabled),
];

impl App {
    /// Handle input for the redemptions screen.
    pub fn handle_redemptions_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('g') => {
                self.popup = Some(Popup::of(PopupType::GenerateForm(GenerateForm::default())));
            }
            KeyCode::Char('d') => {
                let Some(code) = self.selected_redemption() else {
                    self.toast(ToastLevel::Info, "No code selected");
                    return;
                };
                let (code_id, name) = (code.id, code.name.clone());
                self.popup = Some(Popup::of(PopupType::ConfirmDeleteRedemption { code_id, name }));
            }
            KeyCode::Char('X') => {
                self.popup = Some(Popup::of(PopupType::SelectPurgeStatus {
                    status: RedemptionStatus::Used,
                }));
            }
            KeyCode::Char('/') => {
                let input = self.redemptions.params().name.clone().unwrap_or_default();
                self.popup = Some(Popup::of(PopupType::FilterInput {
                    target: FilterTarget::Redemptions,
                    input,
                }));
            }
            KeyCode::Char('s') => {
                let current = self.redemptions.params().status;
                let idx = STATUS_FILTERS.iter().position(|s| *s == current).unwrap_or(0);
                let mut params = self.redemptions.params().clone();
                params.status = STATUS_FILTERS[(idx + 1) % STATUS_FILTERS.len()];
                self.apply_redemption_filter(params);
            }
            KeyCode::Char('c') => {
                let mut params = self.redemptions.params().clone();
                params.name = None;
                params.status = None;
                self.apply_redemption_filter(params);
            }
            KeyCode::Char('n') => self.page_redemptions(true),
            KeyCode::Char('p' | 'N') => self.page_redemptions(false),
            _ => {}
        }
    }

    /// Replace the redemption list filter and re-fetch from the first page.
    pub(crate) fn apply_redemption_filter(&mut self, mut params: RedemptionListParams) {
        params.page = 1;
        if params == *self.redemptions.params() {
            return;
        }
        self.redemptions.set_params(params);
        self.redemptions_state.select(Some(0));
        if !self.session_expired {
            self.fetch_redemptions(FetchOrigin::Manual);
        }
    }
}
