//! Input handlers for the remaining popups: help, filters, the generate form,
//! generated keys and the model picker.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::app::input::helpers::is_printable_char;
use crate::app::state::FilterTarget;
use crate::sync::MutationKey;
use crate::ui::popup::PopupType;

impl App {
    pub(super) fn handle_misc_popup(&mut self, mut kind: PopupType, key: KeyEvent) -> Option<PopupType> {
        let closes = match kind {
            PopupType::Help => matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter
            ),
            PopupType::GeneratedKeys(_) => matches!(key.code, KeyCode::Esc | KeyCode::Enter),
            _ => key.code == KeyCode::Esc,
        };
        if closes {
            return None;
        }

        match &mut kind {
            PopupType::Help | PopupType::GeneratedKeys(_) => {}
            PopupType::FilterInput { target, input } => match key.code {
                KeyCode::Enter => {
                    let trimmed = input.trim();
                    let name = (!trimmed.is_empty()).then(|| trimmed.to_string());
                    match target {
                        FilterTarget::Users => {
                            let mut params = self.users.params().clone();
                            params.name = name;
                            self.apply_user_filter(params);
                        }
                        FilterTarget::Redemptions => {
                            let mut params = self.redemptions.params().clone();
                            params.name = name;
                            self.apply_redemption_filter(params);
                        }
                    }
                    return None;
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) if is_printable_char(key) => input.push(c),
                _ => {}
            },
            PopupType::GenerateForm(form) => match key.code {
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
                KeyCode::Backspace => form.pop(),
                KeyCode::Enter => {
                    let request = form.to_request(Utc::now());
                    self.begin_mutation(
                        MutationKey::RedemptionGenerate,
                        Action::GenerateRedemptions(request),
                    );
                    return None;
                }
                KeyCode::Char(c) if is_printable_char(key) => form.push(c),
                _ => {}
            },
            PopupType::ModelPicker { selected } => {
                let len = self.available_models.len();
                match key.code {
                    KeyCode::Enter => return None,
                    KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
                    KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                        *selected = (*selected + 1).min(len - 1)
                    }
                    KeyCode::Char(' ') => {
                        if let Some(model) = self.available_models.get(*selected).cloned() {
                            self.toggle_monitored_model(&model);
                        }
                    }
                    _ => {}
                }
            }
            _ => return None,
        }
        Some(kind)
    }
}
