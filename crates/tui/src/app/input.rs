//! Keyboard input handling for the TUI app.
//!
//! Responsibilities:
//! - Route key presses by precedence: popup, analysis dialog, global keys,
//!   then the current screen's handler
//! - Handle the global keys (quit, help, screen switching, refresh, selection)
//!
//! Non-responsibilities:
//! - Does NOT perform I/O; handlers mutate state and queue effects
//! - Does NOT handle popup keys (see popups module)
//!
//! `handle_input` returns an action only for control flow owned by the main
//! loop (`Quit`, `Reconnect`).

pub mod analysis;
pub mod dashboard;
pub mod help;
pub mod helpers;
pub mod leaderboard;
pub mod models;
pub mod redemptions;
pub mod users;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::ui::popup::{Popup, PopupType};

impl App {
    /// Handle one key press.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        if self.popup.is_some() {
            return self.handle_popup_input(key);
        }
        if self.is_analysis_open() {
            self.handle_analysis_input(key);
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => self.popup = Some(Popup::of(PopupType::Help)),
            KeyCode::Tab => self.switch_screen(self.current_screen.next()),
            KeyCode::BackTab => self.switch_screen(self.current_screen.previous()),
            KeyCode::Char(c) if CurrentScreen::from_digit(c).is_some() => {
                if let Some(screen) = CurrentScreen::from_digit(c) {
                    self.switch_screen(screen);
                }
            }
            KeyCode::Char('r') => self.refresh_current_screen(),
            KeyCode::Char('i') => self.cycle_refresh_interval(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            _ => self.dispatch_screen_input(key),
        }
        None
    }

    /// Dispatch input to the current screen's handler.
    fn dispatch_screen_input(&mut self, key: KeyEvent) {
        match self.current_screen {
            CurrentScreen::Dashboard => self.handle_dashboard_input(key),
            CurrentScreen::Leaderboard => self.handle_leaderboard_input(key),
            CurrentScreen::Users => self.handle_users_input(key),
            CurrentScreen::Redemptions => self.handle_redemptions_input(key),
            CurrentScreen::Models => self.handle_models_input(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(c: char) -> KeyEvent {
        KeyEvent::from(KeyCode::Char(c))
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::default();
        assert!(matches!(app.handle_input(key('q')), Some(Action::Quit)));
    }

    #[test]
    fn test_digit_switches_screen_and_loads_it() {
        let mut app = App::default();
        app.drain_effects();
        assert!(app.handle_input(key('2')).is_none());
        assert_eq!(app.current_screen, CurrentScreen::Leaderboard);
        let effects = app.drain_effects();
        assert!(
            effects
                .iter()
                .any(|a| matches!(a, Action::LoadLeaderboard(_)))
        );
    }

    #[test]
    fn test_popup_captures_input() {
        let mut app = App::default();
        app.popup = Some(Popup::of(PopupType::Help));
        assert!(app.handle_input(key('q')).is_none());
        assert!(app.popup.is_none());
        assert_eq!(app.current_screen, CurrentScreen::Dashboard);
    }

    #[test]
    fn test_help_opens_popup() {
        let mut app = App::default();
        app.handle_input(key('?'));
        assert!(matches!(
            app.popup.as_ref().map(|p| &p.kind),
            Some(PopupType::Help)
        ));
    }
}
