//! Key classification helpers shared by the input handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A character that should be inserted into a text field.
///
/// Shift is allowed (upper case); Ctrl and Alt combinations are not.
pub fn is_printable_char(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(c) if !c.is_control())
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_accepts_shifted_letters() {
        assert!(is_printable_char(KeyEvent::new(
            KeyCode::Char('D'),
            KeyModifiers::SHIFT
        )));
        assert!(!is_printable_char(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_printable_char(KeyEvent::from(KeyCode::Enter)));
    }
}
