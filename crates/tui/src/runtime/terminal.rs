//! Terminal restoration on exit.
//!
//! Release builds abort on panic, so unwinding never reaches `Drop`. The guard
//! therefore also installs a panic hook that restores the terminal before the
//! previous hook prints the panic message.
//!
//! Invariants:
//! - Created after raw mode and the alternate screen were entered.
//! - Restoring twice is harmless; errors during restore are ignored.

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Leaves raw mode and the alternate screen when dropped or on panic.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> Self {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
        Self { _private: () }
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}
