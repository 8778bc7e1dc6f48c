//! Application state types and enums.
//!
//! Responsibilities:
//! - Define screen navigation enum (CurrentScreen)
//! - Define the operator-selectable ban reasons (BanReason)
//! - Define list filter targets (FilterTarget)
//!
//! Does NOT handle:
//! - Does NOT handle state mutations (in App impl)
//! - Does NOT define the main App struct

use std::fmt;

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Current active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentScreen {
    Dashboard,
    Leaderboard,
    Users,
    Redemptions,
    Models,
}

impl CurrentScreen {
    /// Screens in tab order.
    pub const ALL: [CurrentScreen; 5] = [
        Self::Dashboard,
        Self::Leaderboard,
        Self::Users,
        Self::Redemptions,
        Self::Models,
    ];

    /// Returns the next screen in cyclic navigation order.
    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Leaderboard,
            Self::Leaderboard => Self::Users,
            Self::Users => Self::Redemptions,
            Self::Redemptions => Self::Models,
            Self::Models => Self::Dashboard,
        }
    }

    /// Returns the previous screen in cyclic navigation order.
    pub fn previous(self) -> Self {
        match self {
            Self::Dashboard => Self::Models,
            Self::Leaderboard => Self::Dashboard,
            Self::Users => Self::Leaderboard,
            Self::Redemptions => Self::Users,
            Self::Models => Self::Redemptions,
        }
    }

    /// Screen bound to a digit key (`1`..`5`).
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Dashboard),
            '2' => Some(Self::Leaderboard),
            '3' => Some(Self::Users),
            '4' => Some(Self::Redemptions),
            '5' => Some(Self::Models),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Leaderboard => "Risk Leaderboard",
            Self::Users => "Users",
            Self::Redemptions => "Redemptions",
            Self::Models => "Model Health",
        }
    }

    /// Label used for metrics and log fields.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Leaderboard => "leaderboard",
            Self::Users => "users",
            Self::Redemptions => "redemptions",
            Self::Models => "models",
        }
    }
}

/// Why an operator bans or unbans a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BanReason {
    #[default]
    Spam,
    Abuse,
    Fraud,
    QuotaAbuse,
    PolicyViolation,
    Other,
}

impl BanReason {
    pub const ALL: [BanReason; 6] = [
        Self::Spam,
        Self::Abuse,
        Self::Fraud,
        Self::QuotaAbuse,
        Self::PolicyViolation,
        Self::Other,
    ];

    /// Value sent to the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Abuse => "abuse",
            Self::Fraud => "fraud",
            Self::QuotaAbuse => "quota_abuse",
            Self::PolicyViolation => "policy_violation",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spam => "Spam",
            Self::Abuse => "Abuse",
            Self::Fraud => "Fraud",
            Self::QuotaAbuse => "Quota abuse",
            Self::PolicyViolation => "Policy violation",
            Self::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// List whose name filter is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    Users,
    Redemptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_cycle_round_trips() {
        for screen in CurrentScreen::ALL {
            assert_eq!(screen.next().previous(), screen);
        }
        let mut screen = CurrentScreen::Dashboard;
        for _ in 0..CurrentScreen::ALL.len() {
            screen = screen.next();
        }
        assert_eq!(screen, CurrentScreen::Dashboard);
    }

    #[test]
    fn test_digit_mapping() {
        assert_eq!(CurrentScreen::from_digit('3'), Some(CurrentScreen::Users));
        assert_eq!(CurrentScreen::from_digit('9'), None);
    }

    #[test]
    fn test_ban_reason_cycle() {
        assert_eq!(BanReason::Other.next(), BanReason::Spam);
        assert_eq!(BanReason::Spam.previous(), BanReason::Other);
        assert_eq!(BanReason::QuotaAbuse.as_str(), "quota_abuse");
    }
}
