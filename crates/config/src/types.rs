//! Configuration types for the gateway console.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Authentication configuration.
///
/// The admin API accepts a static bearer token; there is no login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token sent with every request.
    #[serde(with = "secret_string")]
    pub token: SecretString,
}

/// Connection configuration for the gateway admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the gateway (e.g., https://gateway.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config with the specified base URL and API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig { token },
        }
    }
}

/// Named connection profile stored in `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the gateway
    pub base_url: Option<String>,
    /// Admin API token
    pub api_token: Option<String>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// Auto-refresh interval for polled screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RefreshInterval {
    #[serde(rename = "off")]
    Off,
    #[serde(rename = "30s")]
    Secs30,
    #[default]
    #[serde(rename = "60s")]
    Secs60,
    #[serde(rename = "120s")]
    Secs120,
    #[serde(rename = "300s")]
    Secs300,
}

impl RefreshInterval {
    /// Every selectable interval, in cycle order.
    pub const ALL: [RefreshInterval; 5] = [
        Self::Off,
        Self::Secs30,
        Self::Secs60,
        Self::Secs120,
        Self::Secs300,
    ];

    /// Interval length in seconds, or `None` when polling is off.
    pub fn seconds(self) -> Option<u64> {
        match self {
            Self::Off => None,
            Self::Secs30 => Some(30),
            Self::Secs60 => Some(60),
            Self::Secs120 => Some(120),
            Self::Secs300 => Some(300),
        }
    }

    /// Next interval in the cycle (wraps from 300s back to off).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Off => Self::Secs30,
            Self::Secs30 => Self::Secs60,
            Self::Secs60 => Self::Secs120,
            Self::Secs120 => Self::Secs300,
            Self::Secs300 => Self::Off,
        }
    }
}

impl fmt::Display for RefreshInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.seconds() {
            Some(secs) => write!(f, "{secs}s"),
            None => write!(f, "off"),
        }
    }
}

/// Look-back window for risk analysis, leaderboards and model health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeWindow {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "3h")]
    ThreeHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[default]
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "7d")]
    SevenDays,
}

impl TimeWindow {
    const ORDER: [TimeWindow; 7] = [
        Self::OneHour,
        Self::ThreeHours,
        Self::SixHours,
        Self::TwelveHours,
        Self::OneDay,
        Self::ThreeDays,
        Self::SevenDays,
    ];

    /// Query-string form of the window.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::ThreeHours => "3h",
            Self::SixHours => "6h",
            Self::TwelveHours => "12h",
            Self::OneDay => "24h",
            Self::ThreeDays => "3d",
            Self::SevenDays => "7d",
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|w| *w == self).unwrap_or(0)
    }

    /// Next wider window, saturating at the widest.
    pub fn wider(self) -> Self {
        let idx = (self.position() + 1).min(Self::ORDER.len() - 1);
        Self::ORDER[idx]
    }

    /// Next narrower window, saturating at the narrowest.
    pub fn narrower(self) -> Self {
        Self::ORDER[self.position().saturating_sub(1)]
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation period for the usage dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UsagePeriod {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl UsagePeriod {
    /// Query-string form of the period.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
        }
    }

    pub fn cycle_next(self) -> Self {
        match self {
            Self::Day => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Day,
        }
    }
}

impl fmt::Display for UsagePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranking metric for the risk leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardMetric {
    #[default]
    Requests,
    Quota,
    FailureRate,
}

impl LeaderboardMetric {
    /// Query-string form of the metric.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requests => "requests",
            Self::Quota => "quota",
            Self::FailureRate => "failure_rate",
        }
    }

    /// Human-readable column title.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Requests => "Requests",
            Self::Quota => "Quota",
            Self::FailureRate => "Failure Rate",
        }
    }

    pub fn cycle_next(self) -> Self {
        match self {
            Self::Requests => Self::Quota,
            Self::Quota => Self::FailureRate,
            Self::FailureRate => Self::Requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_with_api_token() {
        let config = Config::with_api_token(
            "https://gateway.example.com".to_string(),
            SecretString::new("admin-token".to_string().into()),
        );
        assert_eq!(config.connection.base_url, "https://gateway.example.com");
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.auth.token.expose_secret(), "admin-token");
    }

    #[test]
    fn test_connection_config_serde_seconds() {
        let config = ConnectionConfig {
            base_url: "https://gateway.example.com".to_string(),
            skip_verify: true,
            timeout: Duration::from_secs(45),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["timeout"], 45);
    }

    #[test]
    fn test_refresh_interval_cycles_through_all_values() {
        let mut interval = RefreshInterval::Off;
        let mut seen = Vec::new();
        for _ in 0..RefreshInterval::ALL.len() {
            seen.push(interval);
            interval = interval.cycle_next();
        }
        assert_eq!(seen, RefreshInterval::ALL);
        assert_eq!(interval, RefreshInterval::Off);
    }

    #[test]
    fn test_refresh_interval_serde_uses_labels() {
        let json = serde_json::to_string(&RefreshInterval::Secs120).unwrap();
        assert_eq!(json, "\"120s\"");
        let parsed: RefreshInterval = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(parsed, RefreshInterval::Off);
        assert_eq!(parsed.seconds(), None);
    }

    #[test]
    fn test_time_window_saturates() {
        assert_eq!(TimeWindow::SevenDays.wider(), TimeWindow::SevenDays);
        assert_eq!(TimeWindow::OneHour.narrower(), TimeWindow::OneHour);
        assert_eq!(TimeWindow::OneDay.wider(), TimeWindow::ThreeDays);
        assert_eq!(TimeWindow::OneDay.narrower(), TimeWindow::TwelveHours);
    }

    #[test]
    fn test_profile_config_missing_fields_default() {
        let profile: ProfileConfig =
            serde_json::from_str(r#"{"base_url":"https://gw.local"}"#).unwrap();
        assert_eq!(profile.base_url.as_deref(), Some("https://gw.local"));
        assert!(profile.api_token.is_none());
        assert!(profile.timeout_seconds.is_none());
    }
}
