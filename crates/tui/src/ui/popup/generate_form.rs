//! Redemption code generation form.
//!
//! Numeric fields are edited as text and coerced when the request is built:
//! malformed or out-of-range input falls back to the default instead of
//! being rejected.

use chrono::{DateTime, Duration, Utc};
use gateway_client::GenerateCodesRequest;
use gateway_config::constants::{
    DEFAULT_GENERATE_COUNT, DEFAULT_GENERATE_QUOTA, MAX_GENERATE_COUNT,
};

/// Name used when the operator leaves the name field empty.
pub const DEFAULT_CODE_NAME: &str = "code";

/// Focused field of the generate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerateField {
    #[default]
    Name,
    Count,
    Quota,
    Days,
}

impl GenerateField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Count,
            Self::Count => Self::Quota,
            Self::Quota => Self::Days,
            Self::Days => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Days,
            Self::Count => Self::Name,
            Self::Quota => Self::Count,
            Self::Days => Self::Quota,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Count => "Count",
            Self::Quota => "Quota",
            Self::Days => "Valid days (0 = never expires)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateForm {
    pub name: String,
    pub count: String,
    pub quota: String,
    pub days: String,
    pub focused: GenerateField,
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            count: DEFAULT_GENERATE_COUNT.to_string(),
            quota: DEFAULT_GENERATE_QUOTA.to_string(),
            days: "0".to_string(),
            focused: GenerateField::Name,
        }
    }
}

impl GenerateForm {
    fn field_mut(&mut self) -> &mut String {
        match self.focused {
            GenerateField::Name => &mut self.name,
            GenerateField::Count => &mut self.count,
            GenerateField::Quota => &mut self.quota,
            GenerateField::Days => &mut self.days,
        }
    }

    pub fn field(&self, field: GenerateField) -> &str {
        match field {
            GenerateField::Name => &self.name,
            GenerateField::Count => &self.count,
            GenerateField::Quota => &self.quota,
            GenerateField::Days => &self.days,
        }
    }

    pub fn push(&mut self, c: char) {
        if self.focused != GenerateField::Name && !c.is_ascii_digit() {
            return;
        }
        self.field_mut().push(c);
    }

    pub fn pop(&mut self) {
        self.field_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn parsed_count(&self) -> u32 {
        match self.count.trim().parse::<u32>() {
            Ok(n) if (1..=MAX_GENERATE_COUNT).contains(&n) => n,
            _ => DEFAULT_GENERATE_COUNT,
        }
    }

    pub fn parsed_quota(&self) -> i64 {
        match self.quota.trim().parse::<i64>() {
            Ok(q) if q > 0 => q,
            _ => DEFAULT_GENERATE_QUOTA,
        }
    }

    pub fn parsed_days(&self) -> u32 {
        self.days.trim().parse::<u32>().unwrap_or(0)
    }

    /// Build the API request, resolving the validity period against `now`.
    pub fn to_request(&self, now: DateTime<Utc>) -> GenerateCodesRequest {
        let name = match self.name.trim() {
            "" => DEFAULT_CODE_NAME.to_string(),
            name => name.to_string(),
        };
        let expires_at = match self.parsed_days() {
            0 => None,
            days => Some((now + Duration::days(i64::from(days))).timestamp()),
        };
        GenerateCodesRequest {
            name,
            count: self.parsed_count(),
            quota: self.parsed_quota(),
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_malformed_numbers_fall_back_to_defaults() {
        let form = GenerateForm {
            name: "promo".to_string(),
            count: "lots".to_string(),
            quota: "-5".to_string(),
            days: "x".to_string(),
            focused: GenerateField::Name,
        };
        let request = form.to_request(now());
        assert_eq!(request.count, DEFAULT_GENERATE_COUNT);
        assert_eq!(request.quota, DEFAULT_GENERATE_QUOTA);
        assert!(request.expires_at.is_none());
    }

    #[test]
    fn test_count_above_maximum_falls_back() {
        let form = GenerateForm {
            count: (MAX_GENERATE_COUNT + 1).to_string(),
            ..GenerateForm::default()
        };
        assert_eq!(form.parsed_count(), DEFAULT_GENERATE_COUNT);
    }

    #[test]
    fn test_days_resolve_to_expiry() {
        let form = GenerateForm {
            name: "launch".to_string(),
            days: "7".to_string(),
            ..GenerateForm::default()
        };
        let request = form.to_request(now());
        assert_eq!(request.expires_at, Some(now().timestamp() + 7 * 86_400));
    }

    #[test]
    fn test_empty_name_uses_default() {
        let request = GenerateForm::default().to_request(now());
        assert_eq!(request.name, DEFAULT_CODE_NAME);
    }

    #[test]
    fn test_numeric_fields_reject_letters() {
        let mut form = GenerateForm::default();
        form.focus_next();
        form.pop();
        form.push('a');
        form.push('5');
        assert_eq!(form.count, "5");
        form.focus_previous();
        form.push('a');
        assert_eq!(form.name, "a");
    }
}
