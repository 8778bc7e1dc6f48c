//! Common types shared across admin API models.
//!
//! This module contains the response envelope and the pagination wrapper. It
//! does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Structured error detail carried by a failed envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Response envelope wrapping every admin API payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<ApiErrorBody>,
}

impl<T> Envelope<T> {
    /// Best available failure message, preferring the structured error.
    pub fn failure_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .or_else(|| self.message.clone())
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "request failed".to_string())
    }

    fn check(&self, status: u16) -> Result<()> {
        if self.success {
            return Ok(());
        }
        Err(ClientError::Api {
            status,
            code: self.error.as_ref().and_then(|e| e.code.clone()),
            message: self.failure_message(),
        })
    }

    /// Unwrap the payload, failing on `success: false` or a missing `data` field.
    pub fn into_data(self, status: u16) -> Result<T> {
        self.check(status)?;
        self.data.ok_or_else(|| {
            ClientError::InvalidResponse("successful response carried no data".to_string())
        })
    }

    /// Accept a successful envelope whose payload is irrelevant.
    pub fn into_ack(self, status: u16) -> Result<()> {
        self.check(status)
    }
}

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub total_pages: u64,
}

fn first_page() -> u64 {
    1
}

impl<T> ListPage<T> {
    /// An empty first page.
    pub fn empty(page_size: u64) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size,
            total_pages: 0,
        }
    }

    /// Recompute `total_pages` from `total` and `page_size`.
    pub fn recompute_pages(&mut self) {
        self.total_pages = if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        };
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_yields_data() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(env.into_data(200).unwrap(), 7);
    }

    #[test]
    fn test_envelope_failure_prefers_error_message() {
        let env: Envelope<u32> = serde_json::from_str(
            r#"{"success":false,"message":"generic","error":{"code":"E42","message":"quota exceeded"}}"#,
        )
        .unwrap();
        match env.into_data(200) {
            Err(ClientError::Api {
                status,
                code,
                message,
            }) => {
                assert_eq!(status, 200);
                assert_eq!(code.as_deref(), Some("E42"));
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_missing_data_is_invalid_response() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(
            env.into_data(200),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_envelope_ack_ignores_data() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"banned"}"#).unwrap();
        assert!(env.into_ack(200).is_ok());
    }

    #[test]
    fn test_list_page_defaults_and_pages() {
        let mut page: ListPage<u32> =
            serde_json::from_str(r#"{"items":[1,2],"total":41,"page_size":20}"#).unwrap();
        assert_eq!(page.page, 1);
        page.recompute_pages();
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next());
    }
}
