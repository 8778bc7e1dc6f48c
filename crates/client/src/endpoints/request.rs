//! Request execution and envelope decoding shared by every endpoint.
//!
//! Responsibilities:
//! - Send a prepared `reqwest::RequestBuilder` with a per-request timeout.
//! - Map transport failures, non-2xx statuses and `success: false` envelopes
//!   onto [`ClientError`].
//! - Record request metrics when a collector is supplied.
//!
//! Does NOT handle:
//! - Retries or backoff. A failed call is reported once and the caller decides.
//!
//! Invariants:
//! - HTTP 401 always maps to [`ClientError::Unauthorized`].
//! - Server-provided error messages are passed through unmodified.

use std::time::{Duration, Instant};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::Envelope;

/// Identifies a call for logging and metrics labels.
#[derive(Debug, Clone, Copy)]
pub struct CallSite<'a> {
    pub endpoint: &'a str,
    pub method: &'a str,
}

impl<'a> CallSite<'a> {
    pub fn new(method: &'a str, endpoint: &'a str) -> Self {
        Self { endpoint, method }
    }
}

fn map_transport_error(err: reqwest::Error, timeout: Duration) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(timeout)
    } else if err.is_connect() {
        let target = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "gateway".to_string());
        ClientError::ConnectionRefused(target)
    } else {
        ClientError::HttpError(err)
    }
}

/// Extract the most useful message from an error body, falling back to the raw text.
fn error_message_from_body(body: &str, status: u16) -> (Option<String>, String) {
    match serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        Ok(envelope) => {
            let code = envelope.error.as_ref().and_then(|e| e.code.clone());
            (code, envelope.failure_message())
        }
        Err(_) if !body.trim().is_empty() => (None, body.trim().to_string()),
        Err(_) => (None, format!("HTTP {status}")),
    }
}

/// Send a request and return the status and body of a 2xx response.
async fn send(
    builder: RequestBuilder,
    site: CallSite<'_>,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<(u16, String)> {
    if let Some(m) = metrics {
        m.record_request(site.endpoint, site.method);
    }
    let start = Instant::now();

    let outcome = async {
        let response = builder
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(e, timeout))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, timeout))?;
        Ok::<_, ClientError>((status, body))
    }
    .await;

    let (status, body) = match outcome {
        Ok(pair) => pair,
        Err(err) => {
            if let Some(m) = metrics {
                m.record_request_duration(site.endpoint, site.method, start.elapsed(), None);
                m.record_client_error(site.endpoint, site.method, &err);
            }
            debug!(endpoint = site.endpoint, method = site.method, error = %err, "Request failed");
            return Err(err);
        }
    };

    if let Some(m) = metrics {
        m.record_request_duration(site.endpoint, site.method, start.elapsed(), Some(status));
    }
    debug!(
        endpoint = site.endpoint,
        method = site.method,
        status,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    if (200..300).contains(&status) {
        return Ok((status, body));
    }

    let (code, message) = error_message_from_body(&body, status);
    let err = if status == 401 {
        ClientError::Unauthorized(message)
    } else {
        ClientError::Api {
            status,
            code,
            message,
        }
    };
    if let Some(m) = metrics {
        m.record_client_error(site.endpoint, site.method, &err);
    }
    Err(err)
}

fn decode<T: DeserializeOwned>(body: &str, site: CallSite<'_>) -> Result<Envelope<T>> {
    serde_json::from_str(body).map_err(|e| {
        ClientError::InvalidResponse(format!(
            "failed to decode {} {} response: {e}",
            site.method, site.endpoint
        ))
    })
}

/// Send a request whose envelope carries a payload and return that payload.
pub async fn request_data<T: DeserializeOwned>(
    builder: RequestBuilder,
    site: CallSite<'_>,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let (status, body) = send(builder, site, timeout, metrics).await?;
    let result = decode::<T>(&body, site).and_then(|env| env.into_data(status));
    if let (Err(err), Some(m)) = (&result, metrics) {
        m.record_client_error(site.endpoint, site.method, err);
    }
    result
}

/// Send a mutation whose envelope payload is irrelevant.
pub async fn request_ack(
    builder: RequestBuilder,
    site: CallSite<'_>,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let (status, body) = send(builder, site, timeout, metrics).await?;
    if body.trim().is_empty() {
        return Ok(());
    }
    let result = decode::<serde_json::Value>(&body, site).and_then(|env| env.into_ack(status));
    if let (Err(err), Some(m)) = (&result, metrics) {
        m.record_client_error(site.endpoint, site.method, err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_envelope_body() {
        let (code, message) = error_message_from_body(
            r#"{"success":false,"error":{"code":"NOT_FOUND","message":"user not found"}}"#,
            404,
        );
        assert_eq!(code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(message, "user not found");
    }

    #[test]
    fn test_error_message_from_plain_body() {
        let (code, message) = error_message_from_body("upstream unavailable\n", 502);
        assert!(code.is_none());
        assert_eq!(message, "upstream unavailable");
    }

    #[test]
    fn test_error_message_from_empty_body() {
        let (_, message) = error_message_from_body("", 503);
        assert_eq!(message, "HTTP 503");
    }
}
