//! Common test utilities for integration tests.
//!
//! Re-exports the types every endpoint test needs and builds envelope bodies
//! the way the gateway returns them.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use gateway_client::endpoints;
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Timeout used by endpoint tests.
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Wrap a payload in a successful envelope.
#[allow(dead_code)]
pub fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "success": true, "data": data })
}

/// A failed envelope carrying an error code and message.
#[allow(dead_code)]
pub fn err_envelope(code: &str, message: &str) -> serde_json::Value {
    json!({ "success": false, "error": { "code": code, "message": message } })
}

/// A list page of `items`.
#[allow(dead_code)]
pub fn page_body(items: serde_json::Value, total: u64, page: u64, page_size: u64) -> serde_json::Value {
    let total_pages = total.div_ceil(page_size.max(1));
    ok_envelope(json!({
        "items": items,
        "total": total,
        "page": page,
        "page_size": page_size,
        "total_pages": total_pages,
    }))
}
