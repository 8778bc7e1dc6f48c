//! Property-based tests for envelope decoding and pagination.
//!
//! This module uses proptest to verify:
//! - A failed envelope always becomes `ClientError::Api` carrying the server's message
//! - A successful envelope yields its payload unchanged
//! - `ListPage` page counts agree with `ceil(total / page_size)`
//!
//! # Test Coverage
//! - `error.message` wins over `message`; blank messages fall back
//! - Status codes pass through to the error
//! - `has_next` holds exactly when the current page is before the last

use gateway_client::ClientError;
use gateway_client::models::{Envelope, ListPage};
use proptest::prelude::*;
use serde_json::json;

fn message_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,40}".prop_filter("non-blank", |s| !s.trim().is_empty())
}

proptest! {
    #[test]
    fn failed_envelope_surfaces_structured_message(
        message in message_strategy(),
        fallback in message_strategy(),
        status in 200u16..600,
    ) {
        let body = json!({
            "success": false,
            "message": fallback,
            "error": { "code": "E_TEST", "message": message },
        });
        let envelope: Envelope<u32> = serde_json::from_value(body).unwrap();

        match envelope.into_data(status) {
            Err(ClientError::Api { status: s, code, message: m }) => {
                prop_assert_eq!(s, status);
                prop_assert_eq!(code.as_deref(), Some("E_TEST"));
                prop_assert_eq!(m, message);
            }
            other => prop_assert!(false, "expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn failed_envelope_without_error_uses_message(message in message_strategy()) {
        let envelope: Envelope<u32> =
            serde_json::from_value(json!({ "success": false, "message": message })).unwrap();
        prop_assert_eq!(envelope.failure_message(), message);
    }

    #[test]
    fn successful_envelope_yields_payload(data in any::<i64>()) {
        let envelope: Envelope<i64> =
            serde_json::from_value(json!({ "success": true, "data": data })).unwrap();
        prop_assert_eq!(envelope.into_data(200).unwrap(), data);
    }

    #[test]
    fn page_count_matches_ceiling(total in 0u64..100_000, page_size in 1u64..500, page in 1u64..400) {
        let mut list: ListPage<u8> = ListPage::empty(page_size);
        list.total = total;
        list.page = page;
        list.recompute_pages();

        prop_assert_eq!(list.total_pages, total.div_ceil(page_size));
        prop_assert!(list.total_pages * page_size >= total);
        prop_assert_eq!(list.has_next(), page < list.total_pages);
    }
}

#[test]
fn blank_messages_fall_back_to_generic_text() {
    let envelope: Envelope<u32> = serde_json::from_value(json!({
        "success": false,
        "message": "   ",
        "error": { "code": null, "message": "" },
    }))
    .unwrap();
    assert_eq!(envelope.failure_message(), "request failed");
}
