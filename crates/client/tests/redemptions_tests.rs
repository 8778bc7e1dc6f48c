//! Redemption code endpoint tests.

mod common;

use common::*;
use gateway_client::models::{
    GenerateCodesRequest, PurgeCodesRequest, RedemptionListParams, RedemptionStatus,
};
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_list_redemptions_with_name_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/redemptions"))
        .and(query_param("name", "launch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            json!([{"id": 1, "name": "launch", "key": "AAAA-1111", "quota": 100, "status": "unused"}]),
            1,
            1,
            20,
        )))
        .mount(&mock_server)
        .await;

    let mut params = RedemptionListParams::first_page(20);
    params.name = Some("launch".to_string());
    let page = endpoints::list_redemptions(
        &Client::new(),
        &mock_server.uri(),
        "test-token",
        &params,
        TEST_TIMEOUT,
        None,
    )
    .await
    .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].status, RedemptionStatus::Unused);
}

#[tokio::test]
async fn test_generate_returns_keys() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/redemptions"))
        .and(body_json(json!({"name": "promo", "count": 2, "quota": 500})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!(["KEY-1", "KEY-2"]))),
        )
        .mount(&mock_server)
        .await;

    let request = GenerateCodesRequest {
        name: "promo".to_string(),
        count: 2,
        quota: 500,
        expires_at: None,
    };
    let keys = endpoints::generate_redemptions(
        &Client::new(),
        &mock_server.uri(),
        "test-token",
        &request,
        TEST_TIMEOUT,
        None,
    )
    .await
    .unwrap();

    assert_eq!(keys, vec!["KEY-1".to_string(), "KEY-2".to_string()]);
}

#[tokio::test]
async fn test_purge_dry_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/redemptions/purge"))
        .and(body_json(json!({"status": "expired", "dry_run": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "affected": 12, "sample": ["winter", "spring"], "dry_run": true
        }))))
        .mount(&mock_server)
        .await;

    let result = endpoints::purge_redemptions(
        &Client::new(),
        &mock_server.uri(),
        "test-token",
        &PurgeCodesRequest {
            status: RedemptionStatus::Expired,
            dry_run: true,
        },
        TEST_TIMEOUT,
        None,
    )
    .await
    .unwrap();

    assert_eq!(result.affected, 12);
    assert!(result.dry_run);
}
