use httpmock::prelude::*;
use serde_json::json;

use crate::error::ApiError;
use crate::tests::common::{
    client_for, sample_query, TEST_BASE_PATH, TEST_SALES_PATH, TEST_TOKEN_PATH, TEST_TRANS_PATH,
};

async fn mock_token(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path(TEST_TOKEN_PATH);
            then.status(200).json_body(json!({"TKN_INFO": "fresh-token"}));
        })
        .await
}

#[tokio::test]
async fn sales_ledger_sends_bearer_token_and_query_body() {
    let server = MockServer::start_async().await;
    let token_mock = mock_token(&server).await;
    let business_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(TEST_SALES_PATH)
                .header("authorization", "Bearer fresh-token")
                .json_body(json!({
                    "INQ_REQUST_YMD": "20251120",
                    "PGE_NO": "1",
                    "WHMK_CD": "210001",
                    "WHSL_CPR_CD": "21000102"
                }));
            then.status(200)
                .json_body(json!({"RESULT": "OK", "DATA": [{"ROW": 1}]}));
        })
        .await;

    let client = client_for(&server.url(TEST_BASE_PATH));
    let body = client.sales_ledger(&sample_query()).await.unwrap();

    assert_eq!(body["RESULT"], "OK");
    assert_eq!(token_mock.hits_async().await, 1);
    assert_eq!(business_mock.hits_async().await, 1);
}

#[tokio::test]
async fn transaction_info_targets_its_own_path() {
    let server = MockServer::start_async().await;
    mock_token(&server).await;
    let business_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(TEST_TRANS_PATH)
                .header("authorization", "Bearer fresh-token");
            then.status(200).json_body(json!({"DATA": []}));
        })
        .await;

    let client = client_for(&server.url(TEST_BASE_PATH));
    let body = client.transaction_info(&sample_query()).await.unwrap();

    assert_eq!(body["DATA"], json!([]));
    assert_eq!(business_mock.hits_async().await, 1);
}

#[tokio::test]
async fn failure_without_expiry_marker_is_fatal_and_not_retried() {
    let server = MockServer::start_async().await;
    let token_mock = mock_token(&server).await;
    let business_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(TEST_SALES_PATH);
            then.status(500).json_body(json!({"MESSAGE": "서버 오류"}));
        })
        .await;

    let client = client_for(&server.url(TEST_BASE_PATH));
    let err = client.sales_ledger(&sample_query()).await.unwrap_err();

    match err {
        ApiError::BusinessRequest {
            operation,
            status,
            detail,
        } => {
            assert_eq!(operation, "sales ledger");
            assert_eq!(status, 500);
            assert_eq!(detail, "서버 오류");
        }
        other => panic!("expected BusinessRequest, got {other:?}"),
    }
    // one token issuance, one business call, no second attempt
    assert_eq!(token_mock.hits_async().await, 1);
    assert_eq!(business_mock.hits_async().await, 1);
}

#[tokio::test]
async fn failure_without_message_field_carries_body_excerpt() {
    let server = MockServer::start_async().await;
    mock_token(&server).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(TEST_SALES_PATH);
            then.status(502).body("bad gateway");
        })
        .await;

    let client = client_for(&server.url(TEST_BASE_PATH));
    let err = client.sales_ledger(&sample_query()).await.unwrap_err();

    match err {
        ApiError::BusinessRequest { status, detail, .. } => {
            assert_eq!(status, 502);
            assert!(detail.contains("bad gateway"), "got: {detail}");
        }
        other => panic!("expected BusinessRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn success_status_with_non_json_body_is_an_error() {
    let server = MockServer::start_async().await;
    mock_token(&server).await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(TEST_SALES_PATH);
            then.status(200).body("<html>ok</html>");
        })
        .await;

    let client = client_for(&server.url(TEST_BASE_PATH));
    let err = client.sales_ledger(&sample_query()).await.unwrap_err();

    match err {
        ApiError::BusinessRequest { status, detail, .. } => {
            assert_eq!(status, 200);
            assert!(detail.contains("not JSON"), "got: {detail}");
        }
        other => panic!("expected BusinessRequest, got {other:?}"),
    }
}
