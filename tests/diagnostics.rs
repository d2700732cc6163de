//! End-to-end tests for the diagnostic report over a real socket.

use axum::http::StatusCode;
use chrono::DateTime;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_negotiation_matrix() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let cases = [
        ("application/json", "application/json"),
        ("text/plain", "text/plain"),
        // Equal weights fall back to plain text
        ("application/json, text/plain", "text/plain"),
        ("text/plain;q=0.5, application/json;q=0.4", "text/plain"),
        ("text/plain;q=0.4, application/json;q=0.5", "application/json"),
        // Wildcards stand in for their exact forms
        ("application/*;q=0.9", "application/json"),
        ("text/*, application/json;q=0.2", "text/plain"),
        // A full wildcard never selects JSON
        ("*/*", "text/plain"),
        ("application/json;q=0", "text/plain"),
        // Malformed weights drop the entry
        ("application/json;q=abc, text/plain;q=0.1", "text/plain"),
        // A bare trailing separator is not a parameter
        ("application/json;", "application/json"),
    ];

    for (accept, expected) in cases {
        let res = client
            .get(format!("http://{}/", addr))
            .header("Accept", accept)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get("content-type").unwrap(),
            expected,
            "Accept {:?} should negotiate {}",
            accept,
            expected
        );
    }
}

#[tokio::test]
async fn test_missing_accept_defaults_to_plain() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get("content-type").unwrap(), "text/plain");
}

#[tokio::test]
async fn test_body_is_json_regardless_of_negotiation() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .header("Accept", "text/plain")
        .send()
        .await
        .unwrap();

    assert_eq!(res.headers().get("content-type").unwrap(), "text/plain");

    let body: Value = res.json().await.unwrap();
    assert!(body.get("me").is_some(), "Body should be the JSON report");
    assert!(body.get("headers").is_some());
}

#[tokio::test]
async fn test_multiple_accept_lines_are_combined() {
    let addr = common::spawn_server().await;
    let client = common::client();

    // Two separate Accept lines, weighted toward JSON
    let res = client
        .get(format!("http://{}/", addr))
        .header("Accept", "text/plain;q=0.1")
        .header("Accept", "application/json;q=0.9")
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_report_identity_and_peer() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["me"], common::TEST_HOSTNAME);
    assert_eq!(body["you"], "127.0.0.1");
}

#[tokio::test]
async fn test_request_line_excludes_query() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/lookup?delay=1", addr))
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["request"], "GET /lookup HTTP/1.1");
}

#[tokio::test]
async fn test_timestamp_is_rfc3339() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    let time = body["time"].as_str().expect("time should be a string");
    DateTime::parse_from_rfc3339(time).expect("time should parse as RFC 3339");
}

#[tokio::test]
async fn test_repeated_headers_collect_into_array() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .header("x-probe", "one")
        .header("x-probe", "two")
        .header("x-single", "only")
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    let headers = &body["headers"];

    assert_eq!(headers["x-probe"], serde_json::json!(["one", "two"]));
    assert_eq!(headers["x-single"], "only");
}

#[tokio::test]
async fn test_trace_and_vary_headers() {
    let addr = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers().get("x-trace").unwrap(),
        common::TEST_HOSTNAME,
        "X-Trace should carry the server hostname"
    );
    assert_eq!(res.headers().get("vary").unwrap(), "Accept");
}
