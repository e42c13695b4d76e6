//! Integration tests for the HTTP presentation surface


use serde_json::Value;

use test_utils::{sample_cycle, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "pulsescan-signal-scanner");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("scan_cycles_total"),
        "Expected scan_cycles_total metric"
    );
}

#[tokio::test]
async fn signals_endpoint_is_empty_before_first_cycle() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/signals").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn signals_endpoint_serves_published_cycle_including_waiting_rows() {
    let app = TestApiServer::new().await;
    app.publish(sample_cycle()).await;

    let response = app.server.get("/api/signals").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["symbol"], "BTC");
    assert_eq!(rows[0]["valid"], true);
    assert_eq!(rows[1]["symbol"], "ETH");
    assert_eq!(rows[1]["valid"], false);
    assert_eq!(rows[1]["label"], "Waiting");
}

#[tokio::test]
async fn signal_lookup_is_case_insensitive() {
    let app = TestApiServer::new().await;
    app.publish(sample_cycle()).await;

    let response = app.server.get("/api/signals/btc").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "BTC");
    assert_eq!(body["score"], 0);
}

#[tokio::test]
async fn unknown_symbol_returns_not_found() {
    let app = TestApiServer::new().await;
    app.publish(sample_cycle()).await;

    let response = app.server.get("/api/signals/XRP").await;
    assert_eq!(response.status_code(), 404);
}
