//! End-to-end scan cycle against a mocked market-data endpoint

use pulsescan::config::Config;
use pulsescan::models::SignalLabel;
use pulsescan::scan::ScanOrchestrator;
use pulsescan::services::market_data::CandleSource;
use pulsescan::services::BinanceCandleSource;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kline_row(i: usize) -> Value {
    let open_time = 60_000u64 * i as u64;
    let price = 100.0 + i as f64 * 0.1;
    json!([
        open_time,
        format!("{:.4}", price),
        format!("{:.4}", price + 0.3),
        format!("{:.4}", price - 0.2),
        format!("{:.4}", price + 0.1),
        "1000.0000",
        open_time + 59_999,
        "100000.0",
        100,
        "500.0",
        "50000.0",
        "0"
    ])
}

fn klines_body(count: usize) -> Value {
    Value::Array((0..count).map(kline_row).collect())
}

async fn mock_symbol_candles(server: &MockServer, pair: &str, count: usize) {
    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .and(query_param("symbol", pair))
        .respond_with(ResponseTemplate::new(200).set_body_json(klines_body(count)))
        .mount(server)
        .await;
}

fn orchestrator_for(server: &MockServer, symbols: &[&str]) -> ScanOrchestrator {
    let config = Arc::new(Config {
        symbols: symbols.iter().map(|s| s.to_string()).collect(),
        binance_base_url: server.uri(),
        ..Config::default()
    });
    let source: Arc<dyn CandleSource> = Arc::new(
        BinanceCandleSource::with_client(&server.uri(), reqwest::Client::new())
            .expect("adapter construction"),
    );
    ScanOrchestrator::new(config, source)
}

#[tokio::test]
async fn cycle_produces_valid_results_with_live_price() {
    let server = MockServer::start().await;
    mock_symbol_candles(&server, "AAAUSDT", 30).await;
    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/price"))
        .and(query_param("symbol", "AAAUSDT"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"symbol": "AAAUSDT", "price": "111.5"})),
        )
        .mount(&server)
        .await;

    let results = orchestrator_for(&server, &["AAA"]).run_cycle().await;
    assert_eq!(results.len(), 1);

    let result = &results[0];
    assert!(result.valid);
    assert_eq!(result.symbol, "AAA");
    assert!((result.price - 111.5).abs() < 1e-9);
    assert!(result.snapshot.is_some());
    assert!(result.entry.is_some());
    assert!(result.chart.is_some());
}

#[tokio::test]
async fn failing_symbol_becomes_waiting_while_others_survive() {
    let server = MockServer::start().await;
    mock_symbol_candles(&server, "AAAUSDT", 30).await;
    // BBBUSDT has no kline mock mounted: every attempt 404s and the retry
    // budget runs out.

    let results = orchestrator_for(&server, &["AAA", "BBB"]).run_cycle().await;
    assert_eq!(results.len(), 2);

    let valid = results.iter().find(|r| r.symbol == "AAA").unwrap();
    assert!(valid.valid);

    let waiting = results.iter().find(|r| r.symbol == "BBB").unwrap();
    assert!(!waiting.valid);
    assert_eq!(waiting.label, SignalLabel::Waiting);
    assert!(waiting.snapshot.is_none());
}

#[tokio::test]
async fn missing_live_price_falls_back_to_last_close() {
    let server = MockServer::start().await;
    mock_symbol_candles(&server, "AAAUSDT", 30).await;
    // No ticker mock: the price annotation falls back to the latest close.

    let results = orchestrator_for(&server, &["AAA"]).run_cycle().await;
    let result = &results[0];
    assert!(result.valid);
    let close = result.snapshot.as_ref().unwrap().close;
    assert!((result.price - close).abs() < 1e-9);
}
