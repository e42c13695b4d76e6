//! Binance REST market data adapter.
//!
//! Klines come back as positional JSON arrays mixing numbers (open time)
//! and strings (prices, volume); everything is normalized into numeric
//! `Candle`s before leaving this module. Transient failures retry with a
//! brief exponential backoff and never crash a scan cycle.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::models::{Candle, CandleSeries, Timeframe};
use crate::services::market_data::{CandleSource, MarketDataError};

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Provider-side cap on the klines `limit` parameter.
pub const MAX_CANDLE_LIMIT: usize = 500;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_MIN_DELAY: Duration = Duration::from_millis(250);
const RETRY_MAX_DELAY: Duration = Duration::from_secs(2);
const RETRY_ATTEMPTS: usize = 2; // retries after the first attempt, 3 total

pub struct BinanceCandleSource {
    client: Client,
    base_url: Url,
}

impl BinanceCandleSource {
    pub fn new() -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Self::with_client(DEFAULT_BASE_URL, client)
    }

    /// Base URL and client are injectable so tests can point the adapter
    /// at a mock server.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, MarketDataError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MarketDataError::Malformed(format!("base url: {e}")))?;
        Ok(Self { client, base_url })
    }

    fn retry_policy() -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(RETRY_MIN_DELAY)
            .with_max_delay(RETRY_MAX_DELAY)
            .with_max_times(RETRY_ATTEMPTS)
    }

    async fn fetch_klines_once(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<CandleSeries, MarketDataError> {
        let mut url = self
            .base_url
            .join("/api/v3/klines")
            .map_err(|e| MarketDataError::Malformed(format!("klines url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("symbol", symbol)
            .append_pair("interval", timeframe.token())
            .append_pair("limit", &count.to_string());

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(MarketDataError::Status {
                status: response.status().as_u16(),
                endpoint: url.path().to_string(),
            });
        }

        let rows: Vec<Vec<Value>> = response
            .json()
            .await
            .map_err(|e| MarketDataError::Malformed(format!("klines body: {e}")))?;

        let mut candles = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let candle = parse_kline(row)
                .ok_or_else(|| MarketDataError::Malformed(format!("kline row {index}")))?;
            candles.push(candle);
        }

        if candles.len() < count {
            return Err(MarketDataError::ShortResponse {
                got: candles.len(),
                requested: count,
            });
        }

        Ok(CandleSeries::new(symbol, timeframe, candles)?)
    }

    async fn fetch_price_once(&self, symbol: &str) -> Result<f64, MarketDataError> {
        let mut url = self
            .base_url
            .join("/api/v3/ticker/price")
            .map_err(|e| MarketDataError::Malformed(format!("ticker url: {e}")))?;
        url.query_pairs_mut().append_pair("symbol", symbol);

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(MarketDataError::Status {
                status: response.status().as_u16(),
                endpoint: url.path().to_string(),
            });
        }

        let ticker: TickerPrice = response
            .json()
            .await
            .map_err(|e| MarketDataError::Malformed(format!("ticker body: {e}")))?;
        ticker
            .price
            .parse()
            .map_err(|e| MarketDataError::Malformed(format!("ticker price: {e}")))
    }
}

#[async_trait::async_trait]
impl CandleSource for BinanceCandleSource {
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<CandleSeries, MarketDataError> {
        let count = count.clamp(1, MAX_CANDLE_LIMIT);
        let series = (|| self.fetch_klines_once(symbol, timeframe, count))
            .retry(Self::retry_policy())
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(
                    symbol,
                    timeframe = %timeframe,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "retrying candle fetch"
                );
            })
            .await?;

        debug!(
            symbol,
            timeframe = %timeframe,
            count = series.len(),
            "fetched candle series"
        );
        Ok(series)
    }

    async fn latest_price(&self, symbol: &str) -> Result<f64, MarketDataError> {
        (|| self.fetch_price_once(symbol))
            .retry(Self::retry_policy())
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(
                    symbol,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "retrying price fetch"
                );
            })
            .await
    }
}

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: String,
}

/// Positional kline layout: open time, open, high, low, close, volume, ...
/// Numeric fields arrive as strings; both encodings are accepted.
fn parse_kline(row: &[Value]) -> Option<Candle> {
    let open_time = DateTime::from_timestamp_millis(row.first()?.as_i64()?)?;
    let open = field_f64(row.get(1)?)?;
    let high = field_f64(row.get(2)?)?;
    let low = field_f64(row.get(3)?)?;
    let close = field_f64(row.get(4)?)?;
    let volume = field_f64(row.get(5)?)?;
    Some(Candle::new(open, high, low, close, volume, open_time))
}

fn field_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}
