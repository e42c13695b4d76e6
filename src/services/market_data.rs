//! Candle source capability interface.
//!
//! Provider-specific adapters (endpoint shape, field naming, interval
//! encoding) implement this trait instead of duplicating the pipeline.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CandleSeries, SeriesError, Timeframe};

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("short response: got {got} candles, requested {requested}")]
    ShortResponse { got: usize, requested: usize },
    #[error(transparent)]
    InvalidSeries(#[from] SeriesError),
}

/// Fetches normalized, time-ordered candle data for one symbol/timeframe
/// pair. Transient failures are retried inside the adapter; an `Err` here
/// means the retry budget is exhausted and the caller marks the symbol
/// invalid for the cycle. No caching across calls.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetch exactly `count` candles, ascending by open time. Adapters
    /// discard partial or short responses as failures.
    async fn fetch_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<CandleSeries, MarketDataError>;

    /// Current price, fresher than the last closed candle.
    async fn latest_price(&self, symbol: &str) -> Result<f64, MarketDataError>;
}
