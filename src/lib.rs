//! Pulsescan - multi-timeframe market signal scanner
//!
//! Periodically fetches OHLCV candles for a configured symbol universe,
//! derives EMA/RSI/structure/volume indicators on a short timeframe,
//! confirms against the long-timeframe trend and classifies each symbol
//! into a discrete trade signal. Results are published per cycle and
//! served over HTTP; they are never persisted.

pub mod config;
pub mod http;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod scan;
pub mod services;
pub mod signals;
