//! External collaborators: market data providers and the alert sink.

pub mod alerts;
pub mod binance;
pub mod market_data;

pub use alerts::TelegramAlerter;
pub use binance::BinanceCandleSource;
pub use market_data::{CandleSource, MarketDataError};
