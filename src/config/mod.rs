//! Environment-driven configuration surface
//!
//! Everything has a sensible default so the scanner runs with no
//! environment at all; `.env` files are honored via dotenvy in main.

use std::env;
use std::str::FromStr;

use crate::models::Timeframe;
use crate::signals::PriceOffsets;

/// Scan cadence bounds in seconds.
pub const MIN_SCAN_INTERVAL: u64 = 5;
pub const MAX_SCAN_INTERVAL: u64 = 60;

const DEFAULT_SYMBOLS: &[&str] = &[
    "BTC", "ETH", "SOL", "AVAX", "LTC", "DOGE", "ADA", "LINK", "OP",
];

pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base symbols of the scan universe (quote asset appended per request).
    pub symbols: Vec<String>,
    pub quote_asset: String,
    pub short_timeframe: Timeframe,
    pub long_timeframe: Timeframe,
    /// Candles requested per fetch; must cover the indicator lookback.
    pub candle_limit: usize,
    /// Wall-clock period between scan cycles, clamped to 5-60 s.
    pub scan_interval_seconds: u64,
    pub offsets: PriceOffsets,
    /// Upper bound on concurrently scanned symbols within a cycle.
    pub concurrency: usize,
    pub binance_base_url: String,
    pub telegram: Option<TelegramConfig>,
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            quote_asset: "USDT".to_string(),
            short_timeframe: Timeframe::M1,
            long_timeframe: Timeframe::M5,
            candle_limit: 30,
            scan_interval_seconds: 10,
            offsets: PriceOffsets::default(),
            concurrency: 4,
            binance_base_url: crate::services::binance::DEFAULT_BASE_URL.to_string(),
            telegram: None,
            http_port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let symbols = env::var("SCAN_SYMBOLS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|symbols| !symbols.is_empty())
            .unwrap_or(defaults.symbols);

        let telegram = match (
            env::var("TELEGRAM_BOT_TOKEN").ok(),
            env::var("TELEGRAM_CHAT_ID").ok(),
        ) {
            (Some(bot_token), Some(chat_id)) if !bot_token.is_empty() && !chat_id.is_empty() => {
                Some(TelegramConfig { bot_token, chat_id })
            }
            _ => None,
        };

        Self {
            symbols,
            quote_asset: env::var("QUOTE_ASSET").unwrap_or(defaults.quote_asset),
            short_timeframe: env_parse("SHORT_TIMEFRAME", defaults.short_timeframe),
            long_timeframe: env_parse("LONG_TIMEFRAME", defaults.long_timeframe),
            candle_limit: env_parse("CANDLE_LIMIT", defaults.candle_limit),
            scan_interval_seconds: env_parse("SCAN_INTERVAL_SECONDS", defaults.scan_interval_seconds)
                .clamp(MIN_SCAN_INTERVAL, MAX_SCAN_INTERVAL),
            offsets: PriceOffsets {
                take_profit: env_parse("PULSESCAN_TP_OFFSET", defaults.offsets.take_profit),
                stop_loss: env_parse("PULSESCAN_SL_OFFSET", defaults.offsets.stop_loss),
            },
            concurrency: env_parse("SCAN_CONCURRENCY", defaults.concurrency).max(1),
            binance_base_url: env::var("BINANCE_BASE_URL").unwrap_or(defaults.binance_base_url),
            telegram,
            http_port: env_parse("HTTP_PORT", defaults.http_port),
        }
    }

    /// Exchange trading pair for a base symbol, e.g. BTC -> BTCUSDT.
    pub fn pair(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.quote_asset)
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
