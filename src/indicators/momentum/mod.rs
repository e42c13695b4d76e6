pub mod rsi;

pub use rsi::{latest_rsi, rsi_series};
