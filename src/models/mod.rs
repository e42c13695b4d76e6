//! Shared data models spanning the scanner layers.

pub mod candle;
pub mod signal;

pub use candle::{Candle, CandleSeries, SeriesError, Timeframe};
pub use signal::{
    ChartSeries, Classification, IndicatorSnapshot, SignalLabel, SignalResult, TrendDirection,
};
