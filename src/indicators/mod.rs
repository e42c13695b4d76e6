//! Indicator engine: derives the per-cycle snapshot from a candle series.
//!
//! Everything here is pure and stateless; each scan recomputes from the
//! full series. Warm-up positions propagate as `None`, never zero, so a
//! legitimate zero value can never be confused with absent data.

pub mod error;
pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volume;

pub use error::IndicatorError;

use crate::models::{CandleSeries, ChartSeries, IndicatorSnapshot};

pub const FAST_EMA_PERIOD: usize = 9;
pub const SLOW_EMA_PERIOD: usize = 21;
pub const RSI_PERIOD: usize = 14;
pub const STRUCTURE_WINDOW: usize = 20;
pub const VOLUME_WINDOW: usize = 20;
pub const VOLUME_SPIKE_MULTIPLIER: f64 = 1.5;

/// Minimum series length before any snapshot is produced. The slow EMA has
/// the longest warm-up (21); it also covers RSI (15) and the 20-candle
/// structure and volume windows.
pub const MIN_LOOKBACK: usize = SLOW_EMA_PERIOD;

/// Compute the latest indicator snapshot for a series.
///
/// Fails with `InsufficientData` below `MIN_LOOKBACK`; the caller must not
/// proceed to classification in that case.
pub fn compute_snapshot(series: &CandleSeries) -> Result<IndicatorSnapshot, IndicatorError> {
    let insufficient = IndicatorError::InsufficientData {
        required: MIN_LOOKBACK,
        actual: series.len(),
    };
    if series.len() < MIN_LOOKBACK {
        return Err(insufficient);
    }

    let closes = series.closes();
    let fast_ema = trend::latest_ema(&closes, FAST_EMA_PERIOD).ok_or(insufficient)?;
    let slow_ema = trend::latest_ema(&closes, SLOW_EMA_PERIOD).ok_or(insufficient)?;
    let rsi = momentum::latest_rsi(&closes, RSI_PERIOD).ok_or(insufficient)?;
    let levels = structure::rolling_levels(&series.lows(), &series.highs(), STRUCTURE_WINDOW)
        .ok_or(insufficient)?;
    let volume_spike =
        volume::volume_spike(&series.volumes(), VOLUME_WINDOW, VOLUME_SPIKE_MULTIPLIER)
            .ok_or(insufficient)?;

    let latest = series.latest().ok_or(insufficient)?;

    Ok(IndicatorSnapshot {
        fast_ema,
        slow_ema,
        rsi,
        support: levels.support,
        resistance: levels.resistance,
        volume_spike,
        close: latest.close,
        volume: latest.volume,
    })
}

/// Plotted series for the presentation layer: closes plus both EMA series
/// over the short-timeframe window, and the computed take-profit level.
pub fn chart_series(series: &CandleSeries, take_profit: Option<f64>) -> ChartSeries {
    let closes = series.closes();
    let fast_ema = trend::ema_series(&closes, FAST_EMA_PERIOD);
    let slow_ema = trend::ema_series(&closes, SLOW_EMA_PERIOD);
    ChartSeries {
        closes,
        fast_ema,
        slow_ema,
        take_profit,
    }
}
