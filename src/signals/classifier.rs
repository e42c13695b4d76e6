//! Ordered rule set turning indicator values into a discrete signal

use serde::{Deserialize, Serialize};

use crate::indicators::trend::latest_ema;
use crate::indicators::{FAST_EMA_PERIOD, SLOW_EMA_PERIOD};
use crate::models::{CandleSeries, Classification, IndicatorSnapshot, SignalLabel, TrendDirection};

pub const OVERSOLD_THRESHOLD: f64 = 30.0;
pub const OVERBOUGHT_THRESHOLD: f64 = 70.0;

/// Fixed absolute TP/SL offsets in price units. These deliberately do not
/// scale with instrument price magnitude; callers needing per-instrument
/// scaling override them via configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceOffsets {
    pub take_profit: f64,
    pub stop_loss: f64,
}

impl Default for PriceOffsets {
    fn default() -> Self {
        Self {
            take_profit: 0.5,
            stop_loss: 0.3,
        }
    }
}

/// Trend direction from a fast/slow EMA pair.
pub fn trend_direction(fast_ema: f64, slow_ema: f64) -> TrendDirection {
    if fast_ema > slow_ema {
        TrendDirection::Bullish
    } else if fast_ema < slow_ema {
        TrendDirection::Bearish
    } else {
        TrendDirection::Flat
    }
}

/// Long-timeframe trend from a candle series, `None` when the series has
/// not reached the slow EMA warm-up.
pub fn trend_from_series(series: &CandleSeries) -> Option<TrendDirection> {
    let closes = series.closes();
    let fast = latest_ema(&closes, FAST_EMA_PERIOD)?;
    let slow = latest_ema(&closes, SLOW_EMA_PERIOD)?;
    Some(trend_direction(fast, slow))
}

/// Apply the ordered rule set. First match wins; the confirmed rules are
/// mutually exclusive since the oscillator cannot be below 30 and above 70
/// at once.
pub fn classify(
    snapshot: &IndicatorSnapshot,
    long_trend: TrendDirection,
    offsets: &PriceOffsets,
) -> Classification {
    let ema_bullish = snapshot.fast_ema > snapshot.slow_ema;
    let ema_bearish = snapshot.fast_ema < snapshot.slow_ema;

    let (label, score) = if snapshot.rsi < OVERSOLD_THRESHOLD
        && ema_bullish
        && snapshot.volume_spike
        && long_trend == TrendDirection::Bullish
    {
        (SignalLabel::ConfirmedLong, 4)
    } else if snapshot.rsi > OVERBOUGHT_THRESHOLD
        && ema_bearish
        && snapshot.volume_spike
        && long_trend == TrendDirection::Bearish
    {
        (SignalLabel::ConfirmedShort, 4)
    } else if snapshot.volume_spike {
        (SignalLabel::VolumeSpike, 1)
    } else {
        (SignalLabel::Neutral, 0)
    };

    Classification {
        label,
        score,
        entry: Some(snapshot.close),
        stop_loss: Some(snapshot.close - offsets.stop_loss),
        take_profit: Some(snapshot.close + offsets.take_profit),
    }
}
