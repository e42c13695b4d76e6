//! Signal evaluation data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest indicator values for one (symbol, timeframe) pair.
///
/// A snapshot only exists once the series passed the lookback precondition,
/// so every field here is defined. Warm-up positions inside the per-position
/// series stay `None` and never reach a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub fast_ema: f64,
    pub slow_ema: f64,
    pub rsi: f64,
    pub support: f64,
    pub resistance: f64,
    pub volume_spike: bool,
    pub close: f64,
    pub volume: f64,
}

/// Long-timeframe trend direction from the fast/slow EMA relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Flat,
}

/// Discrete signal label, ordered by rule priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalLabel {
    ConfirmedLong,
    ConfirmedShort,
    VolumeSpike,
    Neutral,
    /// Missing or insufficient data; price levels are suppressed.
    Waiting,
}

impl SignalLabel {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SignalLabel::ConfirmedLong | SignalLabel::ConfirmedShort)
    }
}

/// Classifier output: label, confidence score and derived price levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SignalLabel,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
}

impl Classification {
    /// Placeholder for symbols missing a required indicator input. No
    /// numeric default ever substitutes for missing data.
    pub fn waiting() -> Self {
        Self {
            label: SignalLabel::Waiting,
            score: 0,
            entry: None,
            stop_loss: None,
            take_profit: None,
        }
    }
}

/// Plotted series for the presentation layer's inline chart: closes, both
/// EMA series over the short-timeframe window and the take-profit level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub closes: Vec<f64>,
    pub fast_ema: Vec<Option<f64>>,
    pub slow_ema: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
}

/// One symbol's outcome for one scan cycle. Owned by the cycle that produced
/// it and replaced wholesale on the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub symbol: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<IndicatorSnapshot>,
    pub label: SignalLabel,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_trend: Option<TrendDirection>,
    pub valid: bool,
    pub scanned_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSeries>,
}

impl SignalResult {
    /// Invalid placeholder for a symbol whose data could not be fetched or
    /// was too short this cycle.
    pub fn waiting(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: 0.0,
            snapshot: None,
            label: SignalLabel::Waiting,
            score: 0,
            entry: None,
            stop_loss: None,
            take_profit: None,
            long_trend: None,
            valid: false,
            scanned_at: Utc::now(),
            chart: None,
        }
    }

    pub fn from_classification(
        symbol: impl Into<String>,
        price: f64,
        snapshot: IndicatorSnapshot,
        classification: Classification,
        long_trend: TrendDirection,
        chart: Option<ChartSeries>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            snapshot: Some(snapshot),
            label: classification.label,
            score: classification.score,
            entry: classification.entry,
            stop_loss: classification.stop_loss,
            take_profit: classification.take_profit,
            long_trend: Some(long_trend),
            valid: true,
            scanned_at: Utc::now(),
            chart,
        }
    }
}
