//! Unit tests for the indicator snapshot engine

use chrono::DateTime;
use pulsescan::indicators::{chart_series, compute_snapshot, IndicatorError, MIN_LOOKBACK};
use pulsescan::models::{Candle, CandleSeries, Timeframe};

fn series_from_closes(closes: &[f64], volume: f64) -> CandleSeries {
    let candles = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + 0.05,
                close - 0.05,
                close,
                volume,
                DateTime::from_timestamp(60 * i as i64, 0).unwrap(),
            )
        })
        .collect();
    CandleSeries::new("BTCUSDT", Timeframe::M1, candles).unwrap()
}

#[test]
fn test_undersized_series_yields_insufficient_data() {
    for len in [0, 1, MIN_LOOKBACK - 1] {
        let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64 * 0.1).collect();
        let series = series_from_closes(&closes, 1000.0);
        assert_eq!(
            compute_snapshot(&series),
            Err(IndicatorError::InsufficientData {
                required: MIN_LOOKBACK,
                actual: len,
            })
        );
    }
}

#[test]
fn test_constant_price_series_properties() {
    let closes = vec![250.0; 30];
    let series = series_from_closes(&closes, 1000.0);
    let snapshot = compute_snapshot(&series).unwrap();

    assert!((snapshot.fast_ema - 250.0).abs() < 1e-12);
    assert!((snapshot.slow_ema - 250.0).abs() < 1e-12);
    assert!((snapshot.rsi - 50.0).abs() < 1e-9);
    assert!(!snapshot.volume_spike);
    assert!((snapshot.support - 249.95).abs() < 1e-9);
    assert!((snapshot.resistance - 250.05).abs() < 1e-9);
    assert!((snapshot.close - 250.0).abs() < 1e-12);
}

#[test]
fn test_snapshot_is_deterministic() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
    let series = series_from_closes(&closes, 500.0);
    let first = compute_snapshot(&series).unwrap();
    let second = compute_snapshot(&series).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_chart_series_aligns_with_candles() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 0.2).collect();
    let series = series_from_closes(&closes, 500.0);
    let chart = chart_series(&series, Some(106.3));

    assert_eq!(chart.closes.len(), 30);
    assert_eq!(chart.fast_ema.len(), 30);
    assert_eq!(chart.slow_ema.len(), 30);
    assert!(chart.fast_ema[..8].iter().all(|v| v.is_none()));
    assert!(chart.fast_ema[8..].iter().all(|v| v.is_some()));
    assert!(chart.slow_ema[..20].iter().all(|v| v.is_none()));
    assert!(chart.slow_ema[20..].iter().all(|v| v.is_some()));
    assert_eq!(chart.take_profit, Some(106.3));
}
