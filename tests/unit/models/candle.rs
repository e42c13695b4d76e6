//! Unit tests for candle series and timeframe primitives

use chrono::DateTime;
use pulsescan::models::{Candle, CandleSeries, SeriesError, Timeframe};

fn candle_at(seconds: i64, close: f64) -> Candle {
    Candle::new(
        close,
        close + 0.1,
        close - 0.1,
        close,
        1000.0,
        DateTime::from_timestamp(seconds, 0).unwrap(),
    )
}

#[test]
fn test_timeframe_tokens_and_seconds() {
    assert_eq!(Timeframe::M1.token(), "1m");
    assert_eq!(Timeframe::M1.seconds(), 60);
    assert_eq!(Timeframe::H4.token(), "4h");
    assert_eq!(Timeframe::H4.seconds(), 14_400);
    assert_eq!(Timeframe::D1.seconds(), 86_400);
}

#[test]
fn test_timeframe_parses_from_token() {
    for tf in [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
    ] {
        assert_eq!(tf.token().parse::<Timeframe>().unwrap(), tf);
    }
    assert!("3w".parse::<Timeframe>().is_err());
}

#[test]
fn test_series_accepts_ascending_candles() {
    let candles = vec![candle_at(0, 100.0), candle_at(60, 101.0), candle_at(120, 102.0)];
    let series = CandleSeries::new("BTCUSDT", Timeframe::M1, candles).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![100.0, 101.0, 102.0]);
    assert_eq!(series.latest().unwrap().close, 102.0);
}

#[test]
fn test_series_rejects_unordered_candles() {
    let candles = vec![candle_at(60, 100.0), candle_at(0, 101.0)];
    let err = CandleSeries::new("BTCUSDT", Timeframe::M1, candles).unwrap_err();
    assert_eq!(err, SeriesError::UnorderedCandles { index: 1 });
}

#[test]
fn test_series_rejects_duplicate_open_times() {
    let candles = vec![candle_at(0, 100.0), candle_at(60, 101.0), candle_at(60, 102.0)];
    let err = CandleSeries::new("BTCUSDT", Timeframe::M1, candles).unwrap_err();
    assert_eq!(err, SeriesError::UnorderedCandles { index: 2 });
}

#[test]
fn test_empty_series_is_valid_but_empty() {
    let series = CandleSeries::new("BTCUSDT", Timeframe::M1, Vec::new()).unwrap();
    assert!(series.is_empty());
    assert!(series.latest().is_none());
}
