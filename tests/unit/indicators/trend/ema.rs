//! Unit tests for the EMA indicator

use pulsescan::indicators::trend::{ema_series, latest_ema};

#[test]
fn test_ema_insufficient_data() {
    let values: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    assert!(latest_ema(&values, 20).is_none());
    assert!(ema_series(&values, 20).iter().all(|v| v.is_none()));
}

#[test]
fn test_ema_warmup_positions_are_undefined() {
    let values: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let series = ema_series(&values, 9);
    assert!(series[..8].iter().all(|v| v.is_none()));
    assert!(series[8..].iter().all(|v| v.is_some()));
}

#[test]
fn test_ema_seeded_by_simple_average() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let series = ema_series(&values, 3);
    // Seed = mean(1, 2, 3), then alpha = 0.5 recursion.
    assert_eq!(series[2], Some(2.0));
    assert_eq!(series[3], Some(3.0));
    assert_eq!(series[4], Some(4.0));
}

#[test]
fn test_ema_constant_series_equals_constant() {
    let values = vec![42.5; 40];
    let series = ema_series(&values, 9);
    for value in series.iter().flatten() {
        assert!((value - 42.5).abs() < 1e-12);
    }
    let latest = latest_ema(&values, 21).unwrap();
    assert!((latest - 42.5).abs() < 1e-9);
}
