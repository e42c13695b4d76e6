//! Unit tests for rolling support/resistance levels

use pulsescan::indicators::structure::rolling_levels;

#[test]
fn test_levels_insufficient_data() {
    let lows = vec![99.0; 10];
    let highs = vec![101.0; 10];
    assert!(rolling_levels(&lows, &highs, 20).is_none());
}

#[test]
fn test_levels_track_window_extremes() {
    let mut lows: Vec<f64> = (0..25).map(|i| 100.0 - i as f64 * 0.1).collect();
    let mut highs: Vec<f64> = (0..25).map(|i| 101.0 + i as f64 * 0.1).collect();
    lows[22] = 90.0;
    highs[23] = 120.0;

    let levels = rolling_levels(&lows, &highs, 20).unwrap();
    assert!((levels.support - 90.0).abs() < 1e-12);
    assert!((levels.resistance - 120.0).abs() < 1e-12);
}

#[test]
fn test_levels_ignore_extremes_outside_window() {
    let mut lows = vec![100.0; 30];
    let mut highs = vec![100.0; 30];
    // Extremes older than the trailing window must not count.
    lows[2] = 1.0;
    highs[3] = 1000.0;

    let levels = rolling_levels(&lows, &highs, 20).unwrap();
    assert!((levels.support - 100.0).abs() < 1e-12);
    assert!((levels.resistance - 100.0).abs() < 1e-12);
}
