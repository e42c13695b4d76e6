//! Volume spike detection against a rolling mean

/// True when the latest volume exceeds `multiplier` times the mean volume
/// over the trailing `window` candles (current candle included, matching a
/// trailing rolling mean). `None` before the window is populated.
pub fn volume_spike(volumes: &[f64], window: usize, multiplier: f64) -> Option<bool> {
    if window == 0 || volumes.len() < window {
        return None;
    }

    let current = *volumes.last()?;
    let mean = volumes[volumes.len() - window..].iter().sum::<f64>() / window as f64;
    if mean == 0.0 {
        return Some(false);
    }
    Some(current > multiplier * mean)
}
