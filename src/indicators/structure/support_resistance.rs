//! Support and resistance levels from a trailing window

/// Rolling support/resistance pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    pub support: f64,
    pub resistance: f64,
}

/// Minimum low and maximum high over the trailing `window` candles
/// (current candle included). `None` before the window is populated.
pub fn rolling_levels(lows: &[f64], highs: &[f64], window: usize) -> Option<Levels> {
    if window == 0 || lows.len() < window || highs.len() < window {
        return None;
    }

    let support = lows[lows.len() - window..]
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let resistance = highs[highs.len() - window..]
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    Some(Levels {
        support,
        resistance,
    })
}
