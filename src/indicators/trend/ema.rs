//! EMA (Exponential Moving Average) indicator

/// Calculate the EMA series for a value sequence.
///
/// The recursion is seeded with the simple average of the first `period`
/// values; positions before the seed index are `None`, never zero.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let alpha = 2.0 / (period as f64 + 1.0);

    out[period - 1] = Some(seed);
    let mut prev = seed;
    for i in period..values.len() {
        prev = alpha * values[i] + (1.0 - alpha) * prev;
        out[i] = Some(prev);
    }
    out
}

/// EMA at the latest position, `None` when the series is too short.
pub fn latest_ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied().flatten()
}
