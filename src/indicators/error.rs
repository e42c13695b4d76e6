use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IndicatorError {
    /// Series shorter than the required lookback. Not an error for the
    /// system as a whole: the caller skips classification for the cycle.
    #[error("insufficient data: {actual} candles, {required} required")]
    InsufficientData { required: usize, actual: usize },
}
