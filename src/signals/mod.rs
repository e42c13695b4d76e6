//! Signal classification interfaces.

pub mod classifier;

pub use classifier::{
    classify, trend_direction, trend_from_series, PriceOffsets, OVERBOUGHT_THRESHOLD,
    OVERSOLD_THRESHOLD,
};
