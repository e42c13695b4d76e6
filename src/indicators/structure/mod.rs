pub mod support_resistance;

pub use support_resistance::{rolling_levels, Levels};
