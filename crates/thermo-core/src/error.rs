// File: crates/thermo-core/src/error.rs
// Summary: Construction-time error kinds; any of them aborts chart building.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A linear scale was asked to map a zero-width domain.
    #[error("degenerate scale domain: [{lo}, {hi}] has zero span")]
    DegenerateDomain { lo: f64, hi: f64 },

    /// A color string is not `#rrggbb`.
    #[error("invalid color format: {0:?} (expected #rrggbb)")]
    InvalidColorFormat(String),

    /// The three series are not twelve finite values each.
    #[error("series `{series}` {issue}")]
    DataShape { series: &'static str, issue: ShapeIssue },

    /// A `ChartConfig` field is outside its documented bounds.
    #[error("invalid chart config: {0}")]
    InvalidConfig(String),
}

/// What is wrong with the input series. `series` is `"all"` for length mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeIssue {
    #[error("has {found} values, expected {expected}")]
    Length { expected: usize, found: usize },

    #[error("lengths differ: min={min}, avg={avg}, max={max}")]
    Mismatched { min: usize, avg: usize, max: usize },

    #[error("has a non-finite value {value} at month {month}")]
    NonFinite { month: usize, value: f64 },
}

impl ChartError {
    pub fn is_data_shape(&self) -> bool {
        matches!(self, ChartError::DataShape { .. })
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
