// File: crates/thermo-core/src/types.rs
// Summary: Shared constants and the chart configuration (sizes, paddings, offsets).

use crate::color::{BarFill, GradientSpec};
use crate::error::{ChartError, Result};

/// Plot width in chart units.
pub const WIDTH: f64 = 500.0;
/// Plot height in chart units.
pub const HEIGHT: f64 = 300.0;
/// Margin around the plot area; the view box extends this far on every side.
pub const PADDING: f64 = 50.0;
/// Months per series.
pub const MONTHS: usize = 12;
/// Vertical domain padding added below the minimum and above the maximum.
pub const DOMAIN_PAD: f64 = 1.0;

pub const MONTH_LABELS: [&str; MONTHS] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];

/// Legend geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    pub swatch_width: f64,
    pub swatch_height: f64,
    /// Vertical distance between rows.
    pub row_offset: f64,
    /// Horizontal inset from the right edge, in multiples of the padding.
    pub inset_factor: f64,
    /// Label offset from the swatch's left edge.
    pub label_offset: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self { swatch_width: 65.0, swatch_height: 20.0, row_offset: 20.0, inset_factor: 1.2, label_offset: 15.0 }
    }
}

/// Everything a `ChartBuilder` needs besides the data.
/// Contract: width, height > 0; padding >= 0; 0 <= inner_padding < 1; domain_pad >= 0.
/// `ChartBuilder::build` rejects anything else with `ChartError::InvalidConfig`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Fraction of each month band left empty between bars.
    pub inner_padding: f64,
    pub domain_pad: f64,
    pub gradient: GradientSpec,
    pub bar_fill: BarFill,
    /// Tooltip offset from the pointer, in screen pixels.
    pub tooltip_offset: (f64, f64),
    /// Number of ticks requested for the value axis.
    pub value_ticks: usize,
    pub legend: LegendLayout,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            inner_padding: 0.1,
            domain_pad: DOMAIN_PAD,
            gradient: GradientSpec::default(),
            bar_fill: BarFill::SharedGradient,
            tooltip_offset: (10.0, 10.0),
            value_ticks: 10,
            legend: LegendLayout::default(),
        }
    }
}

impl ChartConfig {
    /// Check the numeric fields against the contract on the struct.
    pub fn validate(&self) -> Result<()> {
        let bad = |what: String| Err(ChartError::InvalidConfig(what));
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return bad(format!("plot size must be positive, got {}x{}", self.width, self.height));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return bad(format!("padding must be >= 0, got {}", self.padding));
        }
        if !(0.0..1.0).contains(&self.inner_padding) {
            return bad(format!("inner_padding must be in [0, 1), got {}", self.inner_padding));
        }
        if !(self.domain_pad.is_finite() && self.domain_pad >= 0.0) {
            return bad(format!("domain_pad must be >= 0, got {}", self.domain_pad));
        }
        Ok(())
    }
}
