// File: crates/thermo-core/src/series.rs
// Summary: Monthly temperature series (min/avg/max) and the value range scanned across them.
// Notes:
// - The three series are validated together: same length, exactly one finite value per month.

use crate::error::{ChartError, Result, ShapeIssue};
use crate::types::MONTHS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeriesKind {
    Min,
    Avg,
    Max,
}

impl SeriesKind {
    /// Draw order: tallest series first so shorter bars paint over it.
    pub const DRAW_ORDER: [SeriesKind; 3] = [SeriesKind::Max, SeriesKind::Avg, SeriesKind::Min];

    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Min => "min",
            SeriesKind::Avg => "avg",
            SeriesKind::Max => "max",
        }
    }
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Twelve values, index 0 = January.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthSeries([f64; MONTHS]);

impl MonthSeries {
    pub const fn new(values: [f64; MONTHS]) -> Self {
        Self(values)
    }

    /// Checked constructor for slices of unknown length. NaN and infinities are rejected.
    pub fn try_from_slice(kind: SeriesKind, values: &[f64]) -> Result<Self> {
        let arr: [f64; MONTHS] = values.try_into().map_err(|_| ChartError::DataShape {
            series: kind.name(),
            issue: ShapeIssue::Length { expected: MONTHS, found: values.len() },
        })?;
        let series = Self(arr);
        series.check_finite(kind)?;
        Ok(series)
    }

    fn check_finite(&self, kind: SeriesKind) -> Result<()> {
        match self.iter().find(|(_, v)| !v.is_finite()) {
            Some((month, value)) => {
                Err(ChartError::DataShape { series: kind.name(), issue: ShapeIssue::NonFinite { month, value } })
            }
            None => Ok(()),
        }
    }

    #[inline]
    pub fn get(&self, month: usize) -> Option<f64> {
        self.0.get(month).copied()
    }

    pub fn values(&self) -> &[f64; MONTHS] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureDataset {
    min: MonthSeries,
    avg: MonthSeries,
    max: MonthSeries,
}

impl TemperatureDataset {
    pub const fn from_series(min: MonthSeries, avg: MonthSeries, max: MonthSeries) -> Self {
        Self { min, avg, max }
    }

    /// Validate and adopt three parallel series.
    pub fn try_new(min: &[f64], avg: &[f64], max: &[f64]) -> Result<Self> {
        if min.len() != avg.len() || avg.len() != max.len() {
            return Err(ChartError::DataShape {
                series: "all",
                issue: ShapeIssue::Mismatched { min: min.len(), avg: avg.len(), max: max.len() },
            });
        }
        Ok(Self {
            min: MonthSeries::try_from_slice(SeriesKind::Min, min)?,
            avg: MonthSeries::try_from_slice(SeriesKind::Avg, avg)?,
            max: MonthSeries::try_from_slice(SeriesKind::Max, max)?,
        })
    }

    /// Re-check finiteness; `from_series` takes its arrays unchecked.
    pub fn validate(&self) -> Result<()> {
        SeriesKind::DRAW_ORDER.into_iter().rev().try_for_each(|kind| self.series(kind).check_finite(kind))
    }

    pub fn series(&self, kind: SeriesKind) -> &MonthSeries {
        match kind {
            SeriesKind::Min => &self.min,
            SeriesKind::Avg => &self.avg,
            SeriesKind::Max => &self.max,
        }
    }

    /// All 36 values, min series first.
    pub fn all_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.min.values().iter().chain(self.avg.values()).chain(self.max.values()).copied()
    }

    pub fn value_range(&self) -> ValueRange {
        ValueRange::scan(self.all_values())
    }
}

/// Inclusive bounds of every value in a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub lo: f64,
    pub hi: f64,
}

impl ValueRange {
    pub fn scan(values: impl IntoIterator<Item = f64>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        Self { lo, hi }
    }

    /// Grow both ends by `pad`.
    pub fn padded(&self, pad: f64) -> Self {
        Self { lo: self.lo - pad, hi: self.hi + pad }
    }
}
