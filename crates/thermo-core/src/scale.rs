// File: crates/thermo-core/src/scale.rs
// Summary: Band (month -> pixel band) and linear (temperature -> pixel / unit) scales.

use crate::error::{ChartError, Result};

/// One drawable band: left edge and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub start: f64,
    pub bandwidth: f64,
}

/// Discrete scale dividing `[0, range_width]` into `count` equal steps.
/// Each step keeps `inner_padding` of its width empty, split evenly on both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    pub fn new(count: usize, range_width: f64, inner_padding: f64) -> Self {
        if count == 0 {
            return Self { count: 0, step: 0.0, bandwidth: 0.0, offset: 0.0 };
        }
        let padding = inner_padding.clamp(0.0, 1.0);
        let step = range_width.max(0.0) / count as f64;
        Self { count, step, bandwidth: step * (1.0 - padding), offset: step * padding * 0.5 }
    }

    pub fn count(&self) -> usize { self.count }
    pub fn step(&self) -> f64 { self.step }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    #[inline]
    pub fn band(&self, index: usize) -> Option<Band> {
        if index >= self.count {
            return None;
        }
        Some(Band { start: self.offset + self.step * index as f64, bandwidth: self.bandwidth })
    }

    /// Midpoint of the drawable part of band `index`.
    pub fn center(&self, index: usize) -> Option<f64> {
        self.band(index).map(|b| b.start + b.bandwidth * 0.5)
    }
}

/// Affine map from `[domain_lo, domain_hi]` to `[range_lo, range_hi]`.
/// The range may be inverted (range_lo > range_hi) to flip the y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain_lo: f64, domain_hi: f64, range_lo: f64, range_hi: f64) -> Result<Self> {
        if domain_lo == domain_hi {
            return Err(ChartError::DegenerateDomain { lo: domain_lo, hi: domain_hi });
        }
        Ok(Self { domain: (domain_lo, domain_hi), range: (range_lo, range_hi) })
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Inverse of `map`; returns the domain start for a zero-width range.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 { self.domain } else { (self.domain.1, self.domain.0) };
        let step = tick_step(lo, hi, count);
        if !step.is_finite() || step <= 0.0 {
            return vec![lo, hi];
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        // multiply per tick instead of accumulating to avoid drift
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Tick spacing of 1, 2 or 5 times a power of ten.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count.max(1) as f64;
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}
