// File: crates/thermo-core/src/geometry.rs
// Summary: Bar geometry from series + scales, and view box <-> screen pixel math.

use crate::scale::{BandScale, LinearScale};
use crate::series::{SeriesKind, TemperatureDataset};

/// Identifies one bar: which series, which month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BarId {
    pub series: SeriesKind,
    pub month: usize,
}

impl BarId {
    pub const fn new(series: SeriesKind, month: usize) -> Self {
        Self { series, month }
    }
}

/// A bar in chart coordinates; grows upward from the plot baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub id: BarId,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    /// Inclusive point-in-rect test in chart coordinates.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// One bar per (series, month), grouped by series in draw order.
pub fn build_bars(data: &TemperatureDataset, x: &BandScale, y: &LinearScale, plot_height: f64) -> Vec<Bar> {
    let mut bars = Vec::with_capacity(SeriesKind::DRAW_ORDER.len() * x.count());
    for kind in SeriesKind::DRAW_ORDER {
        for (month, value) in data.series(kind).iter() {
            let Some(band) = x.band(month) else { continue };
            let top = y.map(value);
            bars.push(Bar {
                id: BarId::new(kind, month),
                value,
                x: band.start,
                y: top,
                width: band.bandwidth,
                height: plot_height - top,
            });
        }
    }
    bars
}

/// The visible chart-space window, as in an SVG `viewBox`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Plot of `width` x `height` with `padding` on all sides.
    pub fn around_plot(width: f64, height: f64, padding: f64) -> Self {
        Self { x: -padding, y: -padding, width: width + 2.0 * padding, height: height + 2.0 * padding }
    }

    /// Uniform fit into a `width` x `height` pixel target, centered.
    pub fn fit(&self, width: f64, height: f64) -> Viewport {
        let scale = (width / self.width).min(height / self.height).max(0.0);
        let tx = (width - self.width * scale) * 0.5 - self.x * scale;
        let ty = (height - self.height * scale) * 0.5 - self.y * scale;
        Viewport { scale, tx, ty }
    }
}

/// `screen = chart * scale + t`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Viewport {
    #[inline]
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale + self.tx, y * self.scale + self.ty)
    }

    #[inline]
    pub fn to_chart(&self, sx: f64, sy: f64) -> (f64, f64) {
        if self.scale == 0.0 {
            return (0.0, 0.0);
        }
        ((sx - self.tx) / self.scale, (sy - self.ty) / self.scale)
    }
}
