// File: crates/thermo-core/src/legend.rs
// Summary: Two-row Hot/Cold legend built from the gradient endpoints.

use crate::color::{GradientSpec, Rgb};
use crate::scene::{Baseline, Paint, RectCommand, Stroke, TextAnchor, TextCommand};
use crate::types::LegendLayout;

const LABEL_SIZE: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Group translation in chart coordinates.
    pub origin: (f64, f64),
    pub stroke: Stroke,
    pub entries: Vec<LegendEntry>,
    pub layout: LegendLayout,
}

impl Legend {
    /// Hot on top, Cold below, inset from the plot's right edge.
    pub fn new(spec: &GradientSpec, plot_width: f64, padding: f64, layout: LegendLayout) -> Self {
        Self {
            origin: (plot_width - layout.inset_factor * padding, 0.0),
            stroke: Stroke { color: Rgb::WHITE, width: 0.5 },
            entries: vec![
                LegendEntry { label: "Hot", color: spec.hot },
                LegendEntry { label: "Cold", color: spec.cold },
            ],
            layout,
        }
    }

    /// Swatch and label per row, relative to `origin`.
    pub fn commands(&self) -> Vec<(RectCommand, TextCommand)> {
        let l = &self.layout;
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let row_y = l.row_offset * i as f64;
                let swatch = RectCommand {
                    x: 0.0,
                    y: row_y,
                    width: l.swatch_width,
                    height: l.swatch_height,
                    fill: Paint::Solid(e.color),
                    stroke: None,
                    bar: None,
                };
                let label = TextCommand {
                    x: l.label_offset,
                    y: row_y,
                    text: e.label.to_string(),
                    anchor: TextAnchor::Start,
                    baseline: Baseline::Hanging,
                    rotation: 0.0,
                    size: LABEL_SIZE,
                    fill: Rgb::WHITE,
                };
                (swatch, label)
            })
            .collect()
    }
}
