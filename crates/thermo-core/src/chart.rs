// File: crates/thermo-core/src/chart.rs
// Summary: ChartBuilder (dataset + config -> immutable scene) and the built Chart with SVG output.

use anyhow::Context;
use log::debug;

use crate::axis;
use crate::color::{BarFill, GradientDef, Rgb, TemperatureColorScale, BAR_GRADIENT_ID};
use crate::error::Result;
use crate::geometry::{build_bars, Bar, BarId, ViewBox};
use crate::interaction::InteractionController;
use crate::legend::Legend;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{DrawCommand, Layer, Paint, RectCommand, Scene, Stroke};
use crate::series::{TemperatureDataset, ValueRange};
use crate::svg;
use crate::types::{ChartConfig, MONTHS};

pub struct ChartBuilder {
    config: ChartConfig,
}

impl ChartBuilder {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Validate, scale and lay out everything. Fails before any command is emitted.
    pub fn build(&self, data: &TemperatureDataset) -> Result<Chart> {
        let cfg = &self.config;
        cfg.validate()?;
        data.validate()?;
        let range = data.value_range();
        let domain = range.padded(cfg.domain_pad);
        debug!("value range [{}, {}], vertical domain [{}, {}]", range.lo, range.hi, domain.lo, domain.hi);

        let x = BandScale::new(MONTHS, cfg.width, cfg.inner_padding);
        let y = LinearScale::new(domain.lo, domain.hi, cfg.height, 0.0)?;
        let colors = match cfg.bar_fill {
            BarFill::SharedGradient => None,
            BarFill::PerValue => Some(TemperatureColorScale::new(range)?),
        };

        let bars = build_bars(data, &x, &y, cfg.height);
        let gradient = GradientDef::vertical(BAR_GRADIENT_ID, cfg.height, &cfg.gradient);
        let mut commands = Vec::with_capacity(bars.len() + 8);

        let bar_stroke = Stroke { color: Rgb::WHITE, width: 1.0 };
        commands.extend(bars.iter().map(|b| {
            let fill = match &colors {
                Some(c) => Paint::Solid(c.color(b.value)),
                None => Paint::Gradient(gradient.id.clone()),
            };
            let rect = RectCommand {
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                fill,
                stroke: Some(bar_stroke),
                bar: Some((b.id, b.value)),
            };
            (Layer::Bars, DrawCommand::Rect(rect))
        }));

        commands.push((Layer::Axes, DrawCommand::Axis(axis::value_axis(&y, cfg.value_ticks))));
        commands.push((Layer::Axes, DrawCommand::Axis(axis::month_axis(&x, cfg.height, cfg.width))));
        commands.extend(axis::titles(cfg.width, cfg.height).into_iter().map(|t| (Layer::Titles, DrawCommand::Text(t))));

        let legend = Legend::new(&cfg.gradient, cfg.width, cfg.padding, cfg.legend);
        for (swatch, label) in legend.commands() {
            commands.push((Layer::Legend, DrawCommand::Rect(swatch)));
            commands.push((Layer::Legend, DrawCommand::Text(label)));
        }
        debug!("built {} bars, {} draw commands", bars.len(), commands.len());

        let scene = Scene {
            view_box: ViewBox::around_plot(cfg.width, cfg.height, cfg.padding),
            plot_width: cfg.width,
            plot_height: cfg.height,
            gradient,
            commands,
            legend_origin: legend.origin,
            legend_stroke: Some(legend.stroke),
            bars,
        };
        Ok(Chart { scene, x_scale: x, y_scale: y, range, tooltip_offset: cfg.tooltip_offset })
    }
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

/// A laid-out chart. Immutable; interaction state lives in a separate controller.
#[derive(Clone, Debug)]
pub struct Chart {
    scene: Scene,
    x_scale: BandScale,
    y_scale: LinearScale,
    range: ValueRange,
    tooltip_offset: (f64, f64),
}

impl Chart {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn bars(&self) -> &[Bar] {
        &self.scene.bars
    }

    pub fn bar(&self, id: BarId) -> Option<&Bar> {
        self.scene.bar(id)
    }

    pub fn x_scale(&self) -> &BandScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    /// Observed data range (unpadded).
    pub fn value_range(&self) -> ValueRange {
        self.range
    }

    /// Topmost bar at a chart-space point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Bar> {
        self.scene.hit_test(x, y)
    }

    /// Fresh tooltip controller using this chart's offset.
    pub fn controller(&self) -> InteractionController {
        InteractionController::new(self.tooltip_offset)
    }

    pub fn to_svg(&self) -> String {
        svg::render(&self.scene)
    }

    /// Write the SVG document to `path`, creating parent directories.
    pub fn render_to_svg(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg()).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
