// File: crates/thermo-core/src/scene.rs
// Summary: Renderer-agnostic draw command list produced by the chart builder.

use crate::color::{GradientDef, Rgb};
use crate::geometry::{Bar, BarId, ViewBox};

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    /// Reference to a gradient definition by id.
    Gradient(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

/// Which drawing layer a command belongs to; renderers group by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Bars,
    Axes,
    Titles,
    Legend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectCommand {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
    pub stroke: Option<Stroke>,
    /// Set for bars so hosts can attach pointer handlers.
    pub bar: Option<(BarId, f64)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Auto,
    Middle,
    /// Top of the glyph box sits on `y`.
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    /// Degrees, applied around the origin before `x`/`y`.
    pub rotation: f64,
    pub size: f64,
    pub fill: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Left,
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, chart units.
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisCommand {
    pub orient: AxisOrient,
    /// Offset perpendicular to the axis (y for bottom axes, x for left axes).
    pub offset: f64,
    /// Extent of the domain line along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect(RectCommand),
    Axis(AxisCommand),
    Text(TextCommand),
}

/// An ordered command list plus the context renderers need.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub view_box: ViewBox,
    pub plot_width: f64,
    pub plot_height: f64,
    pub gradient: GradientDef,
    /// Commands in paint order, tagged with their layer.
    pub commands: Vec<(Layer, DrawCommand)>,
    /// Legend group translation; legend commands are relative to it.
    pub legend_origin: (f64, f64),
    pub legend_stroke: Option<Stroke>,
    pub bars: Vec<Bar>,
}

impl Scene {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(move |(l, _)| *l == layer).map(|(_, c)| c)
    }

    /// Topmost bar under a chart-space point; later bars paint over earlier ones.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Bar> {
        self.bars.iter().rev().find(|b| b.contains(x, y))
    }

    pub fn bar(&self, id: BarId) -> Option<&Bar> {
        self.bars.iter().find(|b| b.id == id)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> + '_ {
        self.commands.iter().filter_map(|(_, c)| match c {
            DrawCommand::Text(t) => Some(t),
            _ => None,
        })
    }
}
