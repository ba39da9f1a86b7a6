// File: crates/thermo-core/src/color.rs
// Summary: RGB colors, hex parsing, the shared bar gradient and the diverging temperature palette.

use std::fmt;
use std::sync::LazyLock;

use colorgrad::Gradient;

use crate::error::{ChartError, Result};
use crate::scale::LinearScale;
use crate::series::ValueRange;

pub const HOT_HEX: &str = "#fe0000";
pub const COLD_HEX: &str = "#252850";
/// Paint id every bar refers to.
pub const BAR_GRADIENT_ID: &str = "barGradient";

static RD_BU: LazyLock<colorgrad::BasisGradient> = LazyLock::new(colorgrad::preset::rd_bu);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColorFormat(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ChartError::InvalidColorFormat(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// `"#fe0000"` -> `"rgb(254, 0, 0)"`.
pub fn hex_to_rgb(hex: &str) -> Result<String> {
    Rgb::from_hex(hex).map(|c| c.to_string())
}

/// Diverging red-blue ramp: 0 is deep red, 0.5 near white, 1 deep blue.
pub fn color_at(t: f64) -> Rgb {
    let [r, g, b, _] = RD_BU.at(t.clamp(0.0, 1.0) as f32).to_rgba8();
    Rgb::new(r, g, b)
}

/// The two endpoint colors used by the bar gradient and the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientSpec {
    pub hot: Rgb,
    pub cold: Rgb,
}

impl GradientSpec {
    pub fn from_hex(hot: &str, cold: &str) -> Result<Self> {
        Ok(Self { hot: Rgb::from_hex(hot)?, cold: Rgb::from_hex(cold)? })
    }
}

impl Default for GradientSpec {
    fn default() -> Self {
        // HOT_HEX / COLD_HEX
        Self { hot: Rgb::new(0xfe, 0x00, 0x00), cold: Rgb::new(0x25, 0x28, 0x50) }
    }
}

/// How bars are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarFill {
    /// Every bar references one gradient spanning the whole plot height.
    #[default]
    SharedGradient,
    /// Each bar gets the palette color of its own value.
    PerValue,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// 0.0 ..= 1.0
    pub offset: f64,
    pub color: Rgb,
}

/// Linear gradient in user space, referenced by id.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDef {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: Vec<GradientStop>,
}

impl GradientDef {
    /// Bottom of the plot is cold, top is hot.
    pub fn vertical(id: impl Into<String>, plot_height: f64, spec: &GradientSpec) -> Self {
        Self {
            id: id.into(),
            x1: 0.0,
            y1: plot_height,
            x2: 0.0,
            y2: 0.0,
            stops: vec![
                GradientStop { offset: 0.0, color: spec.cold },
                GradientStop { offset: 1.0, color: spec.hot },
            ],
        }
    }

    /// Color at chart-space `y` along the gradient axis (clamped to the end stops).
    pub fn color_at_y(&self, y: f64) -> Rgb {
        let span = self.y2 - self.y1;
        let t = if span == 0.0 { 0.0 } else { ((y - self.y1) / span).clamp(0.0, 1.0) };
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Rgb::BLACK,
        };
        let width = last.offset - first.offset;
        let u = if width <= 0.0 { 0.0 } else { ((t - first.offset) / width).clamp(0.0, 1.0) };
        lerp(first.color, last.color, u)
    }
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let ch = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Rgb::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

/// Maps a temperature onto the diverging palette: the coldest observed value
/// normalizes to 1 (blue), the hottest to 0 (red).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureColorScale {
    norm: LinearScale,
}

impl TemperatureColorScale {
    pub fn new(range: ValueRange) -> Result<Self> {
        Ok(Self { norm: LinearScale::new(range.lo, range.hi, 1.0, 0.0)? })
    }

    pub fn normalize(&self, value: f64) -> f64 {
        self.norm.map(value)
    }

    pub fn color(&self, value: f64) -> Rgb {
        color_at(self.normalize(value))
    }
}
