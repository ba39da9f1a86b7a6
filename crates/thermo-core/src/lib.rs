// File: crates/thermo-core/src/lib.rs
// Summary: Core library entry point; exports the monthly temperature bar chart API.

pub mod axis;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod legend;
pub mod sample;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod types;

pub use chart::{Chart, ChartBuilder};
pub use color::{color_at, hex_to_rgb, BarFill, GradientDef, GradientSpec, Rgb, TemperatureColorScale};
pub use error::{ChartError, Result, ShapeIssue};
pub use geometry::{Bar, BarId, ViewBox, Viewport};
pub use interaction::{BarEvent, InteractionController, PointerTracker, TooltipCommand, TooltipState};
pub use legend::Legend;
pub use scale::{Band, BandScale, LinearScale};
pub use scene::{DrawCommand, Layer, Paint, Scene};
pub use series::{MonthSeries, SeriesKind, TemperatureDataset, ValueRange};
pub use types::ChartConfig;
