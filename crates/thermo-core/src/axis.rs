// File: crates/thermo-core/src/axis.rs
// Summary: Value and month axes plus the two axis titles.

use crate::color::Rgb;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{AxisCommand, AxisOrient, Baseline, TextAnchor, TextCommand, Tick};
use crate::types::MONTH_LABELS;

const TICK_SIZE: f64 = 6.0;
const AXIS_COLOR: Rgb = Rgb::BLACK;
const TITLE_SIZE: f64 = 12.0;

/// Left axis with round tick values.
pub fn value_axis(y: &LinearScale, count: usize) -> AxisCommand {
    let values = y.ticks(count);
    let step = match values.as_slice() {
        [a, b, ..] => b - a,
        _ => 1.0,
    };
    let ticks = values
        .iter()
        .map(|&v| Tick { pos: y.map(v), label: format_tick(v, step) })
        .collect();
    AxisCommand {
        orient: AxisOrient::Left,
        offset: 0.0,
        range: y.range(),
        ticks,
        tick_size: TICK_SIZE,
        color: AXIS_COLOR,
    }
}

/// Bottom axis at `plot_height`, one tick per month at the band centers.
pub fn month_axis(x: &BandScale, plot_height: f64, plot_width: f64) -> AxisCommand {
    let ticks = (0..x.count())
        .filter_map(|i| {
            let pos = x.center(i)?;
            let label = MONTH_LABELS.get(i).copied().unwrap_or_default().to_string();
            Some(Tick { pos, label })
        })
        .collect();
    AxisCommand {
        orient: AxisOrient::Bottom,
        offset: plot_height,
        range: (0.0, plot_width),
        ticks,
        tick_size: TICK_SIZE,
        color: AXIS_COLOR,
    }
}

/// "Months" under the month axis and "Temperatures" rotated along the value axis.
pub fn titles(plot_width: f64, plot_height: f64) -> [TextCommand; 2] {
    [
        TextCommand {
            x: 3.0 * plot_width / 7.0,
            y: plot_height + 35.0,
            text: "Months".to_string(),
            anchor: TextAnchor::Start,
            baseline: Baseline::Auto,
            rotation: 0.0,
            size: TITLE_SIZE,
            fill: Rgb::BLACK,
        },
        TextCommand {
            x: -2.0 * plot_height / 3.0,
            y: -30.0,
            text: "Temperatures".to_string(),
            anchor: TextAnchor::Start,
            baseline: Baseline::Auto,
            rotation: -90.0,
            size: TITLE_SIZE,
            fill: Rgb::BLACK,
        },
    ]
}

/// Enough decimals to tell neighbouring ticks apart, no more.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 { (-step.log10().floor()).max(0.0) as usize } else { 0 };
    let v = if value == 0.0 { 0.0 } else { value }; // no "-0"
    format!("{:.*}", decimals, v)
}
