// File: crates/demo/src/main.rs
// Summary: Demo builds the sample temperature chart, writes SVG/PNG, and replays a scripted hover.

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};
use thermo_core::{sample, BarFill, BarId, ChartBuilder, ChartConfig, PointerTracker, SeriesKind};
use thermo_render_skia::{RasterOptions, SkiaRenderer};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_module_path(false)
        .init();

    // Output directory from CLI or the default build output folder
    let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let data = sample::malaga();
    let range = data.value_range();
    info!("Temperature range: [{:.1}, {:.1}] across 36 values", range.lo, range.hi);

    // 1) Shared gradient (default)
    let chart = ChartBuilder::default().build(&data).context("building chart")?;
    let svg_path = out_dir.join("thermo_chart.svg");
    chart.render_to_svg(&svg_path)?;
    info!("Wrote {}", svg_path.display());

    let renderer = SkiaRenderer::new();
    let opts = RasterOptions::default();
    let png_path = out_dir.join("thermo_chart.png");
    renderer.render_to_png(chart.scene(), &opts, None, &png_path)?;
    info!("Wrote {}", png_path.display());

    // 2) Per-value palette colors
    let config = ChartConfig { bar_fill: BarFill::PerValue, ..ChartConfig::default() };
    let per_value = ChartBuilder::new(config).build(&data)?;
    let pv_path = out_dir.join("thermo_chart_per_value.svg");
    per_value.render_to_svg(&pv_path)?;
    info!("Wrote {}", pv_path.display());

    // 3) Hover replay: sweep the pointer into July's avg bar, wiggle, then leave
    let target = BarId::new(SeriesKind::Avg, 6);
    let bar = chart.bar(target).context("July avg bar missing")?;
    let vp = SkiaRenderer::viewport(chart.scene(), &opts);
    let cx = bar.x + bar.width * 0.5;
    let path = [(cx, -40.0), (cx, bar.y + 2.0), (cx + 3.0, bar.y + 6.0), (cx, bar.y - 30.0)];

    let mut tracker = PointerTracker::new();
    let mut controller = chart.controller();
    let mut hover_frame = None;
    for (step, &(x, y)) in path.iter().enumerate() {
        let screen = vp.to_screen(x, y);
        for event in tracker.pointer_moved(chart.scene(), (x, y), screen) {
            for cmd in controller.dispatch(event) {
                info!("step {step}: {event:?} -> {cmd:?}");
            }
        }
        if controller.state().visible && hover_frame.is_none() {
            hover_frame = Some(controller.state().clone());
        }
    }
    for event in tracker.pointer_left() {
        controller.dispatch(event);
    }

    if let Some(tip) = hover_frame {
        let hover_path = out_name_with(&out_dir, "hover");
        renderer.render_to_png(chart.scene(), &opts, Some(&tip), &hover_path)?;
        info!("Wrote {} (tooltip: {:?})", hover_path.display(), tip.content);
    }

    Ok(())
}

/// Produce output file name like <dir>/thermo_chart_<suffix>.png
fn out_name_with(dir: &Path, suffix: &str) -> PathBuf {
    dir.join(format!("thermo_chart_{}.png", suffix))
}
