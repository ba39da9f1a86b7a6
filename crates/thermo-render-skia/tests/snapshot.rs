// File: crates/thermo-render-skia/tests/snapshot.rs
// Purpose: Golden pixel snapshots of the sample chart, with and without a tooltip.
// Behavior mirrors the SVG snapshot: UPDATE_SNAPSHOTS=1 blesses, missing files are skipped.

use thermo_core::{sample, ChartBuilder, TooltipState};
use thermo_render_skia::{RasterOptions, SkiaRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(tooltip: Option<&TooltipState>) -> Vec<u8> {
    let chart = ChartBuilder::default().build(&sample::malaga()).unwrap();
    let opts = RasterOptions { width: 600, height: 400, draw_labels: false, ..RasterOptions::default() }; // deterministic
    SkiaRenderer::new().render_to_png_bytes(chart.scene(), &opts, tooltip).expect("render bytes")
}

#[test]
fn golden_chart() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/chart.png");
    write_or_compare(&path, &render(None));
}

#[test]
fn golden_chart_with_tooltip() {
    let tip = TooltipState { visible: true, content: "Temperature: 25.6".into(), x: 300.0, y: 120.0, owner: None };
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/chart_tooltip.png");
    write_or_compare(&path, &render(Some(&tip)));
}
