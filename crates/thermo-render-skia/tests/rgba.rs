// File: crates/thermo-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, gradient orientation and the tooltip overlay.

use thermo_core::{sample, BarId, ChartBuilder, SeriesKind, TooltipState};
use thermo_render_skia::{RasterOptions, SkiaRenderer};

fn opts() -> RasterOptions {
    RasterOptions { draw_labels: false, ..RasterOptions::default() } // avoid font variance
}

fn pixel(px: &[u8], stride: usize, x: f64, y: f64) -> [u8; 4] {
    let i = y.round() as usize * stride + x.round() as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let chart = ChartBuilder::default().build(&sample::malaga()).unwrap();
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(chart.scene(), &opts(), None).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background in the top-left corner, fully opaque
    assert_eq!(pixel(&px, stride, 0.0, 0.0), [250, 250, 252, 255]);
}

#[test]
fn bars_are_cold_at_the_bottom_and_hot_at_the_top() {
    let chart = ChartBuilder::default().build(&sample::malaga()).unwrap();
    let o = opts();
    let (px, _, _, stride) = SkiaRenderer::new().render_to_rgba8(chart.scene(), &o, None).unwrap();
    let vp = SkiaRenderer::viewport(chart.scene(), &o);

    let bar = chart.bar(BarId::new(SeriesKind::Max, 7)).unwrap();
    let cx = bar.x + bar.width / 2.0;

    let (sx, sy) = vp.to_screen(cx, 295.0);
    let [r, _, b, _] = pixel(&px, stride, sx, sy);
    assert!(b > r, "bottom should be cold, got r={r} b={b}");

    let (sx, sy) = vp.to_screen(cx, bar.y + 8.0);
    let [r, _, b, _] = pixel(&px, stride, sx, sy);
    assert!(r > b, "top should be hot, got r={r} b={b}");
}

#[test]
fn visible_tooltip_darkens_its_box() {
    let chart = ChartBuilder::default().build(&sample::malaga()).unwrap();
    let renderer = SkiaRenderer::new();
    let tip = TooltipState { visible: true, content: "Temperature: 25.6".into(), x: 10.0, y: 10.0, owner: None };

    let (with_tip, _, _, stride) = renderer.render_to_rgba8(chart.scene(), &opts(), Some(&tip)).unwrap();
    let [r, g, b, _] = pixel(&with_tip, stride, 20.0, 20.0);
    assert!(r < 120 && g < 120 && b < 120, "tooltip box should be dark: {r},{g},{b}");

    let hidden = TooltipState { visible: false, ..tip };
    let (without, _, _, _) = renderer.render_to_rgba8(chart.scene(), &opts(), Some(&hidden)).unwrap();
    assert_eq!(pixel(&without, stride, 20.0, 20.0), [250, 250, 252, 255]);
}
