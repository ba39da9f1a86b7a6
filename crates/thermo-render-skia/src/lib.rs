// File: crates/thermo-render-skia/src/lib.rs
// Summary: Rasterizes a thermo-core Scene (and an optional tooltip overlay) with Skia CPU surfaces.

pub mod text;

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use thermo_core::color::{GradientDef, Rgb};
use thermo_core::scene::{AxisCommand, AxisOrient, Baseline, DrawCommand, Layer, Paint, RectCommand, Scene, Stroke, TextAnchor, TextCommand};
use thermo_core::{TooltipState, Viewport};

pub use text::TextShaper;

/// Tooltip box padding, screen pixels.
const TOOLTIP_PADDING: f32 = 10.0;
const TOOLTIP_TEXT_SIZE: f32 = 14.0;

pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    /// Text varies across platforms; snapshot tests turn it off.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            background: skia::Color::from_argb(255, 250, 250, 252),
            draw_labels: true,
        }
    }
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Viewport mapping the scene's view box into the raster target.
    pub fn viewport(scene: &Scene, opts: &RasterOptions) -> Viewport {
        scene.view_box.fit(opts.width as f64, opts.height as f64)
    }

    /// Render to tightly packed RGBA8 pixels: (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        scene: &Scene,
        opts: &RasterOptions,
        tooltip: Option<&TooltipState>,
    ) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_surface(scene, opts, tooltip)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {}x{} pixels", opts.width, opts.height);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RasterOptions, tooltip: Option<&TooltipState>) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface(scene, opts, tooltip)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(
        &self,
        scene: &Scene,
        opts: &RasterOptions,
        tooltip: Option<&TooltipState>,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene, opts, tooltip)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_surface(&self, scene: &Scene, opts: &RasterOptions, tooltip: Option<&TooltipState>) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let vp = Self::viewport(scene, opts);
        debug!("rasterizing {}x{} at scale {:.3}", opts.width, opts.height, vp.scale);

        let canvas = surface.canvas();
        canvas.clear(opts.background);

        // Chart space
        canvas.save();
        canvas.translate((vp.tx as f32, vp.ty as f32));
        canvas.scale((vp.scale as f32, vp.scale as f32));

        for (layer, cmd) in &scene.commands {
            if *layer == Layer::Legend {
                continue;
            }
            self.draw_command(canvas, scene, cmd, None, opts.draw_labels);
        }

        canvas.save();
        canvas.translate((scene.legend_origin.0 as f32, scene.legend_origin.1 as f32));
        for cmd in scene.layer(Layer::Legend) {
            self.draw_command(canvas, scene, cmd, scene.legend_stroke, opts.draw_labels);
        }
        canvas.restore();
        canvas.restore();

        // Screen space
        if let Some(tip) = tooltip.filter(|t| t.visible) {
            self.draw_tooltip(canvas, tip, opts.draw_labels);
        }
        Ok(surface)
    }

    fn draw_command(&self, canvas: &skia::Canvas, scene: &Scene, cmd: &DrawCommand, group_stroke: Option<Stroke>, labels: bool) {
        match cmd {
            DrawCommand::Rect(r) => draw_rect(canvas, scene, r, r.stroke.or(group_stroke)),
            DrawCommand::Axis(a) => self.draw_axis(canvas, a, labels),
            DrawCommand::Text(t) if labels => self.draw_text(canvas, t),
            DrawCommand::Text(_) => {}
        }
    }

    fn draw_text(&self, canvas: &skia::Canvas, t: &TextCommand) {
        canvas.save();
        if t.rotation != 0.0 {
            canvas.rotate(t.rotation as f32, None);
        }
        self.text.draw(canvas, &t.text, t.x as f32, t.y as f32, t.size as f32, color(t.fill), t.anchor, t.baseline);
        canvas.restore();
    }

    fn draw_axis(&self, canvas: &skia::Canvas, a: &AxisCommand, labels: bool) {
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(1.0);
        line.set_color(color(a.color));

        let (r0, r1) = (a.range.0 as f32, a.range.1 as f32);
        let off = a.offset as f32;
        let k = a.tick_size as f32;
        match a.orient {
            AxisOrient::Left => {
                canvas.draw_line((off, r0), (off, r1), &line);
                for tick in &a.ticks {
                    let y = tick.pos as f32;
                    canvas.draw_line((off - k, y), (off, y), &line);
                    if labels {
                        self.text.draw(canvas, &tick.label, off - k - 3.0, y, 10.0, color(a.color), TextAnchor::End, Baseline::Middle);
                    }
                }
            }
            AxisOrient::Bottom => {
                canvas.draw_line((r0, off), (r1, off), &line);
                for tick in &a.ticks {
                    let x = tick.pos as f32;
                    canvas.draw_line((x, off), (x, off + k), &line);
                    if labels {
                        self.text.draw(canvas, &tick.label, x, off + k + 3.0, 10.0, color(a.color), TextAnchor::Middle, Baseline::Hanging);
                    }
                }
            }
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, tip: &TooltipState, labels: bool) {
        let text_w = if labels { self.text.measure_width(&tip.content, TOOLTIP_TEXT_SIZE) } else { 120.0 };
        let rect = skia::Rect::from_xywh(
            tip.x as f32,
            tip.y as f32,
            text_w + 2.0 * TOOLTIP_PADDING,
            TOOLTIP_TEXT_SIZE * 1.4 + 2.0 * TOOLTIP_PADDING,
        );
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(skia::Color::from_argb(179, 0, 0, 0)); // opacity 0.7
        canvas.draw_round_rect(rect, 3.0, 3.0, &bg);
        if labels {
            self.text.draw(
                canvas,
                &tip.content,
                rect.left + TOOLTIP_PADDING,
                rect.top + TOOLTIP_PADDING,
                TOOLTIP_TEXT_SIZE,
                skia::Color::WHITE,
                TextAnchor::Start,
                Baseline::Hanging,
            );
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgb) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

fn gradient_shader(def: &GradientDef) -> Option<skia::Shader> {
    let colors: Vec<skia::Color> = def.stops.iter().map(|s| color(s.color)).collect();
    let positions: Vec<f32> = def.stops.iter().map(|s| s.offset as f32).collect();
    skia::gradient_shader::linear(
        ((def.x1 as f32, def.y1 as f32), (def.x2 as f32, def.y2 as f32)),
        colors.as_slice(),
        Some(positions.as_slice()),
        skia::TileMode::Clamp,
        None,
        None,
    )
}

fn draw_rect(canvas: &skia::Canvas, scene: &Scene, r: &RectCommand, stroke: Option<Stroke>) {
    let rect = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    match &r.fill {
        Paint::Solid(c) => {
            fill.set_color(color(*c));
        }
        Paint::Gradient(id) if *id == scene.gradient.id => match gradient_shader(&scene.gradient) {
            Some(shader) => {
                fill.set_shader(shader);
            }
            None => {
                // fall back to the gradient's color at the bar's vertical center
                fill.set_color(color(scene.gradient.color_at_y(r.y + r.height * 0.5)));
            }
        },
        Paint::Gradient(id) => {
            debug!("unknown paint id {id}; drawing black");
            fill.set_color(skia::Color::BLACK);
        }
    }
    canvas.draw_rect(rect, &fill);

    if let Some(s) = stroke {
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(s.width as f32);
        edge.set_color(color(s.color));
        canvas.draw_rect(rect, &edge);
    }
}
