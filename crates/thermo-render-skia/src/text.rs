// File: crates/thermo-render-skia/src/text.rs
// Summary: Text layout/drawing for labels and the tooltip using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use thermo_core::scene::{Baseline, TextAnchor};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw `text` anchored at (x, y) the way SVG text-anchor / baseline would place it.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor: TextAnchor,
        baseline: Baseline,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - w * 0.5,
            TextAnchor::End => x - w,
        };
        // Paragraph draws from top-left; shift by an approximate ascent
        let top = match baseline {
            Baseline::Auto => y - size * 0.8,
            Baseline::Middle => y - size * 0.5,
            Baseline::Hanging => y,
        };
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
