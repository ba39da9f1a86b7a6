// File: crates/thermo-core/src/svg.rs
// Summary: Serializes a Scene into a standalone SVG document.
// Notes:
// - Bar rects carry data-series / data-month / data-value so a host page can
//   attach pointer handlers without re-running the layout.

use std::fmt::Write as _;

use crate::color::GradientDef;
use crate::scene::{AxisCommand, AxisOrient, Baseline, DrawCommand, Layer, Paint, RectCommand, Scene, Stroke, TextCommand};

/// Render the full document.
pub fn render(scene: &Scene) -> String {
    let vb = &scene.view_box;
    let mut out = String::with_capacity(16 * 1024);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="{} {} {} {}">"#,
        num(vb.x),
        num(vb.y),
        num(vb.width),
        num(vb.height)
    );
    let _ = writeln!(out, "  <defs>{}</defs>", gradient(&scene.gradient));

    out.push_str("  <g class=\"bars\">\n");
    for cmd in scene.layer(Layer::Bars) {
        write_command(&mut out, cmd, 4);
    }
    out.push_str("  </g>\n  <g class=\"axes\">\n");
    for cmd in scene.layer(Layer::Axes) {
        write_command(&mut out, cmd, 4);
    }
    out.push_str("  </g>\n");
    for cmd in scene.layer(Layer::Titles) {
        write_command(&mut out, cmd, 2);
    }

    let (lx, ly) = scene.legend_origin;
    let stroke = scene.legend_stroke.map(|s| format!(" {}", stroke_attrs(&s))).unwrap_or_default();
    let _ = writeln!(out, "  <g class=\"legend\" transform=\"translate({},{})\"{}>", num(lx), num(ly), stroke);
    for cmd in scene.layer(Layer::Legend) {
        write_command(&mut out, cmd, 4);
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

fn write_command(out: &mut String, cmd: &DrawCommand, indent: usize) {
    let pad = " ".repeat(indent);
    match cmd {
        DrawCommand::Rect(r) => {
            let _ = writeln!(out, "{pad}{}", rect(r));
        }
        DrawCommand::Text(t) => {
            let _ = writeln!(out, "{pad}{}", text(t));
        }
        DrawCommand::Axis(a) => axis(out, a, &pad),
    }
}

pub fn gradient(def: &GradientDef) -> String {
    let stops: String = def
        .stops
        .iter()
        .map(|s| format!("<stop offset=\"{}%\" stop-color=\"{}\"/>", num(s.offset * 100.0), s.color.to_hex()))
        .collect();
    format!(
        "<linearGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">{}</linearGradient>",
        escape_xml(&def.id),
        num(def.x1),
        num(def.y1),
        num(def.x2),
        num(def.y2),
        stops
    )
}

fn rect(r: &RectCommand) -> String {
    let mut s = format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
        num(r.x),
        num(r.y),
        num(r.width),
        num(r.height),
        paint(&r.fill)
    );
    if let Some(st) = &r.stroke {
        let _ = write!(s, " style=\"stroke: {}; stroke-width: {}px\"", st.color, num(st.width));
    }
    if let Some((id, value)) = r.bar {
        let _ = write!(s, " data-series=\"{}\" data-month=\"{}\" data-value=\"{}\"", id.series, id.month, value);
    }
    s.push_str("/>");
    s
}

fn text(t: &TextCommand) -> String {
    let mut s = String::from("<text");
    if t.rotation != 0.0 {
        let _ = write!(s, " transform=\"rotate({})\"", num(t.rotation));
    }
    let _ = write!(s, " x=\"{}\" y=\"{}\" text-anchor=\"{}\"", num(t.x), num(t.y), t.anchor.as_svg());
    match t.baseline {
        Baseline::Auto => {}
        Baseline::Middle => s.push_str(" dominant-baseline=\"middle\""),
        Baseline::Hanging => s.push_str(" alignment-baseline=\"text-before-edge\""),
    }
    let _ = write!(s, " font-size=\"{}\" fill=\"{}\">{}</text>", num(t.size), t.fill, escape_xml(&t.text));
    s
}

fn axis(out: &mut String, a: &AxisCommand, pad: &str) {
    let (r0, r1) = a.range;
    let k = a.tick_size;
    let (transform, domain) = match a.orient {
        AxisOrient::Left => (
            format!("translate({},0)", num(a.offset)),
            format!("M{},{}H0V{}H{}", num(-k), num(r0), num(r1), num(-k)),
        ),
        AxisOrient::Bottom => (
            format!("translate(0,{})", num(a.offset)),
            format!("M{},{}V0H{}V{}", num(r0), num(k), num(r1), num(k)),
        ),
    };
    let color = a.color.to_string();
    let _ = writeln!(out, "{pad}<g transform=\"{transform}\" fill=\"none\" font-size=\"10\">");
    let _ = writeln!(out, "{pad}  <path d=\"{domain}\" stroke=\"{color}\"/>");
    for tick in &a.ticks {
        let label = escape_xml(&tick.label);
        let line = match a.orient {
            AxisOrient::Left => format!(
                "<g transform=\"translate(0,{})\"><line x2=\"{}\" stroke=\"{color}\"/><text x=\"{}\" dy=\"0.32em\" text-anchor=\"end\" fill=\"{color}\">{label}</text></g>",
                num(tick.pos),
                num(-k),
                num(-k - 3.0)
            ),
            AxisOrient::Bottom => format!(
                "<g transform=\"translate({},0)\"><line y2=\"{}\" stroke=\"{color}\"/><text y=\"{}\" dy=\"0.71em\" text-anchor=\"middle\" fill=\"{color}\">{label}</text></g>",
                num(tick.pos),
                num(k),
                num(k + 3.0)
            ),
        };
        let _ = writeln!(out, "{pad}  {line}");
    }
    let _ = writeln!(out, "{pad}</g>");
}

fn paint(p: &Paint) -> String {
    match p {
        Paint::Solid(c) => c.to_string(),
        Paint::Gradient(id) => format!("url(#{})", escape_xml(id)),
    }
}

fn stroke_attrs(s: &Stroke) -> String {
    format!("stroke=\"{}\" stroke-width=\"{}px\"", s.color, num(s.width))
}

/// Up to three decimals, trailing zeros trimmed.
pub fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
