// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: rasterizes the chart via RGBA blit (CPU) and drives the tooltip from the cursor.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::num::NonZeroU32;
use thermo_core::{sample, ChartBuilder, PointerTracker};
use thermo_render_skia::{RasterOptions, SkiaRenderer};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let chart = ChartBuilder::default().build(&sample::malaga()).context("building chart")?;
    let renderer = SkiaRenderer::new();

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Thermo Chart - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1000.0, 800.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let mut size = window.inner_size();
    let mut tracker = PointerTracker::new();
    let mut controller = chart.controller();
    info!("hover a bar to see its temperature; close the window to exit");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let opts = raster_options(size.width, size.height);
                    let vp = SkiaRenderer::viewport(chart.scene(), &opts);
                    let chart_pt = vp.to_chart(position.x, position.y);
                    let events = tracker.pointer_moved(chart.scene(), chart_pt, (position.x, position.y));
                    if !controller.dispatch_all(events).is_empty() {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    let events = tracker.pointer_left();
                    if !controller.dispatch_all(events).is_empty() {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    warn!("resize error: {e:?}");
                    return;
                }
                let opts = raster_options(size.width, size.height);
                let tooltip = controller.state();
                let rgba = match renderer.render_to_rgba8(chart.scene(), &opts, Some(tooltip)) {
                    Ok((px, _, _, _)) => px,
                    Err(e) => {
                        warn!("render error: {e:#}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(f) => f,
                    Err(e) => {
                        warn!("frame error: {e:?}");
                        return;
                    }
                };
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    // softbuffer expects 0RGB
                    frame[i] = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
                }
                if let Err(e) = frame.present() {
                    warn!("present error: {e:?}");
                }
                debug!("frame {}x{} (tooltip visible: {})", size.width, size.height, tooltip.visible);
            }
            _ => {}
        }
    });
}

fn raster_options(width: u32, height: u32) -> RasterOptions {
    RasterOptions { width: width.max(1) as i32, height: height.max(1) as i32, ..RasterOptions::default() }
}
