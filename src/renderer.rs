/*
 * Renderer Module
 *
 * This module draws the field with nannou. NannouSurface implements the
 * Surface trait on top of a Draw clipped to the surface's placement, mapping
 * surface coordinates to screen coordinates through the Viewport.
 *
 * nannou has no shadow blur, so the particle glow is approximated with a few
 * translucent halos around the dot. The radial-gradient background is drawn
 * as concentric ellipses.
 */

use nannou::color::{rgba, Rgba};
use nannou::prelude::*;

use crate::app::Model;
use crate::style::Background;
use crate::surface::Surface;
use crate::ui;
use crate::viewport::Viewport;

const GLOW_LAYERS: usize = 4;
const GLOW_ALPHA: f32 = 0.12;
const GRADIENT_RINGS: usize = 48;

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    viewport: Viewport,
    background: Background,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, viewport: Viewport, background: Background) -> Self {
        Self {
            draw,
            viewport,
            background,
        }
    }

    fn draw_background(&self) {
        let rect = self.viewport.placement_rect();
        match self.background {
            Background::Color(color) => {
                self.draw.rect().xy(rect.xy()).wh(rect.wh()).color(color);
            }
            Background::RadialGradient { inner, outer } => {
                self.draw.rect().xy(rect.xy()).wh(rect.wh()).color(outer);

                // Ellipse through the corners, like a farthest-corner gradient
                let full = rect.wh() * std::f32::consts::SQRT_2;
                for ring in 0..GRADIENT_RINGS {
                    let t = ring as f32 / GRADIENT_RINGS as f32;
                    self.draw
                        .ellipse()
                        .xy(rect.xy())
                        .wh(full * (1.0 - t))
                        .color(lerp_color(outer, inner, t));
                }
            }
        }
    }
}

impl<'a> Surface for NannouSurface<'a> {
    fn clear(&mut self) {
        self.draw_background();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: f32) {
        let scale = self.viewport.length_scale();
        let center = self.viewport.surface_to_screen(center);
        let radius = radius * scale;

        if glow > 0.0 {
            let halo = rgba(color.red, color.green, color.blue, color.alpha * GLOW_ALPHA);
            for layer in (1..=GLOW_LAYERS).rev() {
                let spread = glow * scale * layer as f32 / GLOW_LAYERS as f32;
                self.draw
                    .ellipse()
                    .xy(center)
                    .radius(radius + spread)
                    .color(halo);
            }
        }

        self.draw.ellipse().xy(center).radius(radius).color(color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.draw
            .line()
            .start(self.viewport.surface_to_screen(from))
            .end(self.viewport.surface_to_screen(to))
            .weight(width * self.viewport.length_scale())
            .color(color);
    }
}

fn lerp_color(from: Rgba, to: Rgba, t: f32) -> Rgba {
    rgba(
        from.red + (to.red - from.red) * t,
        from.green + (to.green - from.green) * t,
        from.blue + (to.blue - from.blue) * t,
        from.alpha + (to.alpha - from.alpha) * t,
    )
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // The window behind the surface plays the host page
    draw.background().color(BLACK);

    // Clip to the surface the way a canvas clips its content
    let viewport = model.handle.viewport;
    let clipped = draw.scissor(viewport.placement_rect());
    let mut surface = NannouSurface::new(&clipped, viewport, model.handle.style.background);

    let lines = model.handle.field.render(&mut surface);
    model.debug_info.connections.set(lines);

    // Draw debug info
    if model.handle.field.params().show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    // Finish drawing
    if let Err(e) = draw.to_frame(app, &frame) {
        eprintln!("failed to render frame: {:?}", e);
    }

    // Draw the egui panel
    if model.show_panel {
        if let Err(e) = model.egui.draw_to_frame(&frame) {
            eprintln!("failed to render control panel: {:?}", e);
        }
    }
}
