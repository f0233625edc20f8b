/*
 * UI Module
 *
 * This module contains the control panel (nannou_egui) shown with --debug and
 * the on-screen debug overlay. Flag change detection is handled by the
 * FieldParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::FieldParams;

// What the panel asked the app to do this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub reinitialize: bool,
    pub changed: bool,
}

// Update the panel and report requested actions
pub fn update_ui(egui: &mut Egui, params: &mut FieldParams, debug_info: &DebugInfo) -> UiActions {
    let mut reinitialize = false;

    // Take a snapshot of current flag values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Constellation")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Field", |ui| {
                if ui.button("Reinitialize Particles").clicked() {
                    reinitialize = true;
                }
                ui.checkbox(&mut params.reinit_on_resize, "Reinitialize On Resize");
                ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
            });

            ui.collapsing("Stats", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Particles: {}", debug_info.particle_count));
                ui.label(format!("Connections: {}", debug_info.connections.get()));
                ui.label(format!("Generation: {}", debug_info.generation));
                ui.label(format!(
                    "Surface: {:.0}x{:.0}",
                    debug_info.surface.width, debug_info.surface.height
                ));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    UiActions {
        reinitialize,
        changed: params.detect_changes(),
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let pointer = if debug_info.pointer_present { "tracked" } else { "absent" };
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Particles: {}", debug_info.particle_count),
        format!("Connections: {}", debug_info.connections.get()),
        format!("Pointer: {}", pointer),
        format!("Surface: {:.0}x{:.0}", debug_info.surface.width, debug_info.surface.height),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge of the panel
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
