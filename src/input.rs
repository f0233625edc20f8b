/*
 * Input Module
 *
 * This module handles window events for the constellation field.
 * Pointer and size changes only write field state; the next tick reads it.
 *
 * Features:
 * - Pointer tracking and pointer leave
 * - Resize handling (sizing policy, optional repopulation)
 * - Keyboard: Space pauses, R repopulates, D toggles the debug overlay
 */

use nannou::prelude::*;
use nannou::winit::event::WindowEvent;

use crate::app::Model;
use crate::geometry::Bounds;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.handle.pointer_moved(pos);
}

// Mouse left the window
pub fn mouse_exited(_app: &App, model: &mut Model) {
    model.handle.pointer_left();
}

// Window resized
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if model.handle.resize(Bounds::new(size.x, size.y)) {
        let surface = model.handle.field.surface_size();
        eprintln!(
            "surface resized to {:.0}x{:.0}, pointer radius {:.1}",
            surface.width,
            surface.height,
            model.handle.field.pointer().radius
        );
    }
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            let params = model.handle.field.params_mut();
            params.pause_simulation = !params.pause_simulation;
        }
        Key::D => {
            let params = model.handle.field.params_mut();
            params.show_debug = !params.show_debug;
        }
        Key::R => model.handle.field.initialize(),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    if model.show_panel {
        model.egui.handle_raw_event(event);
    }
}
