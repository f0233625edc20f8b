/*
 * Application Module
 *
 * This module defines the nannou model for the constellation effect and its
 * per-frame update. nannou's refresh-synced loop plays the animation
 * scheduler: `update` steps the field once per frame and `view` renders it.
 * Pausing stops the stepping; the last frame keeps being shown.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::{Settings, SETTINGS};
use crate::debug::DebugInfo;
use crate::error::FieldError;
use crate::geometry::Bounds;
use crate::handle::{create_field, FieldHandle};
use crate::input::{key_pressed, mouse_exited, mouse_moved, raw_window_event, resized};
use crate::params::FieldParams;
use crate::renderer::view;
use crate::ui;

// Main model for the application
pub struct Model {
    pub handle: FieldHandle,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub show_panel: bool,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    match try_model(app) {
        Ok(model) => model,
        // Nothing to draw on: the effect cannot start
        Err(e) => panic!("failed to start constellation: {}", e),
    }
}

fn try_model(app: &App) -> Result<Model, FieldError> {
    let settings = SETTINGS.get().cloned().unwrap_or_else(|| Settings {
        title: "Constellation".to_string(),
        ..Settings::default()
    });

    // Size the window at 80% of the primary monitor when there is one
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 720.0),
    };

    let window_id = app
        .new_window()
        .title(&settings.title)
        .size(window_width as u32, window_height as u32)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .resized(resized)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .map_err(|_| FieldError::ContextUnavailable)?;

    let window = app.window(window_id).ok_or(FieldError::ContextUnavailable)?;
    let egui = Egui::from_window(&window);

    let rect = window.rect();
    let params = FieldParams {
        show_debug: settings.debug,
        reinit_on_resize: settings.reinit_on_resize,
        ..FieldParams::default()
    };

    let handle = create_field(
        settings.host,
        settings.style.as_ref(),
        Bounds::new(rect.w(), rect.h()),
        params,
        settings.seed,
    )?;

    let surface = handle.field.surface_size();
    eprintln!(
        "constellation: {} particles on a {:.0}x{:.0} surface",
        handle.field.particles().len(),
        surface.width,
        surface.height
    );

    Ok(Model {
        handle,
        egui,
        debug_info: DebugInfo::default(),
        show_panel: settings.debug,
    })
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    if model.show_panel {
        model.egui.set_elapsed_time(update.since_start);
        let actions = ui::update_ui(&mut model.egui, model.handle.field.params_mut(), &model.debug_info);
        if actions.reinitialize {
            model.handle.field.initialize();
        }
    }

    // One tick per frame unless paused
    if !model.handle.field.params().pause_simulation {
        model.handle.field.update();
    }

    let field = &model.handle.field;
    model.debug_info.particle_count = field.particles().len();
    model.debug_info.generation = field.generation();
    model.debug_info.pointer_present = field.pointer().position.is_some();
    model.debug_info.surface = field.surface_size();
}
