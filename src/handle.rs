/*
 * Handle Module
 *
 * `create_field` is the single entry point for embedding the effect: it
 * resolves the style, sizes the surface from the host region, populates the
 * field and hands back a FieldHandle. The handle is what the window event
 * handlers talk to: pointer moves and leaves, and window resizes.
 */

use nannou::prelude::*;

use crate::error::FieldError;
use crate::field::Field;
use crate::geometry::Bounds;
use crate::params::FieldParams;
use crate::style::{Style, StyleOptions};
use crate::viewport::{screen_to_window, HostRegion, Placement, Viewport};

pub struct FieldHandle {
    pub field: Field,
    pub style: Style,
    pub host: HostRegion,
    pub viewport: Viewport,
}

/// Embed a field in `host` (the whole window when `None`) inside a window of
/// `window` pixels, styled by `options` (all defaults when `None`).
pub fn create_field(
    host: Option<HostRegion>,
    options: Option<&StyleOptions>,
    window: Bounds,
    params: FieldParams,
    seed: Option<u64>,
) -> Result<FieldHandle, FieldError> {
    let host = host.unwrap_or_default();
    let style = match options {
        Some(options) => options.resolve()?,
        None => Style::default(),
    };

    let surface = host.content_size(window);
    let placement = Placement::resolve(&style, &host, window);
    let viewport = Viewport::new(window, surface, placement);
    let field = Field::new(surface, window, &style, params, seed);

    Ok(FieldHandle {
        field,
        style,
        host,
        viewport,
    })
}

impl FieldHandle {
    /// Apply the sizing policy for a new window size. Particles are only
    /// repopulated when `reinit_on_resize` is set. Returns true when the
    /// surface's backing size changed.
    pub fn resize(&mut self, window: Bounds) -> bool {
        let surface = self.host.content_size(window);
        let changed = surface != self.viewport.surface;

        self.viewport = Viewport::new(
            window,
            surface,
            Placement::resolve(&self.style, &self.host, window),
        );
        self.field.set_viewport_size(window.width, window.height);
        self.field.set_surface_size(surface.width, surface.height);

        if changed && self.field.params().reinit_on_resize {
            self.field.initialize();
        }
        changed
    }

    /// Pointer moved to `position` in screen space. Leaving the host region
    /// counts as leaving.
    pub fn pointer_moved(&mut self, position: Vec2) {
        let window_point = screen_to_window(position, self.viewport.window);
        if !self.host.contains(window_point, self.viewport.window) {
            self.pointer_left();
            return;
        }
        let surface_point = self.viewport.screen_to_surface(position);
        self.field.set_pointer(surface_point);
    }

    pub fn pointer_left(&mut self) {
        self.field.set_pointer(None);
    }
}
