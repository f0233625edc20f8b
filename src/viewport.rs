/*
 * Viewport Module
 *
 * This module defines where the drawing surface sits inside the window and
 * converts between the two coordinate spaces involved:
 * - surface space: top-left origin, y down, one unit per backing pixel
 * - screen space: nannou's window space, centered origin, y up
 *
 * The host region decides the surface's backing size; the style decides the
 * on-screen placement rectangle the backing pixels are stretched onto.
 */

use nannou::prelude::*;

use crate::geometry::Bounds;
use crate::style::{Position, Style};

// The part of the window the field attaches to
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HostRegion {
    // The whole window
    #[default]
    Document,
    // A sub-rectangle of the window, in top-left window pixels
    Region {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl HostRegion {
    // Top-left corner of the host in window pixels
    pub fn origin(&self) -> Vec2 {
        match *self {
            HostRegion::Document => Vec2::ZERO,
            HostRegion::Region { x, y, .. } => vec2(x, y),
        }
    }

    /// Content box of the host: the full window for the document, the region's
    /// own extent otherwise.
    pub fn content_size(&self, window: Bounds) -> Bounds {
        match *self {
            HostRegion::Document => window,
            HostRegion::Region { width, height, .. } => {
                Bounds::new(width.max(0.0), height.max(0.0))
            }
        }
    }

    // Whether a top-left window point lies inside the host
    pub fn contains(&self, point: Vec2, window: Bounds) -> bool {
        let origin = self.origin();
        let size = self.content_size(window);
        point.x >= origin.x
            && point.y >= origin.y
            && point.x <= origin.x + size.width
            && point.y <= origin.y + size.height
    }
}

// Placement of the surface in window pixels (top-left origin)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    pub fn resolve(style: &Style, host: &HostRegion, window: Bounds) -> Self {
        // Fixed positioning resolves against the window, everything else against the host
        let (origin, reference) = match style.position {
            Position::Fixed => (Vec2::ZERO, window),
            _ => (host.origin(), host.content_size(window)),
        };

        let (left, top) = match style.position {
            Position::Static => (0.0, 0.0),
            _ => (
                style.left.resolve(reference.width),
                style.top.resolve(reference.height),
            ),
        };

        Self {
            x: origin.x + left,
            y: origin.y + top,
            width: style.width.resolve(reference.width).max(0.0),
            height: style.height.resolve(reference.height).max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub window: Bounds,
    pub surface: Bounds,
    pub placement: Placement,
}

impl Viewport {
    pub fn new(window: Bounds, surface: Bounds, placement: Placement) -> Self {
        Self {
            window,
            surface,
            placement,
        }
    }

    // Backing pixels to placement pixels, per axis
    pub fn scale(&self) -> Vec2 {
        let sx = if self.surface.width > 0.0 {
            self.placement.width / self.surface.width
        } else {
            1.0
        };
        let sy = if self.surface.height > 0.0 {
            self.placement.height / self.surface.height
        } else {
            1.0
        };
        vec2(sx, sy)
    }

    // Convert a point from surface space to screen space
    pub fn surface_to_screen(&self, point: Vec2) -> Vec2 {
        let scale = self.scale();
        let window_x = self.placement.x + point.x * scale.x;
        let window_y = self.placement.y + point.y * scale.y;
        vec2(
            window_x - self.window.width / 2.0,
            self.window.height / 2.0 - window_y,
        )
    }

    // Convert a point from screen space to surface space.
    // None when the placement is collapsed on an axis.
    pub fn screen_to_surface(&self, point: Vec2) -> Option<Vec2> {
        let window_point = screen_to_window(point, self.window);
        let scale = self.scale();
        if scale.x == 0.0 || scale.y == 0.0 {
            return None;
        }
        Some(vec2(
            (window_point.x - self.placement.x) / scale.x,
            (window_point.y - self.placement.y) / scale.y,
        ))
    }

    // Average scale, for radii and line widths
    pub fn length_scale(&self) -> f32 {
        let scale = self.scale();
        (scale.x + scale.y) / 2.0
    }

    // Placement rectangle in screen space
    pub fn placement_rect(&self) -> Rect {
        let top_left = vec2(
            self.placement.x - self.window.width / 2.0,
            self.window.height / 2.0 - self.placement.y,
        );
        let bottom_right = top_left + vec2(self.placement.width, -self.placement.height);
        Rect::from_corners(top_left, bottom_right)
    }
}

// Convert a point from nannou screen space to top-left window pixels
pub fn screen_to_window(point: Vec2, window: Bounds) -> Vec2 {
    vec2(point.x + window.width / 2.0, window.height / 2.0 - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Length;

    fn viewport(style: &Style, host: &HostRegion, window: Bounds) -> Viewport {
        let surface = host.content_size(window);
        Viewport::new(window, surface, Placement::resolve(style, host, window))
    }

    #[test]
    fn document_surface_fills_window() {
        let window = Bounds::new(800.0, 600.0);
        let vp = viewport(&Style::default(), &HostRegion::Document, window);
        assert_eq!(vp.surface, window);
        assert_eq!(vp.scale(), vec2(1.0, 1.0));
        assert_eq!(vp.surface_to_screen(vec2(0.0, 0.0)), vec2(-400.0, 300.0));
        assert_eq!(vp.surface_to_screen(vec2(800.0, 600.0)), vec2(400.0, -300.0));
    }

    #[test]
    fn screen_and_surface_round_trip() {
        let window = Bounds::new(800.0, 600.0);
        let host = HostRegion::Region {
            x: 100.0,
            y: 50.0,
            width: 400.0,
            height: 300.0,
        };
        let style = Style {
            width: Length::Percent(50.0),
            ..Style::default()
        };
        let vp = viewport(&style, &host, window);
        let p = vec2(120.0, 80.0);
        let back = vp.screen_to_surface(vp.surface_to_screen(p)).unwrap();
        assert!((back - p).length() < 1e-3);
    }

    #[test]
    fn static_position_ignores_offsets() {
        let window = Bounds::new(800.0, 600.0);
        let style = Style {
            position: Position::Static,
            top: Length::Px(40.0),
            left: Length::Px(40.0),
            ..Style::default()
        };
        let placement = Placement::resolve(&style, &HostRegion::Document, window);
        assert_eq!((placement.x, placement.y), (0.0, 0.0));
    }

    #[test]
    fn fixed_position_resolves_against_window() {
        let window = Bounds::new(800.0, 600.0);
        let host = HostRegion::Region {
            x: 100.0,
            y: 100.0,
            width: 200.0,
            height: 200.0,
        };
        let style = Style {
            position: Position::Fixed,
            ..Style::default()
        };
        let placement = Placement::resolve(&style, &host, window);
        assert_eq!(
            placement,
            Placement {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0
            }
        );
    }

    #[test]
    fn region_contains_points_inside_only() {
        let window = Bounds::new(800.0, 600.0);
        let host = HostRegion::Region {
            x: 100.0,
            y: 100.0,
            width: 200.0,
            height: 200.0,
        };
        assert!(host.contains(vec2(150.0, 250.0), window));
        assert!(!host.contains(vec2(50.0, 250.0), window));
        assert!(HostRegion::Document.contains(vec2(799.0, 1.0), window));
    }
}
