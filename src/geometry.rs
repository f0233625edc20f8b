/*
 * Geometry Module
 *
 * Small value types and distance helpers shared by the particles and the field.
 *
 * Two distance metrics live here on purpose:
 * - circle collision uses the true Euclidean distance (square root taken)
 * - the connection test uses the squared distance against a squared threshold
 */

use nannou::prelude::*;

// A circle in surface coordinates (top-left origin, y down)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: vec2(x, y),
            radius,
        }
    }
}

// Size of the drawing surface in backing pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Two circles collide when the distance between their centers is strictly
/// less than the sum of their radii.
#[inline]
pub fn circle_collision(c1: &Circle, c2: &Circle) -> bool {
    let dx = c1.center.x - c2.center.x;
    let dy = c1.center.y - c2.center.y;
    let distance = (dx * dx + dy * dy).sqrt();
    distance < c1.radius + c2.radius
}

/// Squared Euclidean distance between two points. No square root.
#[inline]
pub fn squared_distance(p1: Vec2, p2: Vec2) -> f32 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    dx * dx + dy * dy
}
