/*
 * Particle Module
 *
 * This module defines the Particle struct and its per-tick behaviour.
 * Each tick a particle:
 * 1. Bounces: velocity flips on an axis once the position is past that edge
 * 2. Flees the pointer: a fixed push away from the cursor while inside a margin
 * 3. Moves: position += velocity
 * 4. Draws itself as a glowing dot
 *
 * Motion (`step`) and drawing (`draw`) are separate so the motion math can be
 * checked without a surface; `advance` runs both.
 */

use nannou::color::Rgba;
use nannou::prelude::*;

use crate::geometry::{circle_collision, Bounds, Circle};
use crate::params::FieldParams;
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
        }
    }

    // Bounding circle used for pointer collision
    pub fn circle(&self) -> Circle {
        Circle {
            center: self.position,
            radius: self.size,
        }
    }

    /// Bounce, flee the pointer, then translate. Does not draw.
    pub fn step(&mut self, pointer: Option<&Circle>, bounds: Bounds, params: &FieldParams) {
        self.bounce(bounds);

        if let Some(pointer) = pointer {
            if circle_collision(pointer, &self.circle()) {
                self.repel(pointer.center, bounds, params);
            }
        }

        self.position += self.velocity;
    }

    // Reflect velocity on any axis where the particle is already outside the surface.
    // Position is not clamped; the flipped velocity brings it back.
    fn bounce(&mut self, bounds: Bounds) {
        if self.position.x > bounds.width || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > bounds.height || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    // Push away from the pointer on each axis independently, but only when the
    // pushed coordinate stays inside [size * factor, bound - size * factor].
    fn repel(&mut self, pointer: Vec2, bounds: Bounds, params: &FieldParams) {
        let margin = self.size * params.repulsion_margin_factor;
        let step = params.repulsion_step;
        self.position.x = repel_axis(self.position.x, pointer.x, bounds.width, margin, step);
        self.position.y = repel_axis(self.position.y, pointer.y, bounds.height, margin, step);
    }

    /// Glowing dot of `size` radius in the particle color.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, glow: f32) {
        surface.fill_circle(self.position, self.size, self.color, glow);
    }

    /// One full tick for this particle: `step` followed by `draw`.
    pub fn advance<S: Surface + ?Sized>(
        &mut self,
        pointer: Option<&Circle>,
        bounds: Bounds,
        params: &FieldParams,
        surface: &mut S,
    ) {
        self.step(pointer, bounds, params);
        self.draw(surface, params.glow_blur);
    }
}

#[inline]
fn repel_axis(coord: f32, pointer: f32, bound: f32, margin: f32, step: f32) -> f32 {
    let within = |c: f32| c >= margin && c <= bound - margin;
    let mut coord = coord;
    if pointer < coord && within(coord + step) {
        coord += step;
    }
    if pointer > coord && within(coord - step) {
        coord -= step;
    }
    coord
}
