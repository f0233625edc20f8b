/*
 * Field Module
 *
 * This module defines the Field: the particle collection plus the pointer and
 * sizing state for one animated constellation.
 *
 * Each tick:
 * 1. The surface is cleared
 * 2. A marker is drawn at the pointer, if there is one (never simulated)
 * 3. Every particle bounces, flees the pointer, moves and draws itself
 * 4. The connection pass links every pair of particles that are close enough
 *
 * The connection pass is a plain O(n^2) loop over pairs and compares squared
 * distances against a squared threshold. Pointer collision, on the other hand,
 * uses true distances. Both metrics are kept as they are.
 *
 * Pointer and sizing state only change through the setters, between ticks.
 */

use nannou::color::Rgba;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{squared_distance, Bounds, Circle};
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::style::Style;
use crate::surface::Surface;

// Cursor state. The radius is kept up to date even while the cursor is away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl Pointer {
    pub fn circle(&self) -> Option<Circle> {
        self.position.map(|center| Circle {
            center,
            radius: self.radius,
        })
    }
}

pub struct Field {
    particles: Vec<Particle>,
    pointer: Pointer,
    surface: Bounds,
    viewport: Bounds,
    particle_color: Rgba,
    stroke_style: Rgba,
    params: FieldParams,
    rng: StdRng,
    generation: u64,
}

impl Field {
    /// Build a field for a surface of `surface` backing pixels inside a window
    /// of `viewport` pixels, and populate it. `seed` makes the population
    /// reproducible.
    pub fn new(
        surface: Bounds,
        viewport: Bounds,
        style: &Style,
        params: FieldParams,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut field = Self {
            particles: Vec::new(),
            pointer: Pointer {
                position: None,
                radius: params.pointer_radius(surface.width, surface.height),
            },
            surface,
            viewport,
            particle_color: style.particle_color,
            stroke_style: style.stroke_style,
            params,
            rng,
            generation: 0,
        };
        field.initialize();
        field
    }

    /// Replace the whole particle collection with a fresh generation.
    ///
    /// The count follows the surface area, but positions are sampled over the
    /// window (viewport) size, which differs from the surface when the field
    /// is hosted in a sub-region of the window.
    pub fn initialize(&mut self) {
        let count = self
            .params
            .particle_count(self.surface.width, self.surface.height);

        self.particles.clear();
        self.particles.reserve(count);

        for _ in 0..count {
            let size = sample(&mut self.rng, &self.params.size_range);
            let x = self.rng.gen::<f32>() * (self.viewport.width - size * 2.0).max(0.0);
            let y = self.rng.gen::<f32>() * (self.viewport.height - size * 2.0).max(0.0);
            let speed = self.params.max_speed;
            let velocity = vec2(
                sample(&mut self.rng, &(-speed..speed)),
                sample(&mut self.rng, &(-speed..speed)),
            );
            self.particles
                .push(Particle::new(vec2(x, y), velocity, size, self.particle_color));
        }

        self.generation += 1;
    }

    /// Sizing policy: new backing size and pointer radius. Does not repopulate.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.surface = Bounds::new(width.max(0.0), height.max(0.0));
        self.pointer.radius = self
            .params
            .pointer_radius(self.surface.width, self.surface.height);
    }

    // Window inner size, used for position sampling on the next initialize
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = Bounds::new(width.max(0.0), height.max(0.0));
    }

    /// Move the pointer (surface coordinates) or clear it with `None`.
    pub fn set_pointer(&mut self, position: Option<Vec2>) {
        self.pointer.position = position;
    }

    /// One full frame: clear, pointer marker, advance every particle, connect.
    /// Returns the number of lines drawn.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let pointer = self.pointer.circle();
        let bounds = self.surface;

        surface.clear();
        self.draw_pointer(surface);

        for particle in self.particles.iter_mut() {
            particle.advance(pointer.as_ref(), bounds, &self.params, surface);
        }

        self.connect(surface)
    }

    /// Simulation half of a tick: step every particle without drawing.
    pub fn update(&mut self) {
        let pointer = self.pointer.circle();
        let bounds = self.surface;

        for particle in self.particles.iter_mut() {
            particle.step(pointer.as_ref(), bounds, &self.params);
        }
    }

    /// Rendering half of a tick. Returns the number of lines drawn.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        surface.clear();
        self.draw_pointer(surface);

        for particle in &self.particles {
            particle.draw(surface, self.params.glow_blur);
        }

        self.connect(surface)
    }

    // The pointer is drawn like a motionless particle but never simulated or connected
    fn draw_pointer<S: Surface + ?Sized>(&self, surface: &mut S) {
        if let Some(position) = self.pointer.position {
            surface.fill_circle(
                position,
                self.params.pointer_marker_size,
                self.particle_color,
                self.params.glow_blur,
            );
        }
    }

    /// Connection pass: a line for every pair `i < j` whose squared distance
    /// is below the threshold. Returns the number of lines drawn.
    pub fn connect<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let threshold = self.connect_threshold();
        let mut lines = 0;

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if connected(a.position, b.position, threshold) {
                    surface.stroke_line(
                        a.position,
                        b.position,
                        self.stroke_style,
                        self.params.line_width,
                    );
                    lines += 1;
                }
            }
        }

        lines
    }

    // Squared distance below which two particles are linked
    pub fn connect_threshold(&self) -> f32 {
        self.params
            .connect_threshold(self.surface.width, self.surface.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn surface_size(&self) -> Bounds {
        self.surface
    }

    pub fn viewport_size(&self) -> Bounds {
        self.viewport
    }

    // Number of times the particles have been (re)populated
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut FieldParams {
        &mut self.params
    }
}

/// Two points are connected when their squared distance is strictly below
/// `threshold`.
#[inline]
pub fn connected(p1: Vec2, p2: Vec2, threshold: f32) -> bool {
    squared_distance(p1, p2) < threshold
}

// Uniform sample from a half-open range, collapsing to the start when empty
fn sample(rng: &mut StdRng, range: &std::ops::Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}
