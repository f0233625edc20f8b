/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct holding the constants that drive
 * the constellation simulation, plus the runtime flags exposed in the debug
 * panel. Flag change detection works through snapshots so the app knows when
 * a redraw or a reinitialization is needed.
 */

use std::ops::Range;

// Parameters for the field; the defaults reproduce the classic effect
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub area_per_particle: f32,     // One particle per this many square pixels
    pub size_range: Range<f32>,     // Particle radius, sampled half-open
    pub max_speed: f32,             // Velocity components sampled in [-max_speed, max_speed)
    pub repulsion_step: f32,        // Distance a particle is pushed away from the pointer per tick
    pub repulsion_margin_factor: f32, // Margin from the edges is size * factor
    pub glow_blur: f32,
    pub connect_divisor: f32,       // Threshold is (width / d) * (height / d)
    pub pointer_radius_divisor: f32, // Pointer radius is (height / d) * (width / d)
    pub pointer_marker_size: f32,
    pub line_width: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,
    pub reinit_on_resize: bool,

    // Internal state for tracking changes
    pub(crate) previous_values: Option<ParamSnapshot>,
}

// A snapshot of the runtime flags used for change detection
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ParamSnapshot {
    show_debug: bool,
    pause_simulation: bool,
    reinit_on_resize: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            area_per_particle: 7000.0,
            size_range: 1.0..6.0,
            max_speed: 0.5,
            repulsion_step: 10.0,
            repulsion_margin_factor: 10.0,
            glow_blur: 10.0,
            connect_divisor: 7.0,
            pointer_radius_divisor: 80.0,
            pointer_marker_size: 3.0,
            line_width: 1.0,
            show_debug: false,
            pause_simulation: false,
            reinit_on_resize: false,
            previous_values: None,
        }
    }
}

impl FieldParams {
    /// Number of particles for a surface: `floor(width * height / area_per_particle)`.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        let area = width * height;
        if area.is_nan() || area <= 0.0 || self.area_per_particle <= 0.0 {
            return 0;
        }
        (area / self.area_per_particle).floor() as usize
    }

    /// Squared-distance threshold below which two particles get connected.
    pub fn connect_threshold(&self, width: f32, height: f32) -> f32 {
        (width / self.connect_divisor) * (height / self.connect_divisor)
    }

    pub fn pointer_radius(&self, width: f32, height: f32) -> f32 {
        (height / self.pointer_radius_divisor) * (width / self.pointer_radius_divisor)
    }

    // Take a snapshot of current flag values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Returns true when any flag changed since the last snapshot
    pub fn detect_changes(&self) -> bool {
        match &self.previous_values {
            Some(prev) => *prev != self.snapshot(),
            None => false,
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
            reinit_on_resize: self.reinit_on_resize,
        }
    }
}
