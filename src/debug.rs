/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and field state to be displayed in the overlay and the control panel.
 *
 * Includes metrics for:
 * - FPS (frames per second) and frame time
 * - Particle count and generation
 * - Lines drawn by the last connection pass
 * - Pointer presence and surface size
 */

use std::cell::Cell;
use std::time::Duration;

use crate::geometry::Bounds;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub particle_count: usize,
    pub generation: u64,
    // Written by the view, which only gets a shared reference to the model
    pub connections: Cell<usize>,
    pub pointer_present: bool,
    pub surface: Bounds,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            particle_count: 0,
            generation: 0,
            connections: Cell::new(0),
            pointer_present: false,
            surface: Bounds::new(0.0, 0.0),
        }
    }
}
