/*
 * Constellation - Module Definitions
 *
 * This file defines the module structure for the constellation effect.
 * The simulation core (particle, field, geometry, params) has no window
 * dependency beyond nannou's math and color types; the rest wires it into a
 * nannou window.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use error::FieldError;
pub use field::{connected, Field, Pointer};
pub use geometry::{circle_collision, squared_distance, Bounds, Circle};
pub use handle::{create_field, FieldHandle};
pub use params::FieldParams;
pub use particle::Particle;
pub use style::{Style, StyleOptions};
pub use surface::{DrawCommand, Recorder, Surface};
pub use viewport::{HostRegion, Placement, Viewport};

// Define modules
pub mod app;
pub mod config;
pub mod debug;
pub mod error;
pub mod field;
pub mod geometry;
pub mod handle;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod ui;
pub mod viewport;
