//! Error types for the constellation field.
//!
//! Steady-state ticks never fail; errors only come out of construction:
//! resolving style options, loading a style file, or acquiring a window to
//! draw on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    /// No window or drawing context could be acquired for the surface.
    #[error("could not acquire a 2D drawing context for the field")]
    ContextUnavailable,

    /// A style option had a value that could not be parsed.
    #[error("invalid value {value:?} for style option `{key}`")]
    InvalidStyle { key: &'static str, value: String },

    /// A style file could not be read or deserialized.
    #[error("failed to load style options: {0}")]
    Config(String),
}

impl From<std::io::Error> for FieldError {
    fn from(e: std::io::Error) -> Self {
        FieldError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(e: serde_json::Error) -> Self {
        FieldError::Config(e.to_string())
    }
}
