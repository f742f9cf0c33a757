//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the fallible variants of the matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The operation divides by the determinant and it is zero.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },
}

/// Errors that can occur when loading [`CameraControls`](crate::CameraControls).
#[derive(Debug, Error)]
pub enum ControlsError {
    #[error("failed to read camera controls from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid camera controls: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("camera control `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
}
