//! # Mesh Errors
//!
//! Error types for enclosure generation.

use thiserror::Error;

/// Errors that can occur while preparing or emitting an enclosure mesh.
///
/// Geometry construction itself never fails; errors come from rejecting
/// settings up front or from the output sink.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A settings field is out of range for the requested geometry
    #[error("Invalid settings: {field}: {message}")]
    InvalidSettings { field: &'static str, message: String },

    /// Writing the serialized mesh failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid settings error.
    pub fn invalid_settings(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            field,
            message: message.into(),
        }
    }
}
