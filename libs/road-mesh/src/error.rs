//! # Mesh Errors
//!
//! Error types for edge extrusion, welding and composite assembly.
//!
//! ## Error Policy
//!
//! - Invalid input aborts the operation that detected it
//! - Composite builders propagate errors from their sub-steps
//! - Zero-area faces are not errors unless strict welding is enabled

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating road geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A parameter or point set failed validation.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// The source edge of an extrusion has (near) zero length.
    #[error("Degenerate edge: length {length} is too short to define a frame")]
    DegenerateEdge {
        /// Measured edge length
        length: f64,
    },

    /// An extrusion direction vanished after normalization or projection.
    #[error("Extrusion direction has zero magnitude")]
    ZeroDirection,

    /// Quad edges are numbered 0..=3.
    #[error("Edge index {index} is out of range for a quad")]
    EdgeIndexOutOfRange {
        /// Requested edge index
        index: usize,
    },

    /// A zero-area face was submitted while strict welding is enabled.
    #[error("Degenerate face rejected in strict mode")]
    DegenerateFace,

    /// Weld tolerances failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for road mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_input("width must be positive");
        assert!(err.to_string().contains("width must be positive"));

        let err = MeshError::EdgeIndexOutOfRange { index: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidTolerance(-1.0).into();
        assert!(matches!(err, MeshError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
