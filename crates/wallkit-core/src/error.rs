//! Error handling for WallKit
//!
//! Geometry never fails: degenerate input is resolved by fallbacks inside the
//! designer. The errors here cover the two places where outside data enters
//! the engine:
//! - Validation errors (property edits typed by the user)
//! - Import errors (wall lists supplied by an external source)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Raised before any state is mutated. The wall list is unchanged whenever
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input could not be read as a number
    #[error("Invalid {field}: '{input}' is not a number")]
    NotANumber {
        /// The edited property name.
        field: String,
        /// The raw text supplied.
        input: String,
    },

    /// Number parsed but is zero, negative or not finite
    #[error("Invalid {field}: {value} must be a positive number")]
    NotPositive {
        /// The edited property name.
        field: String,
        /// The parsed value.
        value: f64,
    },

    /// Wall index does not refer to a wall in the current list
    #[error("No wall at index {index} (wall count {count})")]
    WallIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of walls in the list.
        count: usize,
    },

    /// Operation needs a selected wall
    #[error("No wall selected")]
    NoSelection,
}

/// Import error type
///
/// Represents problems with an externally supplied wall list.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The payload is not valid JSON or does not have the wall list shape
    #[error("Malformed wall list: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A wall has a negative or non-finite thickness
    #[error("Wall {index} has invalid thickness {thickness}")]
    InvalidThickness {
        /// Position of the wall in the imported list.
        index: usize,
        /// The offending thickness.
        thickness: f64,
    },

    /// A wall has a NaN or infinite coordinate
    #[error("Wall {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the wall in the imported list.
        index: usize,
    },
}

/// Main error type for WallKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Import error
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is an import error
    pub fn is_import_error(&self) -> bool {
        matches!(self, Error::Import(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
