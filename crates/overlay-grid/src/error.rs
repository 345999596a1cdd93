//! Error types for grid arithmetic.

use thiserror::Error;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors produced by grid construction, lookup, and alignment.
#[derive(Error, Debug)]
pub enum GridError {
    /// Construction parameters do not describe a valid grid.
    #[error("invalid extent: {0}")]
    InvalidExtent(String),

    /// A coordinate fell outside the grid extent by more than tolerance.
    #[error("{axis} = {value} is outside the grid range [{min}, {max}]")]
    OutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The cell lattices of two grids do not nest.
    #[error("grids are not compatible: {0}")]
    IncompatibleGrids(String),
}

impl GridError {
    /// Create an InvalidExtent error.
    pub fn invalid_extent(msg: impl Into<String>) -> Self {
        Self::InvalidExtent(msg.into())
    }

    /// Create an IncompatibleGrids error.
    pub fn incompatible(msg: impl Into<String>) -> Self {
        Self::IncompatibleGrids(msg.into())
    }
}
