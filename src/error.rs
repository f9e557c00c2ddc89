//! Error types for pixeltrace operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pixeltrace operations.
///
/// The taxonomy is deliberately small: line rasterizers accept every pair of
/// integer endpoints, so the only rejectable inputs are a circle radius
/// below 1 and an unrecognized algorithm name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Circle radius below the minimum of 1.
    #[error("Invalid radius: {radius} (must be at least 1)")]
    InvalidRadius {
        /// The rejected radius value.
        radius: i32,
    },

    /// Algorithm name not recognized when parsing.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
