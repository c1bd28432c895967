//! Error types for loading parameters and snapshots.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures when reading configuration or importing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error, including invalid input cells.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Row or column count outside `1..=5`.
    #[error("dimensions {rows}x{cols} are out of range (1..=5)")]
    DimensionsOutOfRange {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A matrix does not have the declared shape.
    #[error("{matrix} matrix is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    ShapeMismatch {
        /// Which matrix is malformed.
        matrix: &'static str,
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
        /// Actual row count.
        actual_rows: usize,
        /// Actual column count.
        actual_cols: usize,
    },

    /// NaN or infinite value where a real number is required.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}
