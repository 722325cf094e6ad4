use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the farepath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Route searches never produce an `Error`; their failure modes are values of
/// [`crate::RouteOutcome`]. This type covers the edge-list I/O around them.
#[derive(Debug, Error)]
pub enum Error {
    /// Edge-list file could not be located at the given path.
    #[error("edge list not found at {path}")]
    EdgeListNotFound { path: PathBuf },

    /// Raised when an edge cannot be written because it breaks a graph invariant.
    #[error("invalid edge: {message}")]
    InvalidEdge { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader/writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
