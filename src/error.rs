//! Error types for grid construction.

use thiserror::Error;

/// Errors that can occur while building a [`crate::Grid`].
#[derive(Debug, Error)]
pub enum GridError {
    /// The live state leaves no room for trace values.
    #[error("live state must be greater than 1, got {0}")]
    InvalidLiveState(u8),

    /// `rows * cols` does not fit in `usize`.
    #[error("a {rows}x{cols} grid has more cells than can be addressed")]
    TooManyCells { rows: usize, cols: usize },

    /// The dedicated step thread pool could not be created.
    #[error("failed to build step thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
