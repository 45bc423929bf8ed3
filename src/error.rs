use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a grid of codes cannot be turned into a [Layout](crate::layout::Layout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("no start found")]
    NoStart,
    #[error("no end found")]
    NoEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The layout was rejected at construction.
    #[error("invalid layout: {0}")]
    InvalidLayout(#[from] LayoutError),
    /// A result was queried without a successful search before it.
    #[error("path not found, call search first")]
    PathNotFound,
}
