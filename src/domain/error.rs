use thiserror::Error;

/// Errors raised by grid construction and buffer exchange.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },
    #[error("a {rows}x{cols} grid does not fit in memory")]
    TooLarge { rows: i64, cols: i64 },
    #[error("cannot exchange a {found:?} grid with a {expected:?} grid")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
