//! Error types for frame writing.

use std::fmt;
use std::io;
use thiserror::Error;

/// Which part of a frame failed the size check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The frame has the wrong number of rows.
    RowCount {
        /// Rows actually present.
        actual: usize,
    },
    /// A row has the wrong number of cells.
    RowWidth {
        /// Index of the first offending row.
        row: usize,
        /// Cells actually present in that row.
        actual: usize,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { actual } => write!(f, "frame has {actual} rows"),
            Self::RowWidth { row, actual } => write!(f, "row {row} has {actual} cells"),
        }
    }
}

/// Errors produced by the frame writer.
#[derive(Debug, Error)]
pub enum Error {
    /// A submitted frame does not match the writer's width and height.
    #[error("frame does not match writer size {width}x{height}: {mismatch}")]
    SizeMismatch {
        /// Configured width in cells.
        width: usize,
        /// Configured height in rows.
        height: usize,
        /// The first mismatch found.
        mismatch: Mismatch,
    },

    /// Writer dimensions must be positive.
    #[error("invalid writer dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The output sink failed while writing or flushing.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_message() {
        let err = Error::SizeMismatch {
            width: 3,
            height: 2,
            mismatch: Mismatch::RowWidth { row: 1, actual: 4 },
        };
        assert_eq!(
            err.to_string(),
            "frame does not match writer size 3x2: row 1 has 4 cells"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "pipe closed");
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
