//! Error types for the `seabed-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`].

use std::path::PathBuf;

use seabed_types::{Coord, ResourceKind};

/// Errors that can occur while loading or combining grid data.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A data file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file or directory being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A row of a data file was malformed.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// 1-indexed line number (0 for file-level problems).
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// A world file left at least one cell unpopulated.
    #[error("{path}: no tile given for cell {at}")]
    MissingCell {
        /// The world file.
        path: PathBuf,
        /// The first unpopulated cell in row-major order.
        at: Coord,
    },

    /// Two grids that must overlay each other have different sizes.
    #[error("grid size mismatch: expected {expected_width}x{expected_height}, found {found_width}x{found_height}")]
    DimensionMismatch {
        /// Width of the reference grid.
        expected_width: usize,
        /// Height of the reference grid.
        expected_height: usize,
        /// Width of the offending grid.
        found_width: usize,
        /// Height of the offending grid.
        found_height: usize,
    },

    /// An operation needed at least one map but the series was empty.
    #[error("resource series for {0} is empty")]
    EmptySeries(ResourceKind),
}

impl WorldError {
    /// Build a [`WorldError::Parse`] for a specific line.
    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
