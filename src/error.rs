//! Error types for l2f-plot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for l2f-plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading or displaying a trajectory.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to open or read the data file.
    #[error("Failed to open file: {}", path.display())]
    FileOpen {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A token could not be parsed as a floating-point number.
    #[error("Parse error on line {line}: '{token}' is not a number")]
    Parse {
        /// 1-based line number in the data file.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// A row does not have the same width as the first row.
    #[error("Line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        /// 1-based line number in the data file.
        line: usize,
        /// Width of the first data row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// The table is too narrow to bind every trajectory series.
    #[error("Trajectory table has {found} columns, expected at least {expected}")]
    MissingColumns {
        /// Number of columns required.
        expected: usize,
        /// Number of columns present.
        found: usize,
    },

    /// Parsed values do not fill a rectangular table.
    #[error("Invalid table shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, token: impl Into<String>) -> Self {
        Self::Parse {
            line,
            token: token.into(),
        }
    }
}
