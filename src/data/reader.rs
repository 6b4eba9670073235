//! Whitespace-delimited numeric table reader.

use crate::error::{PlotError, Result};
use ndarray::Array2;
use std::path::Path;

/// Marks the start of a comment; the rest of the line is ignored.
const COMMENT: char = '#';

/// Read a whitespace-delimited numeric table into a 2D array.
///
/// Each non-blank line becomes one row. Every row must be as wide as the first.
/// A file without data lines yields a `0 x 0` array.
pub fn read_table(path: &Path) -> Result<Array2<f64>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;

    let table = parse_table(&text)?;
    tracing::debug!(
        "Read {} x {} table from {}",
        table.nrows(),
        table.ncols(),
        path.display()
    );
    Ok(table)
}

/// Parse table text already held in memory.
pub fn parse_table(text: &str) -> Result<Array2<f64>> {
    let mut values = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split(COMMENT).next().unwrap_or("");

        let start = values.len();
        for token in content.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| PlotError::parse(line, token))?;
            values.push(value);
        }

        let found = values.len() - start;
        if found == 0 {
            continue;
        }

        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(PlotError::RaggedRow {
                    line,
                    expected,
                    found,
                });
            },
            Some(_) => {},
        }
        rows += 1;
    }

    let cols = width.unwrap_or(0);
    Ok(Array2::from_shape_vec((rows, cols), values)?)
}
