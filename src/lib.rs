//! l2f-plot - terminal plots of glider trajectory logs.
//!
//! Reads the state log written by the L2Fsim glider simulator and shows
//! altitude, airspeed, path angles and attitude angles against time in a
//! 2x2 grid of charts.
//!
//! # Log format
//!
//! One row per time step, ten whitespace-separated numbers per row:
//! `x y z V gamma khi alpha beta sigma t`.
//!
//! # Example
//!
//! ```ignore
//! use l2f_plot::data::{Series, TrajectoryTable};
//! use l2f_plot::plot::Figure;
//! use std::path::Path;
//!
//! let table = TrajectoryTable::load(Path::new("data/data_plane.txt"))?;
//! let figure = Figure::from_table(&table);
//! println!("{} samples, z starts at {}", figure.samples, table.column(Series::Z)[0]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod plot;
pub mod ui;

pub use error::{PlotError, Result};
