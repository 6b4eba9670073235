//! Data reading and representation.
//!
//! This module reads simulator trajectory logs and binds their columns
//! to named series.

mod reader;
mod table;

pub use reader::{parse_table, read_table};
pub use table::{Series, TrajectoryTable};
