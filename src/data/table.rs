//! Trajectory sample table and its named series.

use super::reader::read_table;
use crate::error::{PlotError, Result};
use ndarray::{Array2, ArrayView1};
use std::path::Path;

/// One named column of a glider trajectory log.
///
/// The discriminant order is the column order written by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    /// East position.
    X,
    /// North position.
    Y,
    /// Altitude.
    Z,
    /// Airspeed.
    V,
    /// Flight-path angle.
    Gamma,
    /// Heading.
    Khi,
    /// Angle of attack.
    Alpha,
    /// Sideslip angle.
    Beta,
    /// Bank angle.
    Sigma,
    /// Simulation time.
    T,
}

impl Series {
    /// Every series, in column order.
    pub const ALL: [Series; 10] = [
        Series::X,
        Series::Y,
        Series::Z,
        Series::V,
        Series::Gamma,
        Series::Khi,
        Series::Alpha,
        Series::Beta,
        Series::Sigma,
        Series::T,
    ];

    /// Number of columns a trajectory log must provide.
    pub const COUNT: usize = Self::ALL.len();

    /// Column index of this series in the log.
    pub fn column(self) -> usize {
        self as usize
    }

    /// Label used in legends.
    pub fn name(self) -> &'static str {
        match self {
            Series::X => "x",
            Series::Y => "y",
            Series::Z => "z",
            Series::V => "V",
            Series::Gamma => "gamma",
            Series::Khi => "khi",
            Series::Alpha => "alpha",
            Series::Beta => "beta",
            Series::Sigma => "sigma",
            Series::T => "t",
        }
    }
}

/// The whole trajectory log, held in memory for the lifetime of the program.
#[derive(Debug, Clone)]
pub struct TrajectoryTable {
    data: Array2<f64>,
}

impl TrajectoryTable {
    /// Bind a numeric table to the trajectory series.
    ///
    /// Columns beyond the tenth are kept but never bound.
    pub fn new(data: Array2<f64>) -> Result<Self> {
        if data.ncols() < Series::COUNT {
            return Err(PlotError::MissingColumns {
                expected: Series::COUNT,
                found: data.ncols(),
            });
        }
        Ok(Self { data })
    }

    /// Read and bind a trajectory log.
    pub fn load(path: &Path) -> Result<Self> {
        let table = Self::new(read_table(path)?)?;
        tracing::info!(
            "Loaded {} samples from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Whether the log has no time steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of one series across all time steps.
    pub fn column(&self, series: Series) -> ArrayView1<'_, f64> {
        self.data.column(series.column())
    }

    /// The time axis.
    pub fn time(&self) -> ArrayView1<'_, f64> {
        self.column(Series::T)
    }

    /// Pair each value of `series` with its time stamp.
    pub fn points(&self, series: Series) -> Vec<(f64, f64)> {
        self.time()
            .iter()
            .zip(self.column(series).iter())
            .map(|(&t, &v)| (t, v))
            .collect()
    }
}
