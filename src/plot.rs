//! Figure model: which series go in which subplot, and how they look.
//!
//! The figure is a fixed 2x2 grid. Rendering lives in [`crate::ui`]; this
//! module only decides what gets plotted.

use crate::data::{Series, TrajectoryTable};
use ratatui::style::Color;

/// An RGB triple fixed per series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation, e.g. `#6699ff`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// `#6699ff`
pub const BLUE: Rgb = Rgb(0x66, 0x99, 0xff);
/// `#ff6600`
pub const ORANGE: Rgb = Rgb(0xff, 0x66, 0x00);
/// `#00cc66`
pub const GREEN: Rgb = Rgb(0x00, 0xcc, 0x66);

impl Series {
    /// Line color of this series.
    pub fn rgb(self) -> Rgb {
        match self {
            Series::Khi | Series::Beta => ORANGE,
            Series::Sigma => GREEN,
            _ => BLUE,
        }
    }
}

/// Corner of a subplot where its legend is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendLocation {
    /// Upper-left corner.
    #[default]
    UpperLeft,
}

/// Placement and content of one subplot, before any data is attached.
#[derive(Debug, Clone, Copy)]
pub struct SubplotSpec {
    /// 1-based grid row.
    pub row: usize,
    /// 1-based grid column.
    pub col: usize,
    /// Series plotted against time, in drawing order.
    pub series: &'static [Series],
}

/// Number of grid rows.
pub const GRID_ROWS: usize = 2;
/// Number of grid columns.
pub const GRID_COLS: usize = 2;

/// The fixed figure layout.
pub const LAYOUT: [SubplotSpec; GRID_ROWS * GRID_COLS] = [
    SubplotSpec {
        row: 1,
        col: 1,
        series: &[Series::Z],
    },
    SubplotSpec {
        row: 1,
        col: 2,
        series: &[Series::V],
    },
    SubplotSpec {
        row: 2,
        col: 1,
        series: &[Series::Gamma, Series::Khi],
    },
    SubplotSpec {
        row: 2,
        col: 2,
        series: &[Series::Alpha, Series::Beta, Series::Sigma],
    },
];

/// One series ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Series this line shows.
    pub series: Series,
    /// `(t, value)` pairs in row order.
    pub points: Vec<(f64, f64)>,
}

impl Line {
    /// Legend label.
    pub fn label(&self) -> &'static str {
        self.series.name()
    }

    /// Line color.
    pub fn color(&self) -> Color {
        self.series.rgb().into()
    }
}

/// One cell of the figure grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    /// 1-based grid row.
    pub row: usize,
    /// 1-based grid column.
    pub col: usize,
    /// Lines in drawing order.
    pub lines: Vec<Line>,
    /// Legend corner.
    pub legend: LegendLocation,
}

impl Subplot {
    /// Legend entries in drawing order.
    pub fn legend_labels(&self) -> Vec<&'static str> {
        self.lines.iter().map(Line::label).collect()
    }

    /// Smallest and largest finite value over every line, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(self.lines.iter().flat_map(|l| l.points.iter().map(|p| p.1)))
    }
}

/// The complete 2x2 figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Subplots in row-major order.
    pub subplots: Vec<Subplot>,
    /// Finite time range shared by every subplot.
    pub time_range: Option<(f64, f64)>,
    /// Number of samples plotted per line.
    pub samples: usize,
}

impl Figure {
    /// Attach trajectory data to the fixed layout.
    pub fn from_table(table: &TrajectoryTable) -> Self {
        let subplots = LAYOUT
            .iter()
            .map(|spec| Subplot {
                row: spec.row,
                col: spec.col,
                lines: spec
                    .series
                    .iter()
                    .map(|&series| Line {
                        series,
                        points: table.points(series),
                    })
                    .collect(),
                legend: LegendLocation::UpperLeft,
            })
            .collect();

        let time_range = finite_range(table.time().iter().copied());
        if time_range.is_none() && !table.is_empty() {
            tracing::warn!("Time column has no finite values");
        }

        Self {
            subplots,
            time_range,
            samples: table.len(),
        }
    }

    /// Subplot at a 1-based grid position.
    pub fn subplot(&self, row: usize, col: usize) -> Option<&Subplot> {
        self.subplots.iter().find(|s| s.row == row && s.col == col)
    }
}

/// Min and max of the finite values, or `None` if there are none.
pub fn finite_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
