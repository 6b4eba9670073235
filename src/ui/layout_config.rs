//! Layout configuration constants for the figure.

/// Configuration for subplot charts.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.05 = 5% margin).
    pub y_axis_padding_factor: f64,
    /// Columns lost to borders and Y-axis labels when sizing the downsampling.
    pub label_margin: u16,
    /// Height of the status bar.
    pub status_height: u16,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.05,
            label_margin: 8,
            status_height: 1,
        }
    }
}

impl PlotLayoutConfig {
    /// Time axis bounds: the exact range.
    pub fn x_bounds(&self, range: Option<(f64, f64)>) -> [f64; 2] {
        pad(range, 0.0)
    }

    /// Value axis bounds: the range plus a margin on both sides.
    pub fn y_bounds(&self, range: Option<(f64, f64)>) -> [f64; 2] {
        pad(range, self.y_axis_padding_factor)
    }
}

// A zero span is widened to ±1 so the chart never collapses.
fn pad(range: Option<(f64, f64)>, factor: f64) -> [f64; 2] {
    let Some((lo, hi)) = range else {
        return [0.0, 1.0];
    };
    let span = hi - lo;
    if span <= 0.0 {
        return [lo - 1.0, hi + 1.0];
    }
    let margin = span * factor;
    [lo - margin, hi + margin]
}
