//! Subplot grid rendering.

use super::formatters::format_axis_label;
use super::{PlotLayoutConfig, ThemeColors};
use crate::plot::{Figure, LegendLocation, Subplot, GRID_COLS, GRID_ROWS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

/// Draw the 2x2 figure into `area`.
pub fn draw_figure(
    f: &mut Frame<'_>,
    area: Rect,
    figure: &Figure,
    colors: &ThemeColors,
    config: &PlotLayoutConfig,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
        .split(area);

    for subplot in &figure.subplots {
        let Some(row_area) = rows.get(subplot.row - 1) else {
            continue;
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS])
            .split(*row_area);
        if let Some(cell) = cells.get(subplot.col - 1) {
            draw_subplot(f, *cell, subplot, figure.time_range, colors, config);
        }
    }
}

fn draw_subplot(
    f: &mut Frame<'_>,
    area: Rect,
    subplot: &Subplot,
    time_range: Option<(f64, f64)>,
    colors: &ThemeColors,
    config: &PlotLayoutConfig,
) {
    let bins = area.width.saturating_sub(config.label_margin).max(1) as usize;
    let series: Vec<Vec<(f64, f64)>> = subplot
        .lines
        .iter()
        .map(|line| downsample(&line.points, bins))
        .collect();

    let datasets: Vec<Dataset<'_>> = subplot
        .lines
        .iter()
        .zip(&series)
        .map(|(line, points)| {
            Dataset::default()
                .name(line.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line.color()))
                .data(points)
        })
        .collect();

    let [x_min, x_max] = config.x_bounds(time_range);
    let x_axis = Axis::default()
        .title("t")
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(axis_labels(x_min, x_max));

    let [y_min, y_max] = config.y_bounds(subplot.value_range());
    let y_axis = Axis::default()
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(axis_labels(y_min, y_max));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(legend_position(subplot.legend)))
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));

    f.render_widget(chart, area);
}

fn legend_position(location: LegendLocation) -> LegendPosition {
    match location {
        LegendLocation::UpperLeft => LegendPosition::TopLeft,
    }
}

fn axis_labels(min: f64, max: f64) -> Vec<String> {
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}

/// Reduce a series to at most `bins` points by even striding.
///
/// The first point is always kept. Shorter series are returned unchanged.
pub fn downsample(points: &[(f64, f64)], bins: usize) -> Vec<(f64, f64)> {
    let bins = bins.max(1);
    if points.len() <= bins {
        return points.to_vec();
    }
    (0..bins).map(|i| points[i * points.len() / bins]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<(f64, f64)> {
        (0..n).map(|i| (i as f64, (i * 2) as f64)).collect()
    }

    #[test]
    fn short_series_is_untouched() {
        let points = ramp(5);
        assert_eq!(downsample(&points, 10), points);
    }

    #[test]
    fn long_series_fits_bins() {
        let points = ramp(1000);
        let reduced = downsample(&points, 37);
        assert_eq!(reduced.len(), 37);
        assert_eq!(reduced[0], (0.0, 0.0));
        assert!(reduced.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn zero_bins_keeps_one_point() {
        assert_eq!(downsample(&ramp(4), 0), vec![(0.0, 0.0)]);
    }

    #[test]
    fn legend_goes_top_left() {
        assert_eq!(
            legend_position(LegendLocation::UpperLeft),
            LegendPosition::TopLeft
        );
    }
}
