//! Column binding, figure layout and rendering tests on synthetic logs.

use l2f_plot::app::App;
use l2f_plot::data::{Series, TrajectoryTable};
use l2f_plot::plot::Figure;
use l2f_plot::{ui, PlotError};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use std::io::Write;
use tempfile::NamedTempFile;

/// Value of column `col` at row `row` in the synthetic log.
fn cell(row: usize, col: usize) -> f64 {
    if col == 9 {
        row as f64 * 0.5
    } else {
        (col * 100 + row) as f64 + 0.25
    }
}

fn write_log(rows: usize, cols: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for r in 0..rows {
        let line: Vec<String> = (0..cols).map(|c| format!("{:.6}", cell(r, c))).collect();
        writeln!(file, "{}", line.join(" ")).unwrap();
    }
    file.flush().unwrap();
    file
}

fn expected_points(series: Series, rows: usize) -> Vec<(f64, f64)> {
    (0..rows)
        .map(|r| (cell(r, 9), cell(r, series.column())))
        .collect()
}

#[test]
fn subplots_receive_exact_column_slices() {
    let rows = 7;
    let file = write_log(rows, 10);
    let table = TrajectoryTable::load(file.path()).unwrap();
    let figure = Figure::from_table(&table);

    let layout: [((usize, usize), &[Series]); 4] = [
        ((1, 1), &[Series::Z]),
        ((1, 2), &[Series::V]),
        ((2, 1), &[Series::Gamma, Series::Khi]),
        ((2, 2), &[Series::Alpha, Series::Beta, Series::Sigma]),
    ];

    for ((row, col), series) in layout {
        let subplot = figure.subplot(row, col).unwrap();
        assert_eq!(subplot.lines.len(), series.len());
        for (line, &expected) in subplot.lines.iter().zip(series) {
            assert_eq!(line.series, expected);
            assert_eq!(line.points, expected_points(expected, rows));
        }
    }
}

#[test]
fn time_axis_is_column_nine_for_any_length() {
    for rows in [1, 2, 50] {
        let file = write_log(rows, 10);
        let table = TrajectoryTable::load(file.path()).unwrap();
        let figure = Figure::from_table(&table);

        let t: Vec<f64> = (0..rows).map(|r| cell(r, 9)).collect();
        for line in figure.subplots.iter().flat_map(|s| &s.lines) {
            let xs: Vec<f64> = line.points.iter().map(|p| p.0).collect();
            assert_eq!(xs, t);
        }
        assert_eq!(figure.samples, rows);
    }
}

#[test]
fn fewer_than_ten_columns_fails() {
    let file = write_log(4, 9);
    let err = TrajectoryTable::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        PlotError::MissingColumns {
            expected: 10,
            found: 9
        }
    ));
}

#[test]
fn empty_file_fails() {
    let file = write_log(0, 10);
    let err = TrajectoryTable::load(file.path()).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumns { found: 0, .. }));
}

#[test]
fn legend_labels_match_layout() {
    let file = write_log(3, 10);
    let figure = Figure::from_table(&TrajectoryTable::load(file.path()).unwrap());

    assert_eq!(figure.subplot(1, 1).unwrap().legend_labels(), ["z"]);
    assert_eq!(figure.subplot(1, 2).unwrap().legend_labels(), ["V"]);
    assert_eq!(figure.subplot(2, 1).unwrap().legend_labels(), ["gamma", "khi"]);
    assert_eq!(
        figure.subplot(2, 2).unwrap().legend_labels(),
        ["alpha", "beta", "sigma"]
    );
}

#[test]
fn colors_are_stable_across_loads() {
    for _ in 0..2 {
        let file = write_log(3, 10);
        let figure = Figure::from_table(&TrajectoryTable::load(file.path()).unwrap());
        for line in figure.subplots.iter().flat_map(|s| &s.lines) {
            assert_eq!(line.color(), Color::from(line.series.rgb()));
        }
        let z = &figure.subplot(1, 1).unwrap().lines[0];
        assert_eq!(z.series.rgb().hex(), "#6699ff");
    }
}

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Index of the first cell where `text` starts, reading cells in order.
fn find_text(buffer: &Buffer, text: &str) -> Option<usize> {
    let cells = buffer.content();
    let wanted: Vec<String> = text.chars().map(|c| c.to_string()).collect();
    (0..cells.len().saturating_sub(wanted.len() - 1)).find(|&start| {
        wanted
            .iter()
            .enumerate()
            .all(|(i, w)| cells[start + i].symbol() == w)
    })
}

#[test]
fn rendered_figure_shows_every_legend_in_series_color() {
    let file = write_log(20, 10);
    let app = App::load(file.path()).unwrap();
    let buffer = render(&app, 160, 40);

    for series in [
        Series::Z,
        Series::V,
        Series::Gamma,
        Series::Khi,
        Series::Alpha,
        Series::Beta,
        Series::Sigma,
    ] {
        let idx = find_text(&buffer, series.name())
            .unwrap_or_else(|| panic!("legend entry '{}' not drawn", series.name()));
        if series.name().len() > 1 {
            assert_eq!(buffer.content()[idx].fg, Color::from(series.rgb()));
        }
    }
}

#[test]
fn status_bar_reports_samples_and_keys() {
    let file = write_log(1200, 10);
    let app = App::load(file.path()).unwrap();
    let buffer = render(&app, 120, 30);

    assert!(find_text(&buffer, "1,200 samples").is_some());
    assert!(find_text(&buffer, "q/Esc:close").is_some());
}
