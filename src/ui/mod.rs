//! User interface rendering.

mod figure;
mod formatters;
mod layout_config;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use figure::{downsample, draw_figure};
pub use formatters::{format_axis_label, format_number};
pub use layout_config::PlotLayoutConfig;
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(app.layout.status_height),
        ])
        .split(f.area());

    draw_figure(f, chunks[0], &app.figure, &app.colors, &app.layout);
    draw_status(f, chunks[1], app, &app.colors);
}
