//! Status bar UI component.

use super::formatters::{format_axis_label, format_number};
use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Keys that close the figure.
const KEYMAP: &str = "q/Esc:close";

/// Draw the status bar.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let line = Line::from(vec![
        Span::raw(format!(" {} ", status_text(app))),
        Span::styled(
            KEYMAP,
            Style::default()
                .fg(colors.key_hint)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph =
        Paragraph::new(line).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn status_text(app: &App) -> String {
    let file_name = app
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| app.file_path.display().to_string());

    let time = match app.figure.time_range {
        Some((lo, hi)) => format!("t {} .. {}", format_axis_label(lo), format_axis_label(hi)),
        None => "t ?".to_string(),
    };

    format!(
        "{} | {} samples | {} |",
        file_name,
        format_number(app.figure.samples),
        time
    )
}
