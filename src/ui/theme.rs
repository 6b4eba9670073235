//! Colors for the figure frame.
//!
//! Series colors are fixed in [`crate::plot`]; these only style the chrome.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Axis and label text color.
    pub text: Color,
    /// Subplot border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Key hint color in the status bar.
    pub key_hint: Color,
}

impl ThemeColors {
    /// Gruvbox dark palette.
    pub fn gruvbox_dark() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),
            text: Color::Rgb(235, 219, 178),
            border: Color::Rgb(102, 92, 84),
            status_fg: Color::Rgb(235, 219, 178),
            status_bg: Color::Rgb(60, 56, 54),
            key_hint: Color::Rgb(251, 184, 108),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}
