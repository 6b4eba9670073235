//! Application state and logic.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::TrajectoryTable;
use crate::error::Result;
use crate::plot::Figure;
use crate::ui::{PlotLayoutConfig, ThemeColors};

/// Default trajectory log, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/data_plane.txt";

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Path the trajectory was loaded from.
    pub file_path: PathBuf,
    /// Figure built from the trajectory.
    pub figure: Figure,
    /// Chart layout settings.
    pub layout: PlotLayoutConfig,
    /// Frame colors.
    pub colors: ThemeColors,
    /// Set once the user closes the figure.
    pub should_quit: bool,
}

impl App {
    /// Create the application for an already loaded trajectory.
    pub fn new(file_path: PathBuf, table: &TrajectoryTable) -> Self {
        Self {
            file_path,
            figure: Figure::from_table(table),
            layout: PlotLayoutConfig::default(),
            colors: ThemeColors::default(),
            should_quit: false,
        }
    }

    /// Load a trajectory log and build its figure.
    pub fn load(path: &Path) -> Result<Self> {
        let table = TrajectoryTable::load(path)?;
        Ok(Self::new(path.to_path_buf(), &table))
    }

    /// Handle a key press. Returns `true` if the figure should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (_, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                tracing::debug!("Figure closed by {:?}", key.code);
                self.should_quit = true;
            },
            _ => {},
        }
        self.should_quit
    }
}
