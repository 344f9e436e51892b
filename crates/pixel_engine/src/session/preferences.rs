//! Persisted UI preferences
//!
//! Only the settings that survive a restart are stored: canvas size, grid display,
//! palette name, frame rate and theme. Frames and history are never written here.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_FPS, DEFAULT_PALETTE_NAME, Palette, Result};

use super::{DEFAULT_CANVAS_SIZE, EditorSession};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPreferences {
    #[serde(default = "default_canvas_size")]
    pub canvas_size: i32,

    #[serde(default = "default_true")]
    pub show_grid: bool,

    #[serde(default = "default_palette_name")]
    pub palette_name: String,

    #[serde(default = "default_fps")]
    pub fps: u32,

    #[serde(default)]
    pub theme: Theme,
}

fn default_canvas_size() -> i32 {
    DEFAULT_CANVAS_SIZE
}
fn default_true() -> bool {
    true
}
fn default_palette_name() -> String {
    DEFAULT_PALETTE_NAME.to_string()
}
fn default_fps() -> u32 {
    DEFAULT_FPS
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            canvas_size: default_canvas_size(),
            show_grid: true,
            palette_name: default_palette_name(),
            fps: default_fps(),
            theme: Theme::default(),
        }
    }
}

impl EditorPreferences {
    /// `preferences.toml` in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "pixel_editor").map(|dirs| dirs.config_dir().join("preferences.toml"))
    }

    /// Load from `path`, a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// Returns an I/O error or a TOML parse error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write to `path` through a temp file so a crash never leaves half a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error or a TOML serialization error.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let toml_string = toml::to_string_pretty(self)?;
        let mut write_name = path.to_path_buf();
        write_name.set_extension("new");
        fs::write(&write_name, toml_string)?;
        fs::rename(&write_name, path)?;
        Ok(())
    }
}

impl EditorSession {
    /// Snapshot of the persisted settings
    pub fn preferences(&self) -> EditorPreferences {
        EditorPreferences {
            canvas_size: self.canvas_size,
            show_grid: self.show_grid,
            palette_name: self.palette.name.clone(),
            fps: self.clock.fps(),
            theme: self.theme,
        }
    }

    /// Apply stored settings. An unknown palette name keeps the current palette.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::InvalidCanvasSize`] for a non positive canvas
    /// size; nothing is applied in that case.
    pub fn apply_preferences(&mut self, prefs: &EditorPreferences) -> Result<()> {
        self.set_canvas_size(prefs.canvas_size)?;
        self.show_grid = prefs.show_grid;
        match Palette::builtin(&prefs.palette_name) {
            Some(palette) => self.palette = palette,
            None => log::warn!("unknown palette '{}', keeping '{}'", prefs.palette_name, self.palette.name),
        }
        self.clock.set_fps(prefs.fps);
        self.theme = prefs.theme;
        Ok(())
    }
}
