//! Color palettes
//!
//! Palettes are supplied by the host, the engine only keeps the current one around
//! so tools can offer it. `gameboy` is built in because the session defaults use it.

use serde::{Deserialize, Serialize};

use crate::{Color, Result};

pub const DEFAULT_PALETTE_NAME: &str = "gameboy";

const GAMEBOY: [Color; 4] = [
    Color::new(0x0f, 0x38, 0x0f),
    Color::new(0x30, 0x62, 0x30),
    Color::new(0x8b, 0xac, 0x0f),
    Color::new(0x9b, 0xbc, 0x0f),
];

/// A named, ordered list of colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::gameboy()
    }
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self { name: name.into(), colors }
    }

    /// # Errors
    ///
    /// Returns [`crate::EditorError::InvalidColor`] for the first entry that isn't a hex color.
    pub fn from_hex_list(name: impl Into<String>, colors: &[&str]) -> Result<Self> {
        let colors = colors.iter().map(|hex| Color::from_hex(hex)).collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, colors))
    }

    pub fn gameboy() -> Self {
        Self::new(DEFAULT_PALETTE_NAME, GAMEBOY.to_vec())
    }

    /// Look up a built in palette by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            DEFAULT_PALETTE_NAME => Some(Self::gameboy()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }
}
