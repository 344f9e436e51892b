//! Pixel dump and ASCII art
//!
//! The dump is the exchange format for export collaborators: per frame a list of
//! `(x, y, color)` triples that reconstructs the grid exactly. It is written as
//! JSON with the pixels in row major order so dumps diff cleanly.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Color, EditorError, Grid, Position, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameDump {
    #[serde(default)]
    pub pixels: Vec<Pixel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelDump {
    pub canvas_size: i32,
    pub frames: Vec<FrameDump>,
}

impl Grid {
    /// All colored cells as dump triples, row major
    pub fn to_pixels(&self) -> Vec<Pixel> {
        self.sorted_pixels()
            .into_iter()
            .map(|(pos, color)| Pixel { x: pos.x, y: pos.y, color })
            .collect()
    }

    /// Rebuild a grid from dump triples
    ///
    /// # Errors
    ///
    /// [`EditorError::InvalidCanvasSize`] for a non positive size,
    /// [`EditorError::OutOfBounds`] for the first triple outside the canvas.
    pub fn from_pixels(size: i32, pixels: impl IntoIterator<Item = Pixel>) -> Result<Grid> {
        let grid = Grid::new(size)?;
        let pixels: Vec<Pixel> = pixels.into_iter().collect();
        if let Some(p) = pixels.iter().find(|p| !Position::new(p.x, p.y).is_inside(size)) {
            return Err(EditorError::out_of_bounds(Position::new(p.x, p.y), size));
        }
        Ok(grid.edit(|edit| {
            for p in &pixels {
                edit.put(Position::new(p.x, p.y), p.color);
            }
        }))
    }
}

impl PixelDump {
    pub fn from_grids<'a>(canvas_size: i32, grids: impl IntoIterator<Item = &'a Grid>) -> Self {
        let frames = grids.into_iter().map(|grid| FrameDump { pixels: grid.to_pixels() }).collect();
        Self { canvas_size, frames }
    }

    /// # Errors
    ///
    /// See [`Grid::from_pixels`].
    pub fn to_grids(&self) -> Result<Vec<Grid>> {
        self.frames.iter().map(|frame| Grid::from_pixels(self.canvas_size, frame.pixels.iter().copied())).collect()
    }

    /// # Errors
    ///
    /// Returns a JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    ///
    /// Returns a JSON error for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns an I/O or JSON error.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an I/O or JSON error.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Build a grid from rows of text, one char per cell.
///
/// Chars missing from `color_map` are transparent, chars beyond the canvas are
/// dropped.
///
/// # Errors
///
/// Returns [`EditorError::InvalidCanvasSize`] for a non positive size.
pub fn parse_ascii_art<S: AsRef<str>>(size: i32, rows: &[S], color_map: &HashMap<char, Color>) -> Result<Grid> {
    let grid = Grid::new(size)?;
    Ok(grid.edit(|edit| {
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.as_ref().chars().enumerate() {
                if let Some(color) = color_map.get(&ch) {
                    edit.put(Position::from((x, y)), *color);
                }
            }
        }
    }))
}

/// Render a grid as text rows, the inverse of [`parse_ascii_art`].
///
/// Transparent cells use `transparent`, colors missing from `char_map` use `?`.
pub fn render_ascii(grid: &Grid, char_map: &HashMap<Color, char>, transparent: char) -> String {
    let mut out = String::with_capacity(((grid.size() + 1) * grid.size()) as usize);
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            let ch = match grid.get((x, y)) {
                Some(color) => char_map.get(&color).copied().unwrap_or('?'),
                None => transparent,
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
