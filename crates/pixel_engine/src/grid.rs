//! Grid model
//!
//! A [`Grid`] is the pixel content of one frame: a sparse map from [`Position`] to
//! [`Color`] on a square canvas. A missing key is a transparent cell, there is no
//! "no color" value stored in the map.
//!
//! Grids are immutable values. Every write produces a new grid and leaves the
//! source untouched, so history snapshots can hold on to old grids without copying.
//! Storage is shared through an `Arc` until the first write of a derived grid.

use std::{collections::HashMap, sync::Arc};

use crate::{Color, EditorError, Position, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    pixels: Arc<HashMap<Position, Color>>,
}

impl Grid {
    /// Create an empty grid for a `size`×`size` canvas
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCanvasSize`] if `size` isn't positive.
    pub fn new(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(EditorError::InvalidCanvasSize(size));
        }
        Ok(Self::empty(size))
    }

    pub(crate) fn empty(size: i32) -> Self {
        Self {
            size,
            pixels: Arc::new(HashMap::new()),
        }
    }

    /// Canvas edge length in cells
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of non transparent cells
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.is_inside(self.size)
    }

    /// Color at `pos`, `None` for transparent or out of canvas cells
    pub fn get(&self, pos: impl Into<Position>) -> Option<Color> {
        self.pixels.get(&pos.into()).copied()
    }

    /// Returns a grid with `pos` set to `color`
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] if `pos` is outside the canvas.
    pub fn set(&self, pos: impl Into<Position>, color: Color) -> Result<Grid> {
        let pos = pos.into();
        if !self.is_valid(pos) {
            return Err(EditorError::out_of_bounds(pos, self.size));
        }
        Ok(self.edit(|edit| {
            edit.put(pos, color);
        }))
    }

    /// Returns a grid with `pos` transparent
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] if `pos` is outside the canvas.
    pub fn unset(&self, pos: impl Into<Position>) -> Result<Grid> {
        let pos = pos.into();
        if !self.is_valid(pos) {
            return Err(EditorError::out_of_bounds(pos, self.size));
        }
        Ok(self.edit(|edit| {
            edit.remove(pos);
        }))
    }

    /// An empty grid on the same canvas
    pub fn clear(&self) -> Grid {
        Self::empty(self.size)
    }

    /// Iterate over all colored cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        self.pixels.iter().map(|(pos, color)| (*pos, *color))
    }

    /// All colored cells in row major order
    pub fn sorted_pixels(&self) -> Vec<(Position, Color)> {
        let mut pixels: Vec<_> = self.iter().collect();
        pixels.sort_by_key(|(pos, _)| *pos);
        pixels
    }

    /// Whether both grids still point at the same storage (no write happened in between)
    pub fn shares_storage(&self, other: &Grid) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }

    /// Same pixels on a canvas of `size`, cells outside the new canvas are dropped
    pub fn resized(&self, size: i32) -> Grid {
        let pixels = self.pixels.iter().filter(|(pos, _)| pos.is_inside(size)).map(|(pos, color)| (*pos, *color)).collect();
        Grid {
            size,
            pixels: Arc::new(pixels),
        }
    }

    /// Build a new grid by applying a batch of writes to a copy of this one.
    ///
    /// All reads the closure needs have to go to `self` (the base snapshot), the
    /// [`GridEdit`] only writes. Writes outside the canvas are skipped.
    pub fn edit(&self, f: impl FnOnce(&mut GridEdit<'_>)) -> Grid {
        let mut pixels = Arc::clone(&self.pixels);
        {
            let map = Arc::make_mut(&mut pixels);
            let mut edit = GridEdit {
                size: self.size,
                pixels: map,
                skipped: 0,
            };
            f(&mut edit);
            if edit.skipped > 0 {
                log::trace!("skipped {} out of canvas writes", edit.skipped);
            }
        }
        Grid { size: self.size, pixels }
    }
}

/// Write access to a grid under construction, see [`Grid::edit`]
pub struct GridEdit<'a> {
    size: i32,
    pixels: &'a mut HashMap<Position, Color>,
    skipped: usize,
}

impl GridEdit<'_> {
    /// Set a cell, returns false if the cell is outside the canvas
    pub fn put(&mut self, pos: Position, color: Color) -> bool {
        if !pos.is_inside(self.size) {
            self.skipped += 1;
            return false;
        }
        self.pixels.insert(pos, color);
        true
    }

    /// Make a cell transparent, returns false if the cell is outside the canvas
    pub fn remove(&mut self, pos: Position) -> bool {
        if !pos.is_inside(self.size) {
            self.skipped += 1;
            return false;
        }
        self.pixels.remove(&pos);
        true
    }
}
