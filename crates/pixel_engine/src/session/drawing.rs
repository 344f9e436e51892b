//! Brush pass-throughs
//!
//! Every call resolves the active frame and the symmetry mode, runs the brush on
//! the current grid and writes the result back into the same frame. No history
//! entry is created here, checkpoints are the caller's (or the gesture's) job.

use crate::{Color, Grid, Position, SymmetryMode, brushes};

use super::EditorSession;

impl EditorSession {
    fn apply(&mut self, brush: impl FnOnce(&Grid, SymmetryMode) -> Grid) {
        let grid = brush(self.frames.active_grid(), self.symmetry);
        self.frames.set_active_grid(grid);
    }

    /// Paint a single cell (and its mirror images)
    pub fn set_pixel(&mut self, pos: impl Into<Position>, color: Color) {
        let pos = pos.into();
        log::debug!("paint {pos} {color} on frame {}", self.frames.active_id());
        self.apply(|grid, symmetry| brushes::paint(grid, symmetry, pos, color));
    }

    /// Erase a single cell (and its mirror images)
    pub fn erase_pixel(&mut self, pos: impl Into<Position>) {
        let pos = pos.into();
        log::debug!("erase {pos} on frame {}", self.frames.active_id());
        self.apply(|grid, symmetry| brushes::erase(grid, symmetry, pos));
    }

    /// Flood fill from `pos`
    pub fn fill(&mut self, pos: impl Into<Position>, color: Color) {
        let pos = pos.into();
        log::debug!("fill {pos} {color} on frame {}", self.frames.active_id());
        self.apply(|grid, _| brushes::fill(grid, pos, color));
    }

    pub fn draw_line(&mut self, from: impl Into<Position>, to: impl Into<Position>, color: Color) {
        let (from, to) = (from.into(), to.into());
        log::debug!("line {from} -> {to} {color} on frame {}", self.frames.active_id());
        self.apply(|grid, symmetry| brushes::line(grid, symmetry, from, to, color));
    }

    pub fn draw_rectangle(&mut self, a: impl Into<Position>, b: impl Into<Position>, color: Color, filled: bool) {
        let (a, b) = (a.into(), b.into());
        log::debug!("rectangle {a} {b} {color} filled={filled} on frame {}", self.frames.active_id());
        self.apply(|grid, symmetry| brushes::rectangle(grid, symmetry, a, b, color, filled));
    }

    /// Remove every pixel of the active frame
    pub fn clear_canvas(&mut self) {
        log::debug!("clear frame {}", self.frames.active_id());
        self.apply(|grid, _| brushes::clear(grid));
    }
}
