//! Mutation engine
//!
//! Stateless brush operations. Each takes a grid snapshot plus parameters and
//! returns a new grid, the input is never modified:
//! - Point paint and erase (mirrored by the [`SymmetryMode`])
//! - Lines (Bresenham's algorithm, mirrored)
//! - Rectangles (outline and filled, mirrored)
//! - Flood fill (4-connected BFS)
//! - Clear
//!
//! All writes go through [`Grid::edit`] and are computed from the source snapshot
//! only, so a mirrored point never observes a half written grid. Writes that land
//! outside the canvas are skipped, never reported.

pub mod fill;
pub mod line;
pub mod rectangle;
pub mod symmetry;

pub use fill::flood_fill_points;
pub use line::{bresenham_line, clipped_line};
pub use rectangle::{constrain_square, rectangle_points};
pub use symmetry::SymmetryMode;

use crate::{Color, Grid, Position};

// ═══════════════════════════════════════════════════════════════════════════
// Point brushes
// ═══════════════════════════════════════════════════════════════════════════

/// Set `pos` and its mirror images to `color`
pub fn paint(grid: &Grid, symmetry: SymmetryMode, pos: Position, color: Color) -> Grid {
    let points = symmetry.expand(pos, grid.size());
    stamp(grid, points, color)
}

/// Make `pos` and its mirror images transparent
pub fn erase(grid: &Grid, symmetry: SymmetryMode, pos: Position) -> Grid {
    let points = symmetry.expand(pos, grid.size());
    grid.edit(|edit| {
        for p in points {
            edit.remove(p);
        }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Shape brushes
// ═══════════════════════════════════════════════════════════════════════════

/// Draw a line from `from` to `to`, both ends inclusive
pub fn line(grid: &Grid, symmetry: SymmetryMode, from: Position, to: Position, color: Color) -> Grid {
    let points = symmetry.expand_all(clipped_line(from, to, grid.size()), grid.size());
    stamp(grid, points, color)
}

/// Draw a rectangle between two opposite corners in any order
pub fn rectangle(grid: &Grid, symmetry: SymmetryMode, a: Position, b: Position, color: Color, filled: bool) -> Grid {
    let points = symmetry.expand_all(rectangle_points(a, b, grid.size(), filled), grid.size());
    stamp(grid, points, color)
}

// ═══════════════════════════════════════════════════════════════════════════
// Flood fill
// ═══════════════════════════════════════════════════════════════════════════

/// Flood fill the 4-connected region of the color found at `start`.
///
/// Transparent is a fillable color of its own. Filling with the color that is
/// already there returns the input grid unchanged (same storage), so repeated
/// fills are idempotent. Fill isn't mirrored: the region is defined by
/// connectivity, mirroring the seed could recolor unrelated regions.
pub fn fill(grid: &Grid, start: Position, color: Color) -> Grid {
    if !grid.is_valid(start) {
        return grid.clone();
    }
    let target = grid.get(start);
    if target == Some(color) {
        return grid.clone();
    }

    let points = flood_fill_points(start, grid.size(), |pos| grid.get(pos));
    log::trace!("flood fill at {start} recolors {} cells", points.len());
    stamp(grid, points, color)
}

/// An empty grid on the same canvas
pub fn clear(grid: &Grid) -> Grid {
    grid.clear()
}

fn stamp(grid: &Grid, points: impl IntoIterator<Item = Position>, color: Color) -> Grid {
    grid.edit(|edit| {
        for p in points {
            edit.put(p, color);
        }
    })
}
