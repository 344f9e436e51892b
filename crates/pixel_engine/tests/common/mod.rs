//! Shared test helpers

#![allow(dead_code)]

use pixel_engine::{Color, EditorSession, Grid, Position};

pub const RED: Color = Color::new(0xFF, 0x00, 0x00);
pub const GREEN: Color = Color::new(0x00, 0xFF, 0x00);
pub const BLUE: Color = Color::new(0x00, 0x00, 0xFF);
pub const BLACK: Color = Color::BLACK;
pub const WHITE: Color = Color::WHITE;

pub fn color(hex: &str) -> Color {
    Color::from_hex(hex).expect("valid hex color")
}

pub fn empty_grid(size: i32) -> Grid {
    Grid::new(size).expect("valid canvas size")
}

/// Every cell of a `size`×`size` canvas set to `color`
pub fn filled_grid(size: i32, color: Color) -> Grid {
    empty_grid(size).edit(|edit| {
        for y in 0..size {
            for x in 0..size {
                edit.put(Position::new(x, y), color);
            }
        }
    })
}

/// Colored coordinates in row major order
pub fn coords(grid: &Grid) -> Vec<(i32, i32)> {
    grid.sorted_pixels().into_iter().map(|(pos, _)| (pos.x, pos.y)).collect()
}

pub fn session(size: i32) -> EditorSession {
    EditorSession::with_canvas_size(size).expect("valid canvas size")
}

/// Assert that two grids differ at most in `allowed` cells
pub fn assert_unchanged_outside(before: &Grid, after: &Grid, allowed: &[Position]) {
    for y in 0..before.size() {
        for x in 0..before.size() {
            let pos = Position::new(x, y);
            if allowed.contains(&pos) {
                continue;
            }
            assert_eq!(before.get(pos), after.get(pos), "cell {pos} changed unexpectedly");
        }
    }
}
