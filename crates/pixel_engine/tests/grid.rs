//! Grid model, positions and colors

mod common;

use common::*;
use pixel_engine::{Color, EditorError, Grid, Position};

#[test]
fn test_new_grid_is_empty() {
    let grid = empty_grid(16);
    assert_eq!(grid.size(), 16);
    assert!(grid.is_empty());
    assert_eq!(grid.len(), 0);
    assert_eq!(grid.get((3, 3)), None);
}

#[test]
fn test_new_rejects_non_positive_size() {
    assert!(matches!(Grid::new(0), Err(EditorError::InvalidCanvasSize(0))));
    assert!(matches!(Grid::new(-4), Err(EditorError::InvalidCanvasSize(-4))));
}

#[test]
fn test_get_after_set_returns_color() {
    let colors = [RED, GREEN, BLUE, BLACK, Color::with_alpha(1, 2, 3, 4)];
    let mut grid = empty_grid(5);
    for y in 0..5 {
        for x in 0..5 {
            let c = colors[((x + y) % 5) as usize];
            grid = grid.set((x, y), c).unwrap();
            assert_eq!(grid.get((x, y)), Some(c));
        }
    }
    assert_eq!(grid.len(), 25);
}

#[test]
fn test_set_overwrites() {
    let grid = empty_grid(4).set((1, 2), RED).unwrap().set((1, 2), BLUE).unwrap();
    assert_eq!(grid.get((1, 2)), Some(BLUE));
    assert_eq!(grid.len(), 1);
}

#[test]
fn test_set_out_of_bounds() {
    let grid = empty_grid(4);
    for pos in [(-1, 0), (0, -1), (4, 0), (0, 4), (100, 100)] {
        match grid.set(pos, RED) {
            Err(EditorError::OutOfBounds { x, y, size }) => {
                assert_eq!((x, y), pos);
                assert_eq!(size, 4);
            }
            other => panic!("expected OutOfBounds for {pos:?}, got {other:?}"),
        }
    }
    assert!(matches!(grid.unset((4, 4)), Err(EditorError::OutOfBounds { .. })));
    assert!(grid.is_empty());
}

#[test]
fn test_writes_never_mutate_source() {
    let a = empty_grid(4).set((0, 0), RED).unwrap();
    let b = a.set((1, 1), BLUE).unwrap();
    let c = b.unset((0, 0)).unwrap();

    assert_eq!(coords(&a), vec![(0, 0)]);
    assert_eq!(coords(&b), vec![(0, 0), (1, 1)]);
    assert_eq!(coords(&c), vec![(1, 1)]);
}

#[test]
fn test_clone_shares_storage_until_write() {
    let a = empty_grid(4).set((0, 0), RED).unwrap();
    let b = a.clone();
    assert!(a.shares_storage(&b));

    let c = b.set((1, 0), RED).unwrap();
    assert!(!a.shares_storage(&c));
    assert!(a.shares_storage(&b));
}

#[test]
fn test_unset_absent_cell() {
    let grid = empty_grid(4).set((2, 2), RED).unwrap();
    let same = grid.unset((0, 0)).unwrap();
    assert_eq!(same, grid);
}

#[test]
fn test_clear_keeps_canvas() {
    let grid = filled_grid(6, RED).clear();
    assert!(grid.is_empty());
    assert_eq!(grid.size(), 6);
}

#[test]
fn test_sorted_pixels_row_major() {
    let grid = empty_grid(4).set((3, 0), RED).unwrap().set((0, 1), RED).unwrap().set((1, 0), RED).unwrap();
    assert_eq!(coords(&grid), vec![(1, 0), (3, 0), (0, 1)]);
}

#[test]
fn test_resized_drops_outside_cells() {
    let grid = empty_grid(8).set((1, 1), RED).unwrap().set((6, 2), BLUE).unwrap();
    let small = grid.resized(4);
    assert_eq!(small.size(), 4);
    assert_eq!(coords(&small), vec![(1, 1)]);

    let large = small.resized(16);
    assert_eq!(large.size(), 16);
    assert_eq!(large.get((1, 1)), Some(RED));
}

#[test]
fn test_edit_skips_out_of_canvas_writes() {
    let grid = empty_grid(3).edit(|edit| {
        assert!(edit.put(Position::new(1, 1), RED));
        assert!(!edit.put(Position::new(3, 1), RED));
        assert!(!edit.put(Position::new(-1, 0), RED));
    });
    assert_eq!(coords(&grid), vec![(1, 1)]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Position
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_position_inside() {
    assert!(Position::new(0, 0).is_inside(1));
    assert!(!Position::new(1, 0).is_inside(1));
    assert!(!Position::new(0, -1).is_inside(8));
}

#[test]
fn test_position_ordering_is_row_major() {
    let mut positions = vec![Position::new(2, 1), Position::new(0, 2), Position::new(5, 0)];
    positions.sort();
    assert_eq!(positions, vec![Position::new(5, 0), Position::new(2, 1), Position::new(0, 2)]);
}

#[test]
fn test_position_arithmetic() {
    let p = Position::new(3, 4) + Position::new(1, -2);
    assert_eq!(p, Position::new(4, 2));
    assert_eq!(p - Position::new(4, 2), Position::default());
    assert_eq!(Position::new(1, 7).min(Position::new(3, 2)), Position::new(1, 2));
    assert_eq!(Position::new(1, 7).max(Position::new(3, 2)), Position::new(3, 7));
}

// ═══════════════════════════════════════════════════════════════════════════
// Color
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_color_from_hex() {
    assert_eq!(color("#FF0000"), RED);
    assert_eq!(color("00ff00"), GREEN);
    assert_eq!(color("#0f380f").get_rgb(), (0x0f, 0x38, 0x0f));
    assert_eq!(color("#11223344").get_rgba(), (0x11, 0x22, 0x33, 0x44));
}

#[test]
fn test_color_from_hex_invalid() {
    for text in ["", "#", "#12345", "#GGGGGG", "#1234567", "red"] {
        assert!(matches!(Color::from_hex(text), Err(EditorError::InvalidColor(_))), "{text} should be rejected");
    }
}

#[test]
fn test_color_to_hex() {
    assert_eq!(color("#ABCDEF").to_hex(), "#abcdef");
    assert_eq!(Color::with_alpha(0, 0, 0, 0x80).to_hex(), "#00000080");
    assert_eq!(WHITE.to_string(), "#ffffff");
    assert_eq!("#9bbc0f".parse::<Color>().unwrap(), Color::new(0x9b, 0xbc, 0x0f));
}

#[test]
fn test_color_serializes_as_hex_string() {
    let json = serde_json::to_string(&RED).unwrap();
    assert_eq!(json, "\"#ff0000\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, RED);
    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}
