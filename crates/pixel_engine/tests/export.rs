//! Pixel dumps and ASCII art

mod common;

use std::collections::HashMap;

use common::*;
use pixel_engine::{Color, EditorError, FrameDump, Grid, Pixel, PixelDump, parse_ascii_art, render_ascii};

fn char_colors() -> HashMap<char, Color> {
    HashMap::from([('r', RED), ('b', BLUE)])
}

#[test]
fn test_to_pixels_is_row_major() {
    let grid = empty_grid(4).set((3, 0), RED).unwrap().set((0, 2), BLUE).unwrap().set((1, 0), RED).unwrap();
    let pixels = grid.to_pixels();
    let positions: Vec<_> = pixels.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(positions, vec![(1, 0), (3, 0), (0, 2)]);
    assert_eq!(pixels[2].color, BLUE);
}

#[test]
fn test_from_pixels_reconstructs_grid() {
    let grid = parse_ascii_art(4, &["r..b", ".rr.", "....", "b..r"], &char_colors()).unwrap();
    let rebuilt = Grid::from_pixels(4, grid.to_pixels()).unwrap();
    assert_eq!(rebuilt, grid);
}

#[test]
fn test_from_pixels_rejects_out_of_bounds() {
    let pixels = [Pixel { x: 1, y: 1, color: RED }, Pixel { x: 4, y: 0, color: RED }];
    assert!(matches!(Grid::from_pixels(4, pixels), Err(EditorError::OutOfBounds { x: 4, y: 0, size: 4 })));
    assert!(matches!(Grid::from_pixels(0, Vec::<Pixel>::new()), Err(EditorError::InvalidCanvasSize(0))));
}

#[test]
fn test_dump_json_format() {
    let grid = empty_grid(2).set((1, 0), color("#FF0000")).unwrap();
    let dump = PixelDump::from_grids(2, [&grid]);
    let value: serde_json::Value = serde_json::from_str(&dump.to_json().unwrap()).unwrap();
    assert_eq!(value["canvas_size"], 2);
    assert_eq!(value["frames"][0]["pixels"][0]["x"], 1);
    assert_eq!(value["frames"][0]["pixels"][0]["y"], 0);
    assert_eq!(value["frames"][0]["pixels"][0]["color"], "#ff0000");
}

#[test]
fn test_dump_accepts_frames_without_pixels() {
    let dump = PixelDump::from_json(r##"{ "canvas_size": 3, "frames": [ {}, { "pixels": [ { "x": 2, "y": 2, "color": "#00FF00" } ] } ] }"##).unwrap();
    assert_eq!(dump.frames.len(), 2);
    assert_eq!(dump.frames[0], FrameDump::default());
    let grids = dump.to_grids().unwrap();
    assert!(grids[0].is_empty());
    assert_eq!(grids[1].get((2, 2)), Some(GREEN));
}

#[test]
fn test_dump_rejects_bad_color() {
    let result = PixelDump::from_json(r#"{ "canvas_size": 3, "frames": [ { "pixels": [ { "x": 0, "y": 0, "color": "green" } ] } ] }"#);
    assert!(matches!(result, Err(EditorError::Json(_))));
}

#[test]
fn test_dump_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sprite.json");

    let mut session = session(8);
    session.set_pixel((1, 2), RED);
    session.add_frame();
    session.draw_line((0, 7), (7, 7), BLUE);
    session.export_dump().save(&path).unwrap();

    let loaded = PixelDump::load(&path).unwrap();
    let mut other = common::session(4);
    other.import_dump(&loaded).unwrap();
    assert_eq!(other.canvas_size(), 8);
    assert_eq!(other.frame_count(), 2);
    assert_eq!(other.active_frame_index(), 0);
    assert_eq!(other.pixel_color((1, 2)), Some(RED));
    assert_eq!(other.export_dump(), session.export_dump());
}

#[test]
fn test_import_invalid_dump_leaves_session_alone() {
    let mut session = session(4);
    session.set_pixel((0, 0), RED);
    let dump = PixelDump {
        canvas_size: 2,
        frames: vec![FrameDump {
            pixels: vec![Pixel { x: 5, y: 5, color: BLUE }],
        }],
    };
    assert!(session.import_dump(&dump).is_err());
    assert_eq!(session.canvas_size(), 4);
    assert_eq!(session.pixel_color((0, 0)), Some(RED));

    let empty = PixelDump { canvas_size: 16, frames: Vec::new() };
    session.import_dump(&empty).unwrap();
    assert_eq!(session.canvas_size(), 4);
    assert_eq!(session.frame_count(), 1);
}

#[test]
fn test_load_missing_dump_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(PixelDump::load(&dir.path().join("missing.json")), Err(EditorError::Io(_))));
}

#[test]
fn test_parse_ascii_art() {
    let grid = parse_ascii_art(3, &["r.b", "?r", "rrrr", "bbb"], &char_colors()).unwrap();
    assert_eq!(grid.get((0, 0)), Some(RED));
    assert_eq!(grid.get((1, 0)), None);
    assert_eq!(grid.get((2, 0)), Some(BLUE));
    assert_eq!(grid.get((0, 1)), None);
    assert_eq!(grid.get((1, 1)), Some(RED));
    assert_eq!(grid.len(), 6);
}

#[test]
fn test_render_ascii() {
    let grid = parse_ascii_art(3, &["r.b", ".g.", "..."], &HashMap::from([('r', RED), ('b', BLUE), ('g', GREEN)])).unwrap();
    let chars = HashMap::from([(RED, '#'), (BLUE, '@')]);
    assert_eq!(render_ascii(&grid, &chars, '.'), "#.@\n.?.\n...\n");
}
