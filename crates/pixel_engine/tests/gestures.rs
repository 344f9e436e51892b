//! Pointer gestures driving the active tool

mod common;

use common::*;
use pixel_engine::{EditorSession, Modifiers, PointerButton, SymmetryMode, Tool};

fn drawing_session(size: i32, tool: Tool) -> EditorSession {
    let mut session = session(size);
    session.set_tool(tool);
    session.set_primary_color(RED);
    session.set_secondary_color(BLUE);
    session
}

#[test]
fn test_pencil_stroke_interpolates() {
    let mut session = drawing_session(8, Tool::Pencil);
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    assert!(session.is_drawing());
    session.pointer_move((4, 0), PointerButton::Primary);
    session.pointer_move((4, 3), PointerButton::Primary);
    session.pointer_up((4, 3), PointerButton::Primary, Modifiers::NONE);
    assert!(!session.is_drawing());

    let grid = session.all_pixels();
    for x in 0..=4 {
        assert_eq!(grid.get((x, 0)), Some(RED));
    }
    for y in 0..=3 {
        assert_eq!(grid.get((4, y)), Some(RED));
    }
    assert_eq!(grid.len(), 8);
}

#[test]
fn test_gesture_takes_one_checkpoint() {
    let mut session = drawing_session(8, Tool::Pencil);
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    for x in 1..6 {
        session.pointer_move((x, x), PointerButton::Primary);
    }
    session.pointer_up((5, 5), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().current().unwrap().description(), "Pencil");
    // the checkpoint is the state before the stroke
    assert!(session.history().current().unwrap().grid().is_empty());
}

#[test]
fn test_second_gesture_makes_first_undoable() {
    let mut session = drawing_session(8, Tool::Pencil);
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((0, 0), PointerButton::Primary, Modifiers::NONE);
    session.pointer_down((5, 5), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((5, 5), PointerButton::Primary, Modifiers::NONE);

    assert!(session.undo());
    assert!(session.all_pixels().is_empty());
    assert!(session.redo());
    assert_eq!(coords(&session.all_pixels()), vec![(0, 0)]);
}

#[test]
fn test_secondary_button_uses_secondary_color() {
    let mut session = drawing_session(4, Tool::Pencil);
    session.pointer_down((1, 1), PointerButton::Secondary, Modifiers::NONE);
    session.pointer_up((1, 1), PointerButton::Secondary, Modifiers::NONE);
    assert_eq!(session.pixel_color((1, 1)), Some(BLUE));
}

#[test]
fn test_pointer_outside_canvas_is_ignored() {
    let mut session = drawing_session(4, Tool::Pencil);
    session.pointer_down((4, 0), PointerButton::Primary, Modifiers::NONE);
    assert!(!session.is_drawing());
    assert!(session.history().is_empty());

    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    session.pointer_move((-1, 9), PointerButton::Primary);
    session.pointer_move((3, 0), PointerButton::Primary);
    assert_eq!(session.all_pixels().len(), 4);
}

#[test]
fn test_pencil_respects_symmetry() {
    let mut session = drawing_session(4, Tool::Pencil);
    session.set_symmetry_mode(SymmetryMode::Both);
    session.pointer_down((1, 1), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((1, 1), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(coords(&session.all_pixels()), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_eraser_stroke() {
    let mut session = drawing_session(4, Tool::Eraser);
    session.fill((0, 0), BLACK);
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    session.pointer_move((3, 0), PointerButton::Primary);
    session.pointer_up((3, 0), PointerButton::Primary, Modifiers::NONE);
    for x in 0..4 {
        assert_eq!(session.pixel_color((x, 0)), None);
    }
    assert_eq!(session.all_pixels().len(), 12);
    assert_eq!(session.history().current().unwrap().description(), "Eraser");
}

#[test]
fn test_fill_tool() {
    let mut session = drawing_session(4, Tool::Fill);
    session.pointer_down((2, 2), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((2, 2), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(session.all_pixels().len(), 16);
}

#[test]
fn test_picker_sets_primary_without_checkpoint() {
    let mut session = drawing_session(4, Tool::Picker);
    session.set_pixel((2, 3), GREEN);
    session.pointer_down((2, 3), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((2, 3), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(session.primary_color(), GREEN);
    assert!(session.history().is_empty());

    // empty cell: no change
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(session.primary_color(), GREEN);
}

#[test]
fn test_line_tool_commits_on_release() {
    let mut session = drawing_session(4, Tool::Line);
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    session.pointer_move((2, 2), PointerButton::Primary);
    assert!(session.all_pixels().is_empty());
    session.pointer_up((3, 3), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(coords(&session.all_pixels()), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn test_rectangle_tools() {
    let mut session = drawing_session(8, Tool::RectangleOutline);
    session.pointer_down((1, 1), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((4, 3), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(session.all_pixels().len(), 10);
    assert_eq!(session.pixel_color((2, 2)), None);

    session.clear_canvas();
    session.set_tool(Tool::RectangleFilled);
    session.pointer_down((1, 1), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((4, 3), PointerButton::Primary, Modifiers::NONE);
    assert_eq!(session.all_pixels().len(), 12);
    assert_eq!(session.history().current().unwrap().description(), "Filled rectangle");
}

#[test]
fn test_shift_constrains_rectangle_to_square() {
    let mut session = drawing_session(8, Tool::RectangleFilled);
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up((5, 2), PointerButton::Primary, Modifiers::SHIFT);
    assert_eq!(session.all_pixels().len(), 9);
    assert_eq!(session.pixel_color((2, 2)), Some(RED));
    assert_eq!(session.pixel_color((3, 0)), None);
}

#[test]
fn test_pointer_leave_discards_shape() {
    let mut session = drawing_session(4, Tool::Line);
    session.pointer_down((0, 0), PointerButton::Primary, Modifiers::NONE);
    session.pointer_leave();
    assert!(!session.is_drawing());
    session.pointer_up((3, 3), PointerButton::Primary, Modifiers::NONE);
    assert!(session.all_pixels().is_empty());
}

#[test]
fn test_tool_names() {
    for tool in Tool::ALL {
        assert_eq!(tool.to_string().parse::<Tool>().unwrap(), tool);
    }
    assert_eq!("pipette".parse::<Tool>().unwrap(), Tool::Picker);
    assert!("brush".parse::<Tool>().is_err());
    assert!(Tool::Line.is_shape());
    assert!(!Tool::Pencil.is_shape());
    assert!(!Tool::Picker.modifies_pixels());
}

#[test]
fn test_serialized_names_match_display() {
    for tool in Tool::ALL {
        let json = serde_json::to_string(&tool).unwrap();
        assert_eq!(json, format!("\"{tool}\""));
        assert_eq!(json.trim_matches('"').parse::<Tool>().unwrap(), tool);
        assert_eq!(serde_json::from_str::<Tool>(&json).unwrap(), tool);
    }
    for mode in SymmetryMode::ALL {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{mode}\""));
        assert_eq!(json.trim_matches('"').parse::<SymmetryMode>().unwrap(), mode);
    }
    assert_eq!(serde_json::to_string(&Tool::RectangleFilled).unwrap(), "\"filled-rectangle\"");
}
