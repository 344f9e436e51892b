//! Pointer gestures
//!
//! A drawing surface reports canvas coordinates plus the pressed button. A gesture
//! runs from `pointer_down` to `pointer_up` (or `pointer_leave`):
//! - down takes one history checkpoint and applies point tools right away
//! - move continues pencil and eraser strokes with a line segment from the last
//!   sampled point, so fast drags don't leave gaps
//! - up commits line and rectangle tools from the gesture start
//!
//! Positions outside the canvas are ignored.

use crate::{Color, Position, brushes};

use super::{EditorSession, Tool};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// Draws with the primary color
    #[default]
    Primary,
    /// Draws with the secondary color
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Constrains rectangles to squares
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Gesture {
    tool: Tool,
    start: Position,
    last: Position,
}

impl EditorSession {
    fn button_color(&self, button: PointerButton) -> Color {
        match button {
            PointerButton::Primary => self.primary_color,
            PointerButton::Secondary => self.secondary_color,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn pointer_down(&mut self, pos: impl Into<Position>, button: PointerButton, _modifiers: Modifiers) {
        let pos = pos.into();
        if !pos.is_inside(self.canvas_size) {
            return;
        }
        let tool = self.tool;
        let color = self.button_color(button);
        self.gesture = Some(Gesture { tool, start: pos, last: pos });

        if tool.modifies_pixels() {
            self.checkpoint_with(tool.description());
        }

        match tool {
            Tool::Pencil => self.set_pixel(pos, color),
            Tool::Eraser => self.erase_pixel(pos),
            Tool::Fill => self.fill(pos, color),
            Tool::Picker => {
                if let Some(picked) = self.pixel_color(pos) {
                    self.primary_color = picked;
                }
            }
            Tool::Line | Tool::RectangleOutline | Tool::RectangleFilled => {}
        }
    }

    pub fn pointer_move(&mut self, pos: impl Into<Position>, button: PointerButton) {
        let pos = pos.into();
        let Some(gesture) = self.gesture else {
            return;
        };
        if !pos.is_inside(self.canvas_size) {
            return;
        }

        match gesture.tool {
            Tool::Pencil => {
                let color = self.button_color(button);
                self.draw_line(gesture.last, pos, color);
            }
            Tool::Eraser => {
                for p in brushes::bresenham_line(gesture.last, pos) {
                    self.erase_pixel(p);
                }
            }
            _ => {}
        }

        if let Some(gesture) = self.gesture.as_mut() {
            gesture.last = pos;
        }
    }

    pub fn pointer_up(&mut self, pos: impl Into<Position>, button: PointerButton, modifiers: Modifiers) {
        let pos = pos.into();
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if !pos.is_inside(self.canvas_size) {
            return;
        }

        let color = self.button_color(button);
        match gesture.tool {
            Tool::Line => self.draw_line(gesture.start, pos, color),
            Tool::RectangleOutline | Tool::RectangleFilled => {
                let end = if modifiers.shift { brushes::constrain_square(gesture.start, pos) } else { pos };
                self.draw_rectangle(gesture.start, end, color, gesture.tool == Tool::RectangleFilled);
            }
            _ => {}
        }
    }

    /// The pointer left the surface: the gesture ends without committing a shape
    pub fn pointer_leave(&mut self) {
        self.gesture = None;
    }
}
