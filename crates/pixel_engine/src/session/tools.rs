//! Tool definitions

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand drawing
    #[default]
    Pencil,
    /// Freehand erasing
    Eraser,
    /// Flood fill area
    Fill,
    /// Pick color from canvas
    Picker,
    /// Draw straight lines
    Line,
    /// Draw rectangle outline
    #[serde(rename = "rectangle")]
    RectangleOutline,
    /// Draw filled rectangle
    #[serde(rename = "filled-rectangle")]
    RectangleFilled,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::Fill,
        Tool::Picker,
        Tool::Line,
        Tool::RectangleOutline,
        Tool::RectangleFilled,
    ];

    /// Label used for history entries
    pub fn description(self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
            Tool::Picker => "Pick color",
            Tool::Line => "Line",
            Tool::RectangleOutline => "Rectangle",
            Tool::RectangleFilled => "Filled rectangle",
        }
    }

    /// Whether the tool only draws once the gesture is released
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Line | Tool::RectangleOutline | Tool::RectangleFilled)
    }

    /// Whether applying the tool changes pixels
    pub fn modifies_pixels(self) -> bool {
        !matches!(self, Tool::Picker)
    }
}

impl Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tool::Pencil => "pencil",
            Tool::Eraser => "eraser",
            Tool::Fill => "fill",
            Tool::Picker => "picker",
            Tool::Line => "line",
            Tool::RectangleOutline => "rectangle",
            Tool::RectangleFilled => "filled-rectangle",
        };
        f.write_str(name)
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tool = match s.to_ascii_lowercase().as_str() {
            "pencil" => Tool::Pencil,
            "eraser" => Tool::Eraser,
            "fill" => Tool::Fill,
            "picker" | "pipette" => Tool::Picker,
            "line" => Tool::Line,
            "rectangle" | "rect" => Tool::RectangleOutline,
            "filled-rectangle" | "filled-rect" => Tool::RectangleFilled,
            _ => return Err(format!("unknown tool '{s}'")),
        };
        Ok(tool)
    }
}
