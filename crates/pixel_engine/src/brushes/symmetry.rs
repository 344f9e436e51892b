//! Mirroring policy applied to paint, erase and shape brushes

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Position;

/// Which axes a brush stroke is mirrored across.
///
/// `Horizontal` mirrors left/right (across the vertical center line), `Vertical`
/// mirrors top/bottom, `Both` does both and adds the point mirrored through the center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl SymmetryMode {
    pub const ALL: [SymmetryMode; 4] = [SymmetryMode::None, SymmetryMode::Horizontal, SymmetryMode::Vertical, SymmetryMode::Both];

    pub fn mirrors_x(self) -> bool {
        matches!(self, SymmetryMode::Horizontal | SymmetryMode::Both)
    }

    pub fn mirrors_y(self) -> bool {
        matches!(self, SymmetryMode::Vertical | SymmetryMode::Both)
    }

    /// The point itself followed by all of its mirror images on a `size` canvas.
    ///
    /// Mirror images that coincide with an earlier point (center row/column on odd
    /// canvas sizes) are left out. Mirroring maps the canvas onto itself, so a point
    /// outside the canvas has no image on it and yields nothing.
    pub fn expand(self, pos: Position, size: i32) -> Vec<Position> {
        if !pos.is_inside(size) {
            return Vec::new();
        }
        let mirror_x = size - 1 - pos.x;
        let mirror_y = size - 1 - pos.y;

        let mut points = Vec::with_capacity(4);
        points.push(pos);
        if self.mirrors_x() {
            points.push(Position::new(mirror_x, pos.y));
        }
        if self.mirrors_y() {
            points.push(Position::new(pos.x, mirror_y));
        }
        if self == SymmetryMode::Both {
            points.push(Position::new(mirror_x, mirror_y));
        }

        let mut unique = Vec::with_capacity(points.len());
        for p in points {
            if !unique.contains(&p) {
                unique.push(p);
            }
        }
        unique
    }

    /// Expand every point of a shape, see [`SymmetryMode::expand`]
    pub fn expand_all(self, points: impl IntoIterator<Item = Position>, size: i32) -> Vec<Position> {
        points.into_iter().flat_map(|p| self.expand(p, size)).collect()
    }
}

impl Display for SymmetryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SymmetryMode::None => "none",
            SymmetryMode::Horizontal => "horizontal",
            SymmetryMode::Vertical => "vertical",
            SymmetryMode::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for SymmetryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SymmetryMode::None),
            "horizontal" | "h" => Ok(SymmetryMode::Horizontal),
            "vertical" | "v" => Ok(SymmetryMode::Vertical),
            "both" => Ok(SymmetryMode::Both),
            _ => Err(format!("unknown symmetry mode '{s}'")),
        }
    }
}
