use std::{fmt::Display, str::FromStr};

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{EditorError, Result};

lazy_static::lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$").unwrap();
}

/// An 8 bit per channel RGBA color.
///
/// Colors are written as `#rrggbb` (or `#rrggbbaa` when not fully opaque) and that
/// hex string is also the serialized form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn get_rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`, the leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidColor`] if the text isn't a hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let Some(cap) = HEX_REGEX.captures(hex.trim()) else {
            return Err(EditorError::InvalidColor(hex.to_string()));
        };
        let channel = |i: usize| cap.get(i).map(|m| u8::from_str_radix(m.as_str(), 16).unwrap_or(0xFF));
        Ok(Color::with_alpha(
            channel(1).unwrap_or(0),
            channel(2).unwrap_or(0),
            channel(3).unwrap_or(0),
            channel(4).unwrap_or(0xFF),
        ))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2)
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Color::with_alpha(value[0], value[1], value[2], value[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> [u8; 4] {
        [value.r, value.g, value.b, value.a]
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
