//! Unified error types for pixel_engine

use thiserror::Error;

use crate::FrameId;

/// Main error type for pixel_engine operations
#[derive(Debug, Error)]
pub enum EditorError {
    // === Precondition Errors ===
    #[error("Position ({x}, {y}) is outside of a {size}x{size} canvas")]
    OutOfBounds { x: i32, y: i32, size: i32 },

    #[error("No frame with id {0}")]
    UnknownFrame(FrameId),

    #[error("The last remaining frame can't be deleted")]
    LastFrame,

    #[error("Frame index {index} out of range (frame count {len})")]
    FrameIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid canvas size: {0}")]
    InvalidCanvasSize(i32),

    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    // === I/O & Serialization Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias for pixel_engine operations
pub type Result<T> = std::result::Result<T, EditorError>;

impl EditorError {
    /// Create an out of bounds error for a position on a canvas
    pub fn out_of_bounds(pos: crate::Position, size: i32) -> Self {
        Self::OutOfBounds { x: pos.x, y: pos.y, size }
    }

    /// True for errors that signal a rejected caller precondition rather than I/O trouble
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            EditorError::UnknownFrame(_) | EditorError::LastFrame | EditorError::FrameIndexOutOfRange { .. } | EditorError::InvalidCanvasSize(_)
        )
    }
}
