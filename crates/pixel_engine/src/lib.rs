//! Editing engine for a square pixel art canvas with animation frames.
//!
//! The crate is UI agnostic: a host forwards pointer events and commands to an
//! [`EditorSession`] and renders whatever [`Grid`] snapshots it hands back.

mod color;
pub use color::*;

mod error;
pub use error::*;

mod position;
pub use position::*;

mod grid;
pub use grid::*;

pub mod brushes;
pub use brushes::SymmetryMode;

mod frames;
pub use frames::*;

mod history;
pub use history::*;

pub mod animation;
pub use animation::{AnimationClock, DEFAULT_FPS, MAX_FPS, MIN_FPS, PlaybackTimer};

mod palette;
pub use palette::*;

mod export;
pub use export::*;

mod session;
pub use session::*;
