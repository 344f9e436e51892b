//! Editor session
//!
//! [`EditorSession`] owns the whole editing state and is the only entry point
//! for collaborators (UI, CLI, export). It holds no algorithms of its own, it
//! resolves the active frame, the symmetry mode and the current colors and hands
//! them to the brushes, the frame store, the history and the animation clock.
//!
//! # Module Organization
//! - `state.rs` - Struct definition, constructors, getters, canvas settings
//! - `drawing.rs` - Brush pass-throughs against the active frame
//! - `frame_operations.rs` - Frame lifecycle and animation playback
//! - `undo.rs` - Checkpoints, undo and redo
//! - `gesture.rs` - Pointer gestures (down/move/up) driving the active tool
//! - `preferences.rs` - Persisted UI preferences
//! - `tools.rs` - Tool definitions

mod drawing;
mod frame_operations;
mod gesture;
mod preferences;
mod state;
mod tools;
mod undo;

pub use gesture::{Modifiers, PointerButton};
pub use preferences::{EditorPreferences, Theme};
pub use state::{DEFAULT_CANVAS_SIZE, DEFAULT_ZOOM, EditorSession, MAX_ZOOM, MIN_ZOOM, SharedSession};
pub use tools::Tool;
