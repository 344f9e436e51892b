//! Animation playback
//!
//! [`AnimationClock`] holds the play state and frame rate and decides when the next
//! frame is due. Hosts with their own event loop poll it through
//! [`crate::EditorSession::tick`]. Hosts without one start a [`PlaybackTimer`],
//! a cancellable periodic callback on a background thread.

mod clock;
mod timer;

pub use clock::{AnimationClock, DEFAULT_FPS, MAX_FPS, MIN_FPS};
pub use timer::PlaybackTimer;
