//! Frame lifecycle and animation playback

use std::time::Instant;

use crate::{AnimationClock, FrameId, Result};

use super::EditorSession;

impl EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Frames
    // ═══════════════════════════════════════════════════════════════════════

    /// Append an empty frame and make it active
    pub fn add_frame(&mut self) -> FrameId {
        self.frames.add_frame()
    }

    /// # Errors
    ///
    /// Rejects deleting the last frame or an unknown id, the frames stay unchanged.
    pub fn delete_frame(&mut self, id: FrameId) -> Result<()> {
        self.frames.delete_frame(id).inspect_err(|err| log::warn!("delete frame {id} rejected: {err}"))
    }

    /// # Errors
    ///
    /// Rejects an unknown id.
    pub fn select_frame(&mut self, id: FrameId) -> Result<()> {
        self.frames.select_frame(id).inspect_err(|err| log::warn!("select frame rejected: {err}"))
    }

    /// Copy a frame right after itself, the copy becomes active
    ///
    /// # Errors
    ///
    /// Rejects an unknown id.
    pub fn duplicate_frame(&mut self, id: FrameId) -> Result<FrameId> {
        self.frames.duplicate_frame(id).inspect_err(|err| log::warn!("duplicate frame rejected: {err}"))
    }

    /// # Errors
    ///
    /// Rejects a `from` index outside the timeline.
    pub fn reorder_frames(&mut self, from: usize, to: usize) -> Result<()> {
        self.frames.reorder_frames(from, to).inspect_err(|err| log::warn!("reorder frames rejected: {err}"))
    }

    /// Activate the following frame, wrapping around at the end
    pub fn next_frame(&mut self) -> FrameId {
        self.frames.next_frame()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════════════

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    /// Clamped to `1..=60`
    pub fn set_fps(&mut self, fps: u32) {
        self.clock.set_fps(fps);
    }

    pub fn play(&mut self) {
        self.clock.play(Instant::now());
        log::debug!("playback started at {} fps", self.clock.fps());
    }

    pub fn pause(&mut self) {
        self.clock.pause();
        log::debug!("playback paused");
    }

    pub fn toggle_playback(&mut self) {
        if self.is_playing() { self.pause() } else { self.play() }
    }

    /// Poll style playback: advances one frame if a tick is due at `now`
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.clock.poll(now) {
            self.frames.next_frame();
            return true;
        }
        false
    }

    /// One timer tick: advances a frame while playing, returns false when paused
    pub fn advance_playback(&mut self) -> bool {
        if !self.clock.is_playing() {
            return false;
        }
        self.frames.next_frame();
        true
    }
}
