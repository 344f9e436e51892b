use std::time::{Duration, Instant};

pub const DEFAULT_FPS: u32 = 12;
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 60;

#[derive(Clone, Debug)]
pub struct AnimationClock {
    is_playing: bool,
    fps: u32,
    last_tick: Option<Instant>,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            is_playing: false,
            fps: DEFAULT_FPS,
            last_tick: None,
        }
    }
}

impl AnimationClock {
    pub fn new(fps: u32) -> Self {
        let mut clock = Self::default();
        clock.set_fps(fps);
        clock
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Clamped to `MIN_FPS..=MAX_FPS`, takes effect on the next tick
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(MIN_FPS, MAX_FPS);
    }

    /// Time between two frames, `1000 / fps` ms
    pub fn interval(&self) -> Duration {
        Duration::from_millis(1000) / self.fps
    }

    pub fn play(&mut self, now: Instant) {
        self.is_playing = true;
        self.last_tick = Some(now);
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
        self.last_tick = None;
    }

    /// Returns true when a frame advance is due at `now` and restarts the period.
    ///
    /// Ticks are independent, a late poll doesn't try to catch up on missed frames.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_playing {
            return false;
        }
        let last = *self.last_tick.get_or_insert(now);
        if now.saturating_duration_since(last) >= self.interval() {
            self.last_tick = Some(now);
            return true;
        }
        false
    }
}
