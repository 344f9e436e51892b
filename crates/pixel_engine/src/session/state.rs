//! Editor session state
//!
//! Struct definition, constructors, getters and the settings that don't touch
//! pixels (canvas size, zoom, grid display, theme, colors, palette).

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    AnimationClock, Color, EditorError, Frame, FrameId, FrameStore, Grid, History, Palette, PixelDump, Position, Result, SymmetryMode,
    session::{Theme, Tool, gesture::Gesture},
};

pub const DEFAULT_CANVAS_SIZE: i32 = 32;
pub const DEFAULT_ZOOM: i32 = 8;
pub const MIN_ZOOM: i32 = 1;
pub const MAX_ZOOM: i32 = 32;

/// A session behind the single writer lock required for concurrent hosts.
///
/// Grid edits are read-modify-write on the active frame, two unserialized
/// calls against the same snapshot would lose one of the edits.
pub type SharedSession = Arc<Mutex<EditorSession>>;

/// Main state container of the editor
///
/// The UI layer should only read from this state and call methods to modify it.
#[derive(Clone, Debug)]
pub struct EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Canvas
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) canvas_size: i32,
    pub(crate) zoom: i32,
    pub(crate) show_grid: bool,

    // ═══════════════════════════════════════════════════════════════════════
    // Tools & Colors
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) tool: Tool,
    pub(crate) symmetry: SymmetryMode,
    pub(crate) primary_color: Color,
    pub(crate) secondary_color: Color,
    pub(crate) palette: Palette,

    // ═══════════════════════════════════════════════════════════════════════
    // Frames, History, Playback
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) frames: FrameStore,
    pub(crate) history: History,
    pub(crate) clock: AnimationClock,

    // ═══════════════════════════════════════════════════════════════════════
    // UI
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) theme: Theme,

    /// Pointer gesture in progress, if any
    pub(crate) gesture: Option<Gesture>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// A session on a 32×32 canvas with one empty frame
    pub fn new() -> Self {
        Self::create(DEFAULT_CANVAS_SIZE, History::new())
    }

    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCanvasSize`] if `canvas_size` isn't positive.
    pub fn with_canvas_size(canvas_size: i32) -> Result<Self> {
        if canvas_size <= 0 {
            return Err(EditorError::InvalidCanvasSize(canvas_size));
        }
        Ok(Self::create(canvas_size, History::new()))
    }

    /// Same as [`EditorSession::with_canvas_size`] with a custom history capacity
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCanvasSize`] if `canvas_size` isn't positive.
    pub fn with_history_capacity(canvas_size: i32, capacity: usize) -> Result<Self> {
        if canvas_size <= 0 {
            return Err(EditorError::InvalidCanvasSize(canvas_size));
        }
        Ok(Self::create(canvas_size, History::with_capacity(capacity)))
    }

    fn create(canvas_size: i32, history: History) -> Self {
        let palette = Palette::gameboy();
        let primary_color = palette.get(0).unwrap_or(Color::BLACK);
        let secondary_color = palette.get(palette.len().saturating_sub(1)).unwrap_or(Color::WHITE);
        Self {
            canvas_size,
            zoom: DEFAULT_ZOOM,
            show_grid: true,
            tool: Tool::default(),
            symmetry: SymmetryMode::default(),
            primary_color,
            secondary_color,
            palette,
            frames: FrameStore::with_canvas_size(canvas_size),
            history,
            clock: AnimationClock::default(),
            theme: Theme::default(),
            gesture: None,
        }
    }

    /// Wrap the session into the shared single writer handle
    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Back to the defaults with a single fresh frame, keeps the history capacity
    pub fn reset(&mut self) {
        let capacity = self.history.capacity();
        *self = Self::create(DEFAULT_CANVAS_SIZE, History::with_capacity(capacity));
        log::info!("editor reset");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Canvas settings
    // ═══════════════════════════════════════════════════════════════════════

    pub fn canvas_size(&self) -> i32 {
        self.canvas_size
    }

    /// Switch the canvas size.
    ///
    /// Pixels outside the new canvas are dropped from every frame and the history
    /// is cleared, snapshots of another canvas size can't be restored.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCanvasSize`] if `size` isn't positive.
    pub fn set_canvas_size(&mut self, size: i32) -> Result<()> {
        if size <= 0 {
            return Err(EditorError::InvalidCanvasSize(size));
        }
        if size == self.canvas_size {
            return Ok(());
        }
        self.canvas_size = size;
        self.frames.resize_canvas(size);
        self.history.clear();
        self.gesture = None;
        log::info!("canvas resized to {size}x{size}");
        Ok(())
    }

    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    /// Clamped to `MIN_ZOOM..=MAX_ZOOM`
    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tools
    // ═══════════════════════════════════════════════════════════════════════

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn symmetry_mode(&self) -> SymmetryMode {
        self.symmetry
    }

    pub fn set_symmetry_mode(&mut self, mode: SymmetryMode) {
        self.symmetry = mode;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Colors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn primary_color(&self) -> Color {
        self.primary_color
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.primary_color = color;
    }

    pub fn secondary_color(&self) -> Color {
        self.secondary_color
    }

    pub fn set_secondary_color(&mut self, color: Color) {
        self.secondary_color = color;
    }

    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.primary_color, &mut self.secondary_color);
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the current palette, the selected colors stay as they are
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(id)
    }

    pub fn active_frame(&self) -> &Frame {
        self.frames.active()
    }

    pub fn active_frame_id(&self) -> FrameId {
        self.frames.active_id()
    }

    pub fn active_frame_index(&self) -> usize {
        self.frames.active_index()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Color of the active frame at `pos`
    pub fn pixel_color(&self, pos: impl Into<Position>) -> Option<Color> {
        self.frames.active_grid().get(pos)
    }

    /// Snapshot of the active frame's pixels
    pub fn all_pixels(&self) -> Grid {
        self.frames.active_grid().clone()
    }

    /// Colored cells summed over all frames
    pub fn total_pixel_count(&self) -> usize {
        self.frames.iter().map(|f| f.grid().len()).sum()
    }

    pub fn non_empty_frames(&self) -> Vec<&Frame> {
        self.frames.iter().filter(|f| !f.grid().is_empty()).collect()
    }

    pub fn is_active_frame_empty(&self) -> bool {
        self.frames.active_grid().is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Loading & export
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace all frames, the first one becomes active and the history is cleared.
    ///
    /// Returns false and changes nothing if `grids` is empty.
    pub fn load_frames(&mut self, grids: Vec<Grid>) -> bool {
        let count = grids.len();
        if !self.frames.load(grids) {
            log::warn!("ignoring load of an empty frame list");
            return false;
        }
        self.history.clear();
        self.gesture = None;
        log::info!("loaded {count} frames");
        true
    }

    /// Dump of all frames in timeline order
    pub fn export_dump(&self) -> PixelDump {
        PixelDump::from_grids(self.canvas_size, self.frames.iter().map(Frame::grid))
    }

    /// Load frames from a dump, adopting its canvas size. A dump without frames
    /// leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Fails without touching the session if the dump has an invalid canvas
    /// size or pixels outside of it.
    pub fn import_dump(&mut self, dump: &PixelDump) -> Result<()> {
        let grids = dump.to_grids()?;
        if grids.is_empty() {
            log::warn!("pixel dump without frames, nothing imported");
            return Ok(());
        }
        if dump.canvas_size != self.canvas_size {
            self.canvas_size = dump.canvas_size;
            self.frames.resize_canvas(dump.canvas_size);
        }
        self.load_frames(grids);
        Ok(())
    }
}
