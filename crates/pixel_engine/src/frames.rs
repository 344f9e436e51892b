//! Frame store
//!
//! Ordered animation frames with one active frame. The store always holds at
//! least one frame and the active id always names a frame in the store.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{EditorError, Grid, Result};

/// Opaque frame identity, stable across pixel edits and reordering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(u64);

impl Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    id: FrameId,
    grid: Grid,
}

impl Frame {
    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[derive(Clone, Debug)]
pub struct FrameStore {
    frames: Vec<Frame>,
    active: FrameId,
    next_id: u64,
    canvas_size: i32,
}

impl FrameStore {
    /// A store with a single empty frame
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCanvasSize`] if `canvas_size` isn't positive.
    pub fn new(canvas_size: i32) -> Result<Self> {
        if canvas_size <= 0 {
            return Err(EditorError::InvalidCanvasSize(canvas_size));
        }
        Ok(Self::with_canvas_size(canvas_size))
    }

    pub(crate) fn with_canvas_size(canvas_size: i32) -> Self {
        let mut store = Self {
            frames: Vec::new(),
            active: FrameId(0),
            next_id: 0,
            canvas_size,
        };
        store.active = store.push(Grid::empty(canvas_size));
        store
    }

    fn allocate_id(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, grid: Grid) -> FrameId {
        let id = self.allocate_id();
        self.frames.push(Frame { id, grid });
        id
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    pub fn canvas_size(&self) -> i32 {
        self.canvas_size
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false, the store never drops its last frame
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn get(&self, id: FrameId) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id == id)
    }

    pub fn index_of(&self, id: FrameId) -> Option<usize> {
        self.frames.iter().position(|f| f.id == id)
    }

    pub fn contains(&self, id: FrameId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn active_id(&self) -> FrameId {
        self.active
    }

    pub fn active_index(&self) -> usize {
        self.index_of(self.active).unwrap_or(0)
    }

    pub fn active(&self) -> &Frame {
        &self.frames[self.active_index()]
    }

    pub fn active_grid(&self) -> &Grid {
        &self.active().grid
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Grid write back
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace the pixel content of a frame, the frame keeps its identity
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFrame`] if there's no frame with that id.
    pub fn set_grid(&mut self, id: FrameId, grid: Grid) -> Result<()> {
        let Some(frame) = self.frames.iter_mut().find(|f| f.id == id) else {
            return Err(EditorError::UnknownFrame(id));
        };
        frame.grid = grid;
        Ok(())
    }

    pub fn set_active_grid(&mut self, grid: Grid) {
        let index = self.active_index();
        self.frames[index].grid = grid;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Frame lifecycle
    // ═══════════════════════════════════════════════════════════════════════

    /// Append an empty frame and make it active
    pub fn add_frame(&mut self) -> FrameId {
        let id = self.push(Grid::empty(self.canvas_size));
        self.active = id;
        log::info!("added frame {id}, {} frames", self.frames.len());
        id
    }

    /// Remove a frame.
    ///
    /// If the removed frame was active, the frame now at the same index becomes
    /// active, or the new last frame when the last one was removed.
    ///
    /// # Errors
    ///
    /// [`EditorError::LastFrame`] when only one frame is left,
    /// [`EditorError::UnknownFrame`] for an id that isn't in the store.
    /// The store is unchanged in both cases.
    pub fn delete_frame(&mut self, id: FrameId) -> Result<()> {
        let Some(index) = self.index_of(id) else {
            return Err(EditorError::UnknownFrame(id));
        };
        if self.frames.len() <= 1 {
            return Err(EditorError::LastFrame);
        }

        self.frames.remove(index);
        if self.active == id {
            let next = index.min(self.frames.len() - 1);
            self.active = self.frames[next].id;
        }
        log::info!("deleted frame {id}, {} frames left", self.frames.len());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFrame`] if there's no frame with that id.
    pub fn select_frame(&mut self, id: FrameId) -> Result<()> {
        if !self.contains(id) {
            return Err(EditorError::UnknownFrame(id));
        }
        self.active = id;
        Ok(())
    }

    /// Copy a frame into a new frame right after it, the copy becomes active
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownFrame`] if there's no frame with that id.
    pub fn duplicate_frame(&mut self, id: FrameId) -> Result<FrameId> {
        let Some(index) = self.index_of(id) else {
            return Err(EditorError::UnknownFrame(id));
        };
        // grids are immutable values, sharing the storage is a full copy semantically
        let grid = self.frames[index].grid.clone();
        let new_id = self.allocate_id();
        self.frames.insert(index + 1, Frame { id: new_id, grid });
        self.active = new_id;
        log::info!("duplicated frame {id} as {new_id}");
        Ok(new_id)
    }

    /// Move the frame at `from` to `to`, keeping the order of the others.
    ///
    /// A `to` past the end moves the frame to the end.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::FrameIndexOutOfRange`] if `from` isn't a valid index.
    pub fn reorder_frames(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.frames.len() {
            return Err(EditorError::FrameIndexOutOfRange {
                index: from,
                len: self.frames.len(),
            });
        }
        let frame = self.frames.remove(from);
        let to = to.min(self.frames.len());
        self.frames.insert(to, frame);
        Ok(())
    }

    /// Activate the frame after the active one, wrapping from last to first
    pub fn next_frame(&mut self) -> FrameId {
        let next = (self.active_index() + 1) % self.frames.len();
        self.active = self.frames[next].id;
        self.active
    }

    /// Replace all frames with new ones built from `grids`, the first becomes active.
    ///
    /// Returns false and leaves the store alone if `grids` is empty.
    pub fn load(&mut self, grids: Vec<Grid>) -> bool {
        if grids.is_empty() {
            return false;
        }
        self.frames.clear();
        for grid in grids {
            let grid = if grid.size() == self.canvas_size { grid } else { grid.resized(self.canvas_size) };
            self.push(grid);
        }
        self.active = self.frames[0].id;
        true
    }

    /// Switch to a new canvas size, pixels outside of it are dropped
    pub fn resize_canvas(&mut self, canvas_size: i32) {
        self.canvas_size = canvas_size;
        for frame in &mut self.frames {
            frame.grid = frame.grid.resized(canvas_size);
        }
    }
}
