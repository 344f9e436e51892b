//! History engine
//!
//! One linear log of grid snapshots shared by all frames, with a cursor that
//! separates the undoable past from the redoable future:
//! - `checkpoint` drops everything after the cursor, appends and moves the cursor
//!   onto the new entry. The oldest entry is evicted once the log exceeds its capacity.
//! - `undo` / `redo` move the cursor and hand back the entry that has to be restored.
//!
//! The cursor is `None` exactly when the log is empty. Checkpoints are taken by the
//! caller, typically once per gesture, so one undo step is one user action.

use std::collections::VecDeque;

use crate::{FrameId, Grid};

/// Maximum number of retained snapshots unless configured otherwise
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A full copy of one frame's grid at a checkpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    frame_id: FrameId,
    grid: Grid,
    description: String,
}

impl HistoryEntry {
    pub fn new(frame_id: FrameId, grid: Grid, description: impl Into<String>) -> Self {
        Self {
            frame_id,
            grid,
            description: description.into(),
        }
    }

    pub fn frame_id(&self) -> FrameId {
        self.frame_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A history retaining at most `capacity` entries (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the current entry, `None` while the log is empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Append a snapshot after the cursor, discarding the redo branch
    pub fn checkpoint(&mut self, entry: HistoryEntry) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.entries.len() {
            log::info!("history: discarding {} redo entries", self.entries.len() - keep);
            self.entries.truncate(keep);
        }

        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            log::info!("history: evicted oldest entry (capacity {})", self.capacity);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Step back, returns the entry to restore or `None` if there is nothing to undo
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        let c = self.cursor? - 1;
        self.cursor = Some(c);
        self.entries.get(c)
    }

    /// Step forward, returns the entry to restore or `None` if there is nothing to redo
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        let c = self.cursor? + 1;
        self.cursor = Some(c);
        self.entries.get(c)
    }

    /// Description of the entry an undo would restore
    pub fn undo_description(&self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.cursor.and_then(|c| self.entries.get(c - 1)).map(HistoryEntry::description)
    }

    /// Description of the entry a redo would restore
    pub fn redo_description(&self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.cursor.and_then(|c| self.entries.get(c + 1)).map(HistoryEntry::description)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
