//! Undo/Redo for the editor session
//!
//! Checkpoints capture the active frame. Undo and redo restore the snapshot the
//! cursor lands on into the frame it was taken from and make that frame active.

use crate::{History, HistoryEntry};

use super::EditorSession;

impl EditorSession {
    /// Capture the active frame into the history
    pub fn checkpoint(&mut self) {
        self.checkpoint_with("Checkpoint");
    }

    /// Capture the active frame into the history with a label for undo menus
    pub fn checkpoint_with(&mut self, description: impl Into<String>) {
        let frame = self.frames.active();
        let entry = HistoryEntry::new(frame.id(), frame.grid().clone(), description);
        self.history.checkpoint(entry);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    /// Returns false if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(&entry);
        true
    }

    /// Returns false if there was nothing to redo
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(&entry);
        true
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn restore(&mut self, entry: &HistoryEntry) {
        // a snapshot of a deleted frame moves the cursor but has nowhere to go
        if let Err(err) = self.frames.set_grid(entry.frame_id(), entry.grid().clone()) {
            log::warn!("history entry '{}' not restored: {err}", entry.description());
            return;
        }
        if let Err(err) = self.frames.select_frame(entry.frame_id()) {
            log::warn!("can't activate restored frame: {err}");
        }
        self.gesture = None;
    }
}
