//! Undo/redo over the wall list.
//!
//! A linear stack of immutable wall-list snapshots plus a cursor. Recording
//! truncates everything after the cursor, so a new edit discards redo
//! history. The stack never becomes empty: the first entry is the initial
//! (possibly empty) wall list and the cursor always points at a valid entry.

use crate::model::Wall;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Arc<[Wall]>>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: &[Wall]) -> Self {
        Self::with_limit(initial, usize::MAX)
    }

    /// Like [`History::new`] but keeping at most `limit` entries; the oldest
    /// are dropped first.
    pub fn with_limit(initial: &[Wall], limit: usize) -> Self {
        Self {
            entries: vec![Arc::from(initial)],
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Throw away all entries and start again from `initial`.
    pub fn reset(&mut self, initial: &[Wall]) {
        self.entries.clear();
        self.entries.push(Arc::from(initial));
        self.cursor = 0;
    }

    /// Snapshot `walls` as the newest state.
    pub fn record(&mut self, walls: &[Wall]) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Arc::from(walls));
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
        debug!(
            "History recorded: {} walls, entry {}/{}",
            walls.len(),
            self.cursor + 1,
            self.entries.len()
        );
        debug_assert!(self.cursor < self.entries.len());
    }

    /// Step back one entry. At the oldest entry this is a no-op returning the
    /// current state.
    pub fn undo(&mut self) -> Vec<Wall> {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one entry. At the newest entry this is a no-op returning
    /// the current state.
    pub fn redo(&mut self) -> Vec<Wall> {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Deep copy of the wall list at the cursor.
    pub fn current(&self) -> Vec<Wall> {
        self.entries[self.cursor].to_vec()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(&[])
    }
}
