// SPDX-License-Identifier: MPL-2.0
//! Dispatch journal: a memory-bounded record of toast lifecycle events.
//!
//! The manager appends an entry for every lifecycle transition it applies
//! (shown, updated, dismissed, removal-scheduled, removed, evicted) into a
//! ring buffer, oldest entries evicted at capacity. Hosts read it for
//! debugging and can export it as JSON.
//!
//! # Components
//!
//! - [`RingBuffer`] - Generic ring buffer with configurable capacity
//! - [`JournalEntry`] / [`JournalEventKind`] - Timestamped lifecycle events
//! - [`Journal`] - The bounded event log owned by the manager
//! - [`export`] - Atomic JSON export

mod buffer;
mod events;
mod export;

pub use buffer::{JournalCapacity, RingBuffer};
pub use events::{JournalEntry, JournalEventKind};
pub use export::{
    default_export_directory, export_entries, generate_default_filename, write_atomic, ExportError,
};

use std::path::Path;

/// A bounded, append-only log of toast lifecycle events.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: RingBuffer<JournalEntry>,
}

impl Journal {
    /// Creates an empty journal with the given capacity.
    #[must_use]
    pub fn new(capacity: JournalCapacity) -> Self {
        Self {
            entries: RingBuffer::new(capacity),
        }
    }

    pub(crate) fn record(&mut self, kind: JournalEventKind) {
        self.entries.push(JournalEntry::now(kind));
    }

    /// Returns the recorded entries in chronological order (oldest first).
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the journal's capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Clears all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Exports the journal as a JSON array, written atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn export_to_path(&self, path: &Path) -> Result<(), ExportError> {
        let entries: Vec<JournalEntry> = self.entries().cloned().collect();
        export_entries(path, &entries)
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(JournalCapacity::default())
    }
}
