// SPDX-License-Identifier: MPL-2.0
//! Deadline bookkeeping for delayed removal and auto-dismiss.
//!
//! The queue core keeps all timing outside the reducer: the manager owns
//! two [`Deadlines`] maps (one for dismissed-toast removal, one for
//! auto-dismiss) and resolves them from its `tick` path, so deadlines
//! fire at tick granularity rather than via per-id OS timers.

use super::toast::ToastId;
use std::collections::HashMap;
use std::time::Instant;

/// A set of pending per-toast deadlines.
///
/// At most one deadline is held per id. `schedule` is idempotent — while
/// an entry is pending, further requests for the same id are no-ops —
/// which gives the one-removal-per-dismissed-toast guarantee however many
/// times a toast is dismissed before its purge fires.
#[derive(Debug, Default)]
pub(crate) struct Deadlines {
    pending: HashMap<ToastId, Instant>,
}

impl Deadlines {
    /// Schedules a deadline for `id`, unless one is already pending.
    ///
    /// Returns `true` if a new entry was created.
    pub(crate) fn schedule(&mut self, id: ToastId, at: Instant) -> bool {
        match self.pending.entry(id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(at);
                true
            }
        }
    }

    /// Schedules or replaces the deadline for `id`.
    pub(crate) fn reset(&mut self, id: ToastId, at: Instant) {
        self.pending.insert(id, at);
    }

    /// Drops the pending deadline for `id`, if any.
    pub(crate) fn cancel(&mut self, id: ToastId) {
        self.pending.remove(&id);
    }

    /// Drops every pending deadline.
    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    /// Returns the number of pending deadlines.
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether no deadlines are pending.
    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every id whose deadline has passed, ordered by
    /// deadline and then id so resolution is deterministic.
    pub(crate) fn due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut due: Vec<(Instant, ToastId)> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, at)| (*at, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Returns the earliest pending deadline, if any.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }
}
