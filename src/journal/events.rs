// SPDX-License-Identifier: MPL-2.0
//! Journal event types for toast lifecycle tracking.
//!
//! Every dispatch through the manager leaves one or more entries here, so
//! a host can reconstruct what the queue did and when without attaching
//! an observer up front.

use crate::queue::{Severity, ToastId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single journal entry: what happened, and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    /// Wall-clock time the entry was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The lifecycle event.
    #[serde(flatten)]
    pub kind: JournalEventKind,
}

impl JournalEntry {
    pub(crate) fn now(kind: JournalEventKind) -> Self {
        Self {
            recorded_at: Utc::now(),
            kind,
        }
    }
}

/// Toast lifecycle events recorded by the manager's dispatch path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JournalEventKind {
    /// A toast entered the queue.
    Shown { id: ToastId, severity: Severity },
    /// A queued toast was patched.
    Updated { id: ToastId },
    /// A toast was closed (`None` means a dismiss-all).
    Dismissed { id: Option<ToastId> },
    /// A delayed removal was armed for a dismissed toast. Recorded only
    /// when the dismiss actually created the pending entry, so repeated
    /// dismissals of the same id leave a single scheduling record.
    RemovalScheduled { id: ToastId, delay_ms: u64 },
    /// A toast was purged (`None` means the queue was cleared).
    Removed { id: Option<ToastId> },
    /// A toast was pushed out by a newer one (capacity eviction).
    Evicted { id: ToastId },
}

impl JournalEventKind {
    /// Returns the id this event concerns, if it concerns exactly one.
    #[must_use]
    pub fn toast_id(&self) -> Option<ToastId> {
        match self {
            JournalEventKind::Shown { id, .. }
            | JournalEventKind::RemovalScheduled { id, .. }
            | JournalEventKind::Updated { id }
            | JournalEventKind::Evicted { id } => Some(*id),
            JournalEventKind::Dismissed { id } | JournalEventKind::Removed { id } => *id,
        }
    }
}
