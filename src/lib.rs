// SPDX-License-Identifier: MPL-2.0
//! `toastq` is a capacity-bounded toast notification queue with a pure
//! reducer core, synchronous observer broadcast, and deferred removal.
//!
//! One toast is visible at a time; showing a new one evicts the old.
//! Dismissal closes a toast but keeps its record queued until a delayed
//! removal purges it, so hosts can animate the exit. A bounded journal
//! records every lifecycle transition, and an optional tokio layer
//! provides a shared handle, a background ticker, and loading/success/
//! error toasts around futures.

#![doc(html_root_url = "https://docs.rs/toastq/0.3.0")]

pub mod config;
pub mod error;
pub mod journal;
pub mod queue;
pub mod runtime;

pub use config::Config;
pub use error::{Error, Result};
pub use journal::{Journal, JournalEntry, JournalEventKind};
pub use queue::{
    reduce, Action, AutoDismiss, Manager, Observer, QueueState, Severity, Subscription, Toast,
    ToastAction, ToastId, ToastPatch, ToastRequest,
};
pub use runtime::{SharedManager, ToastHandle, TrackMessages};
