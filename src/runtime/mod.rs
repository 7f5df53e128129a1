// SPDX-License-Identifier: MPL-2.0
//! Async runtime layer: shared handle, background ticker, and future
//! tracking.
//!
//! The queue core in [`crate::queue`] is synchronous and single-threaded.
//! This module wraps it for hosts running on tokio:
//!
//! - [`SharedManager`] - cloneable, thread-safe handle
//! - [`ToastHandle`] - per-toast dismiss/update shortcuts from `show`
//! - [`SharedManager::spawn_ticker`] - background deadline processing
//! - [`SharedManager::track`] / [`TrackMessages`] - loading → success/error
//!   toasts around a future

mod shared;
mod task;

pub use shared::{SharedManager, ToastHandle};
pub use task::TrackMessages;
