// SPDX-License-Identifier: MPL-2.0
//! Toast queue core: records, reducer, deadlines, and the manager.
//!
//! This module is the heart of the crate. Toasts live in an ordered,
//! capacity-bounded queue (one visible toast at a time; a newer toast
//! immediately evicts the older one). All mutation flows through a single
//! dispatcher applying a pure reducer, and every dispatch is broadcast
//! synchronously to registered observers.
//!
//! # Components
//!
//! - [`toast`] - `Toast` records, requests, and shallow-merge patches
//! - [`reducer`] - `Action` and the pure `reduce` transition function
//! - [`manager`] - `Manager`: dispatch, deadlines, journal, broadcast
//!
//! # Usage
//!
//! ```
//! use toastq::{Manager, ToastPatch, ToastRequest};
//!
//! let mut manager = Manager::new();
//!
//! let id = manager.show(ToastRequest::success("Image saved"));
//! manager.update(id, ToastPatch::new().with_description("to gallery"));
//! manager.dismiss(id);
//!
//! // The record stays queued (closed) until its delayed removal fires
//! // from a later `manager.tick()`.
//! assert!(!manager.state().get(id).unwrap().is_open());
//! ```
//!
//! # Lifecycle
//!
//! Per id: absent → visible (`open: true`) → hidden (`open: false`) →
//! absent. Dismissal (explicit or auto) closes the record and arms a
//! delayed removal; only the removal (or a bulk clear / capacity
//! eviction) takes it out of the queue.

mod manager;
mod reducer;
mod schedule;
mod toast;

pub use manager::{Manager, Observer, Subscription};
pub use reducer::{reduce, Action, QueueState};
pub use toast::{AutoDismiss, Severity, Toast, ToastAction, ToastId, ToastPatch, ToastRequest};
