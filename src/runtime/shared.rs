// SPDX-License-Identifier: MPL-2.0
//! Thread-safe handle around the single-threaded [`Manager`].
//!
//! `SharedManager` is cheap to clone and can be handed to every part of
//! the host that raises toasts. All access is serialized through one
//! mutex, preserving the manager's single-writer model.

use crate::queue::{
    Action, Manager, QueueState, Subscription, Toast, ToastId, ToastPatch, ToastRequest,
};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A cloneable, thread-safe toast manager handle.
#[derive(Clone)]
pub struct SharedManager {
    inner: Arc<Mutex<Manager>>,
}

impl SharedManager {
    /// Wraps a manager for shared use.
    #[must_use]
    pub fn new(manager: Manager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Shows a new toast and returns a handle bound to its id.
    pub fn show(&self, request: ToastRequest) -> ToastHandle {
        let id = self.lock().show(request);
        ToastHandle {
            id,
            manager: self.clone(),
        }
    }

    /// See [`Manager::update`].
    pub fn update(&self, id: ToastId, patch: ToastPatch) {
        self.lock().update(id, patch);
    }

    /// See [`Manager::dismiss`].
    pub fn dismiss(&self, id: ToastId) {
        self.lock().dismiss(id);
    }

    /// See [`Manager::dismiss_all`].
    pub fn dismiss_all(&self) {
        self.lock().dismiss_all();
    }

    /// See [`Manager::remove`].
    pub fn remove(&self, id: ToastId) {
        self.lock().remove(id);
    }

    /// See [`Manager::clear`].
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// See [`Manager::dispatch`].
    pub fn dispatch(&self, action: Action) {
        self.lock().dispatch(action);
    }

    /// See [`Manager::tick`].
    pub fn tick(&self) {
        self.lock().tick();
    }

    /// Registers an observer. Callbacks run with the manager locked, so
    /// they must not call back into this handle; forward into a channel
    /// instead.
    pub fn subscribe(
        &self,
        callback: impl Fn(&QueueState) + Send + Sync + 'static,
    ) -> Subscription {
        self.lock().subscribe(callback)
    }

    /// Returns an owned copy of the current queue state.
    #[must_use]
    pub fn snapshot(&self) -> QueueState {
        self.lock().snapshot()
    }

    /// Returns an owned copy of the queued toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts().to_vec()
    }

    /// See [`Manager::needs_tick`].
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.lock().needs_tick()
    }

    /// The configured maintenance tick interval.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.lock().config().tick_interval()
    }

    /// Spawns a tokio task driving [`Manager::tick`] at the configured
    /// interval, so auto-dismiss and delayed removals fire without the
    /// host wiring its own timer.
    ///
    /// The task runs until aborted via the returned handle (or until the
    /// runtime shuts down).
    pub fn spawn_ticker(&self) -> JoinHandle<()> {
        let handle = self.clone();
        let period = handle.tick_interval();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                handle.tick();
            }
        })
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Manager> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SharedManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedManager").field(&*self.lock()).finish()
    }
}

/// Handle to a shown toast: carries the id plus dismiss/update shortcuts.
#[derive(Clone, Debug)]
pub struct ToastHandle {
    id: ToastId,
    manager: SharedManager,
}

impl ToastHandle {
    /// Returns the toast's id.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Closes this toast and schedules its delayed removal.
    pub fn dismiss(&self) {
        self.manager.dismiss(self.id);
    }

    /// Shallow-merges a patch into this toast.
    pub fn update(&self, patch: ToastPatch) {
        self.manager.update(self.id, patch);
    }
}
