// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` is the queue's single writer: every mutation is expressed
//! as an [`Action`] and funneled through [`Manager::dispatch`], which
//! applies the pure reducer, arms or cancels deadlines, journals the
//! transition, and broadcasts the new state to all observers.
//!
//! There is no global state. Hosts construct one manager at startup and
//! inject it where toasts are raised, or wrap it in a
//! [`SharedManager`](crate::runtime::SharedManager) for cross-thread use.

use super::reducer::{reduce, Action, QueueState};
use super::schedule::Deadlines;
use super::toast::{Toast, ToastId, ToastPatch, ToastRequest};
use crate::config::Config;
use crate::journal::{Journal, JournalCapacity, JournalEventKind};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Instant;

/// Observer callback invoked with the queue state after every dispatch.
pub type Observer = Arc<dyn Fn(&QueueState) + Send + Sync>;

#[derive(Default)]
struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(u64, Observer)>,
}

type SharedRegistry = Arc<Mutex<ObserverRegistry>>;

/// Token for a registered observer.
///
/// Dropping the token keeps the observer registered; call
/// [`Subscription::unsubscribe`] to retire it. Unsubscribing while a
/// broadcast is in flight is safe and takes effect on the next dispatch.
pub struct Subscription {
    registry: Weak<Mutex<ObserverRegistry>>,
    id: u64,
}

impl Subscription {
    /// Removes the observer this token was returned for.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.observers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Manages the toast queue: dispatch, deadlines, journal, and broadcast.
pub struct Manager {
    state: QueueState,
    registry: SharedRegistry,
    next_toast_id: u64,
    removals: Deadlines,
    auto_dismiss: Deadlines,
    journal: Journal,
    config: Config,
}

impl Manager {
    /// Creates a manager with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a manager with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            state: QueueState::default(),
            registry: SharedRegistry::default(),
            next_toast_id: 0,
            removals: Deadlines::default(),
            auto_dismiss: Deadlines::default(),
            journal: Journal::new(JournalCapacity::new(config.journal_capacity())),
            config,
        }
    }

    /// Returns the manager's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shows a new toast: assigns a fresh id and dispatches the add.
    ///
    /// Returns the assigned id, usable with [`Manager::update`],
    /// [`Manager::dismiss`], and [`Manager::remove`].
    pub fn show(&mut self, request: ToastRequest) -> ToastId {
        let id = ToastId::from_raw(self.next_toast_id);
        self.next_toast_id = self.next_toast_id.wrapping_add(1);
        self.dispatch(Action::Add(Toast::from_request(request, id)));
        id
    }

    /// Shallow-merges a patch into the matching toast. Unknown ids are a
    /// no-op. A patch that changes severity or auto-dismiss policy re-arms
    /// the dismiss deadline from now.
    pub fn update(&mut self, id: ToastId, patch: ToastPatch) {
        self.dispatch(Action::Update { id, patch });
    }

    /// Closes the matching toast and schedules its delayed removal.
    ///
    /// Dismissing the same id again while its removal is pending is
    /// absorbed; exactly one removal fires per dismissed toast.
    pub fn dismiss(&mut self, id: ToastId) {
        self.dispatch(Action::Dismiss { id: Some(id) });
    }

    /// Closes every queued toast and schedules their delayed removals.
    pub fn dismiss_all(&mut self) {
        self.dispatch(Action::Dismiss { id: None });
    }

    /// Purges the matching toast immediately. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ToastId) {
        self.dispatch(Action::Remove { id: Some(id) });
    }

    /// Empties the queue and drops all pending deadlines.
    pub fn clear(&mut self) {
        self.dispatch(Action::Remove { id: None });
    }

    /// The single writer path: applies the action through the reducer,
    /// performs deadline and journal side effects, then broadcasts the
    /// new state to all observers.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, &action);
        self.apply_side_effects(&action, &next);
        self.state = next;
        self.broadcast();
    }

    /// Processes due deadlines, re-entering the dispatch path.
    ///
    /// Expired auto-dismiss deadlines dispatch a dismiss; expired removal
    /// deadlines dispatch the purge of the dismissed record. Call this
    /// periodically from the host's event loop (every 100-500ms), or let
    /// [`SharedManager::spawn_ticker`](crate::runtime::SharedManager::spawn_ticker)
    /// drive it.
    pub fn tick(&mut self) {
        let now = Instant::now();
        for id in self.auto_dismiss.due(now) {
            self.dispatch(Action::Dismiss { id: Some(id) });
        }
        for id in self.removals.due(now) {
            self.dispatch(Action::Remove { id: Some(id) });
        }
    }

    /// Registers an observer invoked synchronously with the queue state
    /// after every dispatch, in registration order.
    ///
    /// Callbacks run on the dispatching thread; keep them light and
    /// non-reentrant (forward into a channel rather than calling back
    /// into a shared handle).
    pub fn subscribe(&self, callback: impl Fn(&QueueState) + Send + Sync + 'static) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id = registry.next_id.wrapping_add(1);
        registry.observers.push((id, Arc::new(callback)));
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .len()
    }

    /// Returns the current queue state.
    #[must_use]
    pub fn state(&self) -> &QueueState {
        &self.state
    }

    /// Returns an owned copy of the current queue state.
    #[must_use]
    pub fn snapshot(&self) -> QueueState {
        self.state.clone()
    }

    /// Returns the queued toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        self.state.toasts()
    }

    /// Returns the dispatch journal.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Returns the earliest pending deadline of either kind, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.removals.next_deadline(), self.auto_dismiss.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (deadline, None) | (None, deadline) => deadline,
        }
    }

    /// Returns whether ticking still has work to do: queued toasts or
    /// pending deadlines. Hosts use this to pause their tick source.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        !self.state.is_empty() || !self.removals.is_empty() || !self.auto_dismiss.is_empty()
    }

    fn apply_side_effects(&mut self, action: &Action, next: &QueueState) {
        let now = Instant::now();
        match action {
            Action::Add(toast) => {
                self.journal.record(JournalEventKind::Shown {
                    id: toast.id(),
                    severity: toast.severity(),
                });
                for id in self.state.ids() {
                    if !next.contains(id) {
                        // Pushed out by the new toast. Its auto-dismiss is
                        // moot; a pending removal is left to fire as a no-op.
                        self.auto_dismiss.cancel(id);
                        self.journal.record(JournalEventKind::Evicted { id });
                    }
                }
                if let Some(after) = toast.auto_dismiss_after() {
                    self.auto_dismiss.reset(toast.id(), now + after);
                }
            }
            Action::Update { id, patch } => {
                if let Some(toast) = next.get(*id) {
                    self.journal.record(JournalEventKind::Updated { id: *id });
                    if patch.retimes() {
                        match toast.auto_dismiss_after() {
                            Some(after) if toast.is_open() => {
                                self.auto_dismiss.reset(*id, now + after);
                            }
                            _ => self.auto_dismiss.cancel(*id),
                        }
                    }
                }
            }
            Action::Dismiss { id } => {
                let affected: Vec<ToastId> = match id {
                    Some(target) if self.state.contains(*target) => vec![*target],
                    Some(_) => Vec::new(),
                    None => self.state.ids().collect(),
                };
                if !affected.is_empty() {
                    self.journal.record(JournalEventKind::Dismissed { id: *id });
                }
                let delay = self.config.remove_delay();
                for target in affected {
                    self.auto_dismiss.cancel(target);
                    if self.removals.schedule(target, now + delay) {
                        self.journal.record(JournalEventKind::RemovalScheduled {
                            id: target,
                            delay_ms: delay.as_millis() as u64,
                        });
                    }
                }
            }
            Action::Remove { id } => match id {
                Some(target) => {
                    if self.state.contains(*target) {
                        self.journal.record(JournalEventKind::Removed { id: *id });
                    }
                    self.removals.cancel(*target);
                    self.auto_dismiss.cancel(*target);
                }
                None => {
                    if !self.state.is_empty() {
                        self.journal.record(JournalEventKind::Removed { id: None });
                    }
                    self.removals.clear();
                    self.auto_dismiss.clear();
                }
            },
        }
    }

    fn broadcast(&self) {
        // Snapshot the observer list first: registrations and removals
        // during this pass take effect on the next dispatch.
        let observers: Vec<Observer> = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .observers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect()
        };
        for callback in observers {
            callback(&self.state);
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("state", &self.state)
            .field("observers", &self.observer_count())
            .field("pending_removals", &self.removals.len())
            .field("pending_auto_dismiss", &self.auto_dismiss.len())
            .field("journal_len", &self.journal.len())
            .finish()
    }
}
