// SPDX-License-Identifier: MPL-2.0
//! Pure state transitions for the toast queue.
//!
//! Every mutation of queue state is expressed as an [`Action`] and applied
//! through [`reduce`], which returns a new state without touching its
//! input. The reducer reads no clock and performs no I/O; removal and
//! auto-dismiss timing are handled by the dispatching
//! [`Manager`](super::Manager).

use super::toast::{Toast, ToastId, ToastPatch};
use crate::config::MAX_VISIBLE_TOASTS;

/// A state-transition action for the toast queue.
///
/// Unknown ids are silently ignored everywhere, keeping the reducer total.
#[derive(Debug, Clone)]
pub enum Action {
    /// Prepend a new toast; excess entries are evicted from the tail.
    Add(Toast),
    /// Shallow-merge a patch into the matching toast, position unchanged.
    Update { id: ToastId, patch: ToastPatch },
    /// Close the matching toast, or every toast when `id` is `None`.
    /// The record stays queued until its delayed removal fires.
    Dismiss { id: Option<ToastId> },
    /// Purge the matching toast, or clear the queue when `id` is `None`.
    Remove { id: Option<ToastId> },
}

/// The ordered toast queue, newest first, never longer than
/// [`MAX_VISIBLE_TOASTS`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueState {
    toasts: Vec<Toast>,
}

impl QueueState {
    /// Returns the queued toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Returns the number of queued toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns `true` if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns the newest toast, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    /// Looks up a toast by id.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    /// Returns whether a toast with the given id is queued.
    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the queued ids, newest first.
    pub fn ids(&self) -> impl Iterator<Item = ToastId> + '_ {
        self.toasts.iter().map(Toast::id)
    }
}

/// Applies an action to the queue, returning the new state.
///
/// The input state is never mutated; callers that care about the
/// difference (evictions, affected ids) diff the two states.
#[must_use]
pub fn reduce(state: &QueueState, action: &Action) -> QueueState {
    match action {
        Action::Add(toast) => {
            let mut toasts = Vec::with_capacity(state.toasts.len() + 1);
            toasts.push(toast.clone());
            toasts.extend(state.toasts.iter().cloned());
            toasts.truncate(MAX_VISIBLE_TOASTS);
            QueueState { toasts }
        }
        Action::Update { id, patch } => {
            let mut next = state.clone();
            if let Some(toast) = next.toasts.iter_mut().find(|toast| toast.id() == *id) {
                toast.apply(patch);
            }
            next
        }
        Action::Dismiss { id } => {
            let mut next = state.clone();
            for toast in &mut next.toasts {
                if id.is_none_or(|target| toast.id() == target) {
                    toast.set_open(false);
                }
            }
            next
        }
        Action::Remove { id } => match id {
            Some(target) => QueueState {
                toasts: state
                    .toasts
                    .iter()
                    .filter(|toast| toast.id() != *target)
                    .cloned()
                    .collect(),
            },
            None => QueueState::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::toast::ToastRequest;

    fn toast(title: &str, raw_id: u64) -> Toast {
        Toast::from_request(ToastRequest::success(title), ToastId::from_raw(raw_id))
    }

    fn state_with(toasts: &[(&str, u64)]) -> QueueState {
        let mut state = QueueState::default();
        for (title, raw_id) in toasts.iter().rev() {
            state = reduce(&state, &Action::Add(toast(title, *raw_id)));
        }
        state
    }

    #[test]
    fn add_prepends_newest_first() {
        let state = reduce(&QueueState::default(), &Action::Add(toast("a", 1)));
        assert_eq!(state.len(), 1);
        assert_eq!(state.front().unwrap().title(), Some("a"));
    }

    #[test]
    fn add_never_exceeds_capacity() {
        let mut state = QueueState::default();
        for raw_id in 0..20 {
            state = reduce(&state, &Action::Add(toast("t", raw_id)));
            assert!(state.len() <= MAX_VISIBLE_TOASTS);
        }
    }

    #[test]
    fn add_evicts_oldest_from_tail() {
        let mut state = reduce(&QueueState::default(), &Action::Add(toast("a", 1)));
        state = reduce(&state, &Action::Add(toast("b", 2)));

        assert_eq!(state.len(), 1);
        assert_eq!(state.front().unwrap().title(), Some("b"));
        assert!(!state.contains(ToastId::from_raw(1)));
    }

    #[test]
    fn reduce_does_not_mutate_input() {
        let before = state_with(&[("a", 1)]);
        let copy = before.clone();
        let _ = reduce(&before, &Action::Add(toast("b", 2)));
        let _ = reduce(&before, &Action::Dismiss { id: None });
        let _ = reduce(&before, &Action::Remove { id: None });
        assert_eq!(before, copy);
    }

    #[test]
    fn update_patches_matching_toast_in_place() {
        let state = state_with(&[("a", 1)]);
        let next = reduce(
            &state,
            &Action::Update {
                id: ToastId::from_raw(1),
                patch: ToastPatch::new().with_title("patched"),
            },
        );

        assert_eq!(next.get(ToastId::from_raw(1)).unwrap().title(), Some("patched"));
        assert_eq!(next.len(), state.len());
    }

    #[test]
    fn update_unknown_id_is_deep_noop() {
        let state = state_with(&[("a", 1)]);
        let next = reduce(
            &state,
            &Action::Update {
                id: ToastId::from_raw(99),
                patch: ToastPatch::new().with_title("ghost"),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn dismiss_by_id_closes_exactly_that_toast() {
        let state = state_with(&[("a", 1)]);
        let next = reduce(
            &state,
            &Action::Dismiss {
                id: Some(ToastId::from_raw(1)),
            },
        );

        let record = next.get(ToastId::from_raw(1)).unwrap();
        assert!(!record.is_open());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn dismiss_without_id_closes_every_toast() {
        let state = state_with(&[("a", 1)]);
        let next = reduce(&state, &Action::Dismiss { id: None });
        assert!(next.toasts().iter().all(|toast| !toast.is_open()));
    }

    #[test]
    fn dismiss_unknown_id_leaves_open_flags_alone() {
        let state = state_with(&[("a", 1)]);
        let next = reduce(
            &state,
            &Action::Dismiss {
                id: Some(ToastId::from_raw(42)),
            },
        );
        assert_eq!(next, state);
        assert!(next.front().unwrap().is_open());
    }

    #[test]
    fn remove_by_id_deletes_exactly_one() {
        let state = state_with(&[("a", 5)]);
        let next = reduce(
            &state,
            &Action::Remove {
                id: Some(ToastId::from_raw(5)),
            },
        );
        assert!(next.is_empty());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let state = state_with(&[("a", 5)]);
        let next = reduce(
            &state,
            &Action::Remove {
                id: Some(ToastId::from_raw(6)),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn remove_without_id_clears_the_queue() {
        let state = state_with(&[("a", 1)]);
        let next = reduce(&state, &Action::Remove { id: None });
        assert!(next.is_empty());
    }
}
