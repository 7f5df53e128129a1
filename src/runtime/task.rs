// SPDX-License-Identifier: MPL-2.0
//! Toast tracking for async work.
//!
//! [`SharedManager::track`] shows a loading toast, awaits a future, and
//! patches the same toast into a success or error once it settles. The
//! tracked future's result is handed back untouched, so tracking can be
//! dropped into an existing call chain.

use super::shared::SharedManager;
use crate::queue::{ToastPatch, ToastRequest};
use std::future::Future;

/// Content for the three phases of a tracked future.
///
/// The loading toast is shown immediately. On settlement exactly one of
/// the two resolvers runs, producing the patch applied to that same
/// toast; the resolvers can build static content or derive it from the
/// settled value.
pub struct TrackMessages<T, E> {
    loading: ToastRequest,
    on_success: Box<dyn FnOnce(&T) -> ToastPatch + Send>,
    on_error: Box<dyn FnOnce(&E) -> ToastPatch + Send>,
}

impl<T, E> TrackMessages<T, E> {
    /// Creates tracking content with resolver closures.
    pub fn new(
        loading: ToastRequest,
        on_success: impl FnOnce(&T) -> ToastPatch + Send + 'static,
        on_error: impl FnOnce(&E) -> ToastPatch + Send + 'static,
    ) -> Self {
        Self {
            loading,
            on_success: Box::new(on_success),
            on_error: Box::new(on_error),
        }
    }

    /// Creates tracking content from three static titles.
    pub fn text(
        loading: impl Into<String>,
        success: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let success = success.into();
        let error = error.into();
        Self::new(
            ToastRequest::loading(loading),
            move |_| ToastPatch::success(success),
            move |_| ToastPatch::error(error),
        )
    }
}

impl SharedManager {
    /// Tracks a future with a toast: shows `loading` now, then applies
    /// exactly one success-or-error patch to the same toast when the
    /// future settles. Returns the future's result unchanged.
    pub async fn track<T, E>(
        &self,
        future: impl Future<Output = Result<T, E>>,
        messages: TrackMessages<T, E>,
    ) -> Result<T, E> {
        let handle = self.show(messages.loading);
        let result = future.await;
        match &result {
            Ok(value) => handle.update((messages.on_success)(value)),
            Err(error) => handle.update((messages.on_error)(error)),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::{Manager, Severity};

    #[tokio::test]
    async fn resolved_future_patches_into_success() {
        let shared = SharedManager::new(Manager::new());

        let result = shared
            .track(
                async { Ok::<_, String>("ok") },
                TrackMessages::new(
                    ToastRequest::loading("L"),
                    |data| ToastPatch::success(format!("Done: {data}")),
                    |error: &String| ToastPatch::error(format!("Failed: {error}")),
                ),
            )
            .await;

        assert_eq!(result, Ok("ok"));
        let toasts = shared.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title(), Some("Done: ok"));
        assert_eq!(toasts[0].severity(), Severity::Success);
        assert!(toasts[0].is_open());
    }

    #[tokio::test]
    async fn rejected_future_patches_into_error() {
        let shared = SharedManager::new(Manager::new());

        let result: Result<(), String> = shared
            .track(
                async { Err("bad".to_string()) },
                TrackMessages::new(
                    ToastRequest::loading("L"),
                    |()| ToastPatch::success("S"),
                    |error: &String| ToastPatch::error(format!("Failed: {error}")),
                ),
            )
            .await;

        assert_eq!(result, Err("bad".to_string()));
        let toasts = shared.toasts();
        assert_eq!(toasts[0].title(), Some("Failed: bad"));
        assert_eq!(toasts[0].severity(), Severity::Error);
    }

    #[tokio::test]
    async fn loading_toast_is_visible_before_settlement() {
        let shared = SharedManager::new(Manager::new());
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let tracked = shared.track(
            async move {
                let _ = rx.await;
                Ok::<_, String>(())
            },
            TrackMessages::text("L", "S", "E"),
        );
        tokio::pin!(tracked);

        // Poll once so the loading toast is shown, without settling.
        tokio::select! {
            biased;
            _ = &mut tracked => panic!("future settled early"),
            () = std::future::ready(()) => {}
        }
        assert_eq!(shared.toasts()[0].title(), Some("L"));

        let _ = tx.send(());
        let result = tracked.await;
        assert!(result.is_ok());
        assert_eq!(shared.toasts()[0].title(), Some("S"));
    }

    #[tokio::test]
    async fn static_text_messages_cover_both_paths() {
        let shared = SharedManager::new(Manager::new());

        let _ = shared
            .track(async { Err::<(), i32>(7) }, TrackMessages::text("L", "S", "E"))
            .await;

        assert_eq!(shared.toasts()[0].title(), Some("E"));
        assert_eq!(shared.toasts()[0].severity(), Severity::Error);
    }
}
