// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record held in the queue, the
//! `ToastRequest` callers build, and the `ToastPatch` shallow-merge type
//! used by update dispatches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
///
/// Ids are assigned by the owning [`Manager`](super::Manager) from a
/// monotonic per-instance counter and are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value of this id.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level determines the default display duration and is passed
/// through to the host for visual styling. The queue core never inspects
/// it beyond resolving auto-dismiss timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Operation completed successfully (3s duration).
    #[default]
    Success,
    /// Informational message (3s duration).
    Info,
    /// Warning that doesn't block operation (5s duration).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns the default auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None, // Manual dismiss required
        }
    }
}

/// Per-toast auto-dismiss policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoDismiss {
    /// Use the severity's default duration.
    #[default]
    Default,
    /// Dismiss after the given duration, overriding the severity default.
    After(Duration),
    /// Never dismiss automatically.
    Never,
}

impl AutoDismiss {
    /// Resolves this policy against a severity's default.
    #[must_use]
    pub fn resolve(self, severity: Severity) -> Option<Duration> {
        match self {
            AutoDismiss::Default => severity.auto_dismiss_duration(),
            AutoDismiss::After(duration) => Some(duration),
            AutoDismiss::Never => None,
        }
    }
}

/// Opaque reference to a host UI affordance attached to a toast
/// (e.g. an "Undo" button). The queue core carries it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    id: String,
    label: String,
}

impl ToastAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Returns the host-defined action identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A toast to be shown, before the manager has assigned it an id.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    pub(crate) severity: Severity,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) action: Option<ToastAction>,
    pub(crate) auto_dismiss: AutoDismiss,
}

impl ToastRequest {
    /// Creates a new request with the given severity and no content.
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Creates a success request.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Severity::Success).with_title(title)
    }

    /// Creates an info request.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Severity::Info).with_title(title)
    }

    /// Creates a warning request.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Severity::Warning).with_title(title)
    }

    /// Creates an error request.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Severity::Error).with_title(title)
    }

    /// Creates a sticky info request, suited for in-progress work that will
    /// be patched into a success or error toast once it settles.
    pub fn loading(title: impl Into<String>) -> Self {
        Self::new(Severity::Info).with_title(title).sticky()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a host action reference.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss_after(mut self, duration: Duration) -> Self {
        self.auto_dismiss = AutoDismiss::After(duration);
        self
    }

    /// Disables auto-dismiss for this toast.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.auto_dismiss = AutoDismiss::Never;
        self
    }
}

/// A toast record held in the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    title: Option<String>,
    description: Option<String>,
    action: Option<ToastAction>,
    open: bool,
    auto_dismiss: AutoDismiss,
    created_at: Instant,
}

impl Toast {
    /// Builds the queued record for a request. Only the manager assigns ids.
    pub(crate) fn from_request(request: ToastRequest, id: ToastId) -> Self {
        Self {
            id,
            severity: request.severity,
            title: request.title,
            description: request.description,
            action: request.action,
            open: true,
            auto_dismiss: request.auto_dismiss,
            created_at: Instant::now(),
        }
    }

    /// Returns the toast's unique id.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the attached host action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Returns whether the toast is still visible. Dismissed toasts stay
    /// queued with `open == false` until their delayed removal fires.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the auto-dismiss policy.
    #[must_use]
    pub fn auto_dismiss(&self) -> AutoDismiss {
        self.auto_dismiss
    }

    /// Returns the resolved auto-dismiss duration, if any.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        self.auto_dismiss.resolve(self.severity)
    }

    /// Returns when this toast was shown.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this toast.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Shallow-merges the patch into this record. Absent fields are left
    /// untouched; the id, open flag, and creation time never change here.
    pub(crate) fn apply(&mut self, patch: &ToastPatch) {
        if let Some(severity) = patch.severity {
            self.severity = severity;
        }
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(action) = &patch.action {
            self.action = Some(action.clone());
        }
        if let Some(auto_dismiss) = patch.auto_dismiss {
            self.auto_dismiss = auto_dismiss;
        }
    }
}

/// A shallow-merge update for a queued toast.
///
/// Only fields that are set are written; everything else keeps its
/// current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastPatch {
    pub(crate) severity: Option<Severity>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) action: Option<ToastAction>,
    pub(crate) auto_dismiss: Option<AutoDismiss>,
}

impl ToastPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience patch turning a toast into a success toast with the
    /// given title, re-arming the severity-default dismiss timing.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new()
            .with_severity(Severity::Success)
            .with_title(title)
            .with_auto_dismiss(AutoDismiss::Default)
    }

    /// Convenience patch turning a toast into an error toast with the
    /// given title.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new()
            .with_severity(Severity::Error)
            .with_title(title)
            .with_auto_dismiss(AutoDismiss::Default)
    }

    /// Sets the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the host action reference.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the auto-dismiss policy.
    #[must_use]
    pub fn with_auto_dismiss(mut self, auto_dismiss: AutoDismiss) -> Self {
        self.auto_dismiss = Some(auto_dismiss);
        self
    }

    /// Returns `true` when no field is set, i.e. applying the patch
    /// cannot change any record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns `true` when applying this patch changes dismiss timing
    /// (severity or auto-dismiss policy), which re-arms the deadline.
    #[must_use]
    pub fn retimes(&self) -> bool {
        self.severity.is_some() || self.auto_dismiss.is_some()
    }
}
