//! Transient toast notifications.
//!
//! Toasts stack independently: each one owns its own timers and removes
//! itself after its display and exit durations, with no dedup or collision
//! handling.

use tracing::debug;

/// Severity styling of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Where a toast is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStage {
    /// Appended but not yet animated in.
    Entering,
    /// Fully visible.
    Shown,
    /// Exit transition running; removal timer pending.
    Leaving,
}

/// One transient notification.
#[derive(Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub stage: ToastStage,
}

/// The stack of live toasts.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast in the `Entering` stage and return its ID.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let message = message.into();
        debug!(id, %message, ?severity, "toast appended");
        self.toasts.push(Toast {
            id,
            message,
            severity,
            stage: ToastStage::Entering,
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Advance a toast's stage. No-op for an already removed toast.
    pub fn set_stage(&mut self, id: u64, stage: ToastStage) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.stage = stage;
        }
    }

    /// Drop a toast from the stack.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
