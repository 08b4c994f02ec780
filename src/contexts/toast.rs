use dioxus::prelude::*;

use crate::utils::config::MAX_TOASTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Append `toast`, dropping the oldest entries beyond `max`
fn enqueue(toasts: &mut Vec<Toast>, toast: Toast, max: usize) {
    toasts.push(toast);
    if toasts.len() > max {
        let overflow = toasts.len() - max;
        toasts.drain(..overflow);
    }
}

/// Queue of notifications rendered by the global toaster
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastQueue {
    /// Must be called from inside a component scope
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        enqueue(
            &mut self.toasts.write(),
            Toast {
                id,
                kind,
                message: message.into(),
            },
            MAX_TOASTS,
        );
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    pub fn clear(&mut self) {
        self.toasts.write().clear();
    }
}
