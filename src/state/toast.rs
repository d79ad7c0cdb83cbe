//! Toast notifications for transient feedback (login, logout, errors).

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast, dropping the oldest past the visible cap.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}
