//! Transient user-notification queue.
//!
//! DESIGN
//! ======
//! Network and validation failures surface as inline toasts rather than
//! panics or silent drops. The queue is a context `RwSignal`; the stack
//! component renders it and schedules auto-dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier suffix for the toast element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: uuid::Uuid,
    pub kind: ToastKind,
    pub text: String,
}

/// Queue of visible notifications, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> uuid::Uuid {
        let id = uuid::Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: uuid::Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Convenience accessors used from page action handlers.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

pub fn show_info(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    push_and_expire(toasts, ToastKind::Info, text.into());
}

pub fn show_success(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    push_and_expire(toasts, ToastKind::Success, text.into());
}

pub fn show_error(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    push_and_expire(toasts, ToastKind::Error, text.into());
}

/// Seconds a toast stays visible before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_TTL_SECS: u64 = 3;

fn push_and_expire(toasts: RwSignal<ToastState>, kind: ToastKind, text: String) {
    let mut id = None;
    toasts.update(|s| id = Some(s.push(kind, text)));
    let Some(id) = id else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_TTL_SECS)).await;
            toasts.update(|s| s.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
