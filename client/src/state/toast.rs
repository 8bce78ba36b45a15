//! Transient notifications.
//!
//! Toasts are kept in a small bounded queue; the oldest is dropped when a new
//! one would overflow it. In the browser each toast dismisses itself after a
//! few seconds.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

pub const MAX_TOASTS: usize = 4;
#[cfg(feature = "csr")]
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

pub fn show(toasts: RwSignal<ToastQueue>, kind: ToastKind, message: String) {
    match kind {
        ToastKind::Success => tracing::info!(%message, "toast"),
        ToastKind::Error => tracing::warn!(%message, "toast"),
    }
    let mut id = 0;
    toasts.update(|q| id = q.push(kind, message));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.try_update(|q| q.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
