//! Toast notifications.
//!
//! Toasts live in a single app-level signal. Each one removes itself after
//! [`TOAST_DURATION_MS`]; the oldest is dropped once [`MAX_TOASTS`] is
//! exceeded.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::{Toast, MAX_TOASTS, TOAST_DURATION_MS};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

/// A toast with its stack identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Append `entry`, dropping the oldest toasts beyond `max`.
pub fn push_capped(stack: &mut Vec<ToastEntry>, entry: ToastEntry, max: usize) {
    stack.push(entry);
    if stack.len() > max {
        let excess = stack.len() - max;
        stack.drain(..excess);
    }
}

/// Show a toast and schedule its removal.
pub fn push_toast(toasts: RwSignal<Vec<ToastEntry>>, toast: Toast) {
    log::debug!("🔔 {}: {}", toast.title, toast.description);

    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    toasts.update(|stack| push_capped(stack, ToastEntry { id, toast }, MAX_TOASTS));

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        dismiss_toast(toasts, id);
    });
}

/// Remove the toast with `id`, if still shown.
pub fn dismiss_toast(toasts: RwSignal<Vec<ToastEntry>>, id: u64) {
    toasts.update(|stack| stack.retain(|entry| entry.id != id));
}

#[component]
pub fn Toaster(toasts: RwSignal<Vec<ToastEntry>>) -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|entry| entry.id
                children=move |ToastEntry { id, toast }| {
                    let class_name = format!("toast {}", toast.kind.css_class());
                    let role = toast.kind.aria_role();
                    view! {
                        <div class=class_name role=role>
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Закрыть"
                                on:click=move |_| dismiss_toast(toasts, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
