//! Transient Notifications
//!
//! Toast context plus the renderer mounted once at the app root.
//! Toasts auto-dismiss after a few seconds and can be clicked away.

use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast state provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.update_value(|v| *v += 1);
        self.set_toasts
            .update(|toasts| toasts.push(Toast { id, kind, message }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Toast stack rendered above everything else
#[component]
pub fn Toaster() -> impl IntoView {
    let toast = use_toast();
    let toasts = toast.toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| toast.dismiss(id)>
                            {t.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
