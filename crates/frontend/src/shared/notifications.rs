use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::config;
use crate::shared::error::AppError;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert-triangle",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first, capped at `max_visible`.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            max_visible: max_visible.max(1),
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > self.max_visible {
            let overflow = self.toasts.len() - self.max_visible;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast notification service, provided at the root of the app.
#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<ToastQueue>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(config().notifications.max_visible)),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Logs `err` for operators and shows its French message once.
    pub fn report(&self, err: &AppError, context: &str) {
        log::error!("{}: {}", context, err);
        // The redirect to the login page already tells the user.
        if matches!(err, AppError::SessionExpired | AppError::NotAuthenticated) {
            return;
        }
        self.error(err.user_message());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, message: String) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        let delay = config().notifications.dismiss_after_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let _ = queue.try_update(|q| q.dismiss(id));
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || notifications.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            {icon(toast.kind.icon_name())}
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Fermer"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_caps_and_dismisses() {
        let mut queue = ToastQueue::new(2);
        let first = queue.push(ToastKind::Info, "un");
        let second = queue.push(ToastKind::Error, "deux");
        let third = queue.push(ToastKind::Success, "trois");

        let ids: Vec<_> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second, third]);
        assert!(first < second);

        queue.dismiss(second);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "trois");

        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
    }
}
