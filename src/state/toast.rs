//! Toast notifications shown in the top-right corner.
//!
//! Toasts live for a configured time, lose their `show` class to fade out,
//! and are removed after the fade. The close button removes one at once.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// False once the fade-out has started.
    pub visible: bool,
}

impl Toast {
    pub fn class_name(&self) -> String {
        let variant = match self.kind {
            ToastKind::Success => "success",
            ToastKind::Error => "danger",
        };
        let show = if self.visible { " show" } else { "" };
        format!("alert alert-{variant} alert-dismissible fade{show}")
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id for later fade/dismiss.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), kind, visible: true });
        id
    }

    pub fn fade(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.visible = false;
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Current class list of toast `id`; empty once it has been dismissed.
    pub fn class_of(&self, id: u64) -> String {
        self.toasts.iter().find(|t| t.id == id).map(Toast::class_name).unwrap_or_default()
    }
}

/// Show a toast and schedule its fade and removal.
#[cfg(feature = "hydrate")]
pub fn show_toast(
    toasts: leptos::prelude::RwSignal<ToastState>,
    config: &crate::config::ClientConfig,
    message: impl Into<String>,
    kind: ToastKind,
) {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::Update;

    let mut id = 0;
    toasts.update(|t| id = t.push(message, kind));

    let fade_ms = u32::try_from(config.toast_fade.as_millis()).unwrap_or(u32::MAX);
    let ttl_ms = u32::try_from(config.toast_ttl.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(ttl_ms, move || {
        toasts.update(|t| t.fade(id));
        Timeout::new(fade_ms, move || toasts.update(|t| t.dismiss(id))).forget();
    })
    .forget();
}
