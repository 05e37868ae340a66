//! Fixed top-right stack of dismissible notifications.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders every live toast. Entries are keyed on id and their class follows
/// the toast, so fading drops `show` on the same element and the CSS
/// transition runs.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div
            id="pinboard-toast-container"
            class="toast-stack"
            style="position: fixed; top: 1rem; right: 1rem; z-index: 9999; max-width: 320px;"
        >
            <For
                each=move || toasts.with(|t| t.toasts.clone())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let message = toast.message;
                    view! {
                        <div class=move || toasts.with(|t| t.class_of(id)) role="alert">
                            {message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
