//! Per-pin popup for sharing a pin with another user.
//!
//! SYSTEM CONTEXT
//! ==============
//! At most one popup is open at a time (`ShareState::open_pin`). Typing runs
//! a live user search; clicking a result sends the pin as a direct message
//! and reports the outcome as a toast.

use leptos::prelude::*;

use crate::components::user_search::spawn_lookup;
use crate::config::ClientConfig;
use crate::net::types::{PinId, UserResult};
use crate::state::search::SearchStep;
use crate::state::share::ShareState;
use crate::state::toast::ToastState;

#[component]
pub fn SharePopup(pin_id: PinId) -> impl IntoView {
    let share = expect_context::<RwSignal<ShareState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let mut step = SearchStep::Clear;
        share.update(|s| step = s.begin_search(pin_id, &raw));
        spawn_lookup(step, move |ticket, results| {
            share.update(|s| {
                s.apply_results(pin_id, ticket, results);
            });
        });
    };

    let send_to = Callback::new(move |user: UserResult| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::share::share_toast;
            use crate::state::toast::show_toast;

            let result = crate::net::api::send_pin(pin_id, user.id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("sharing pin {pin_id} with user {} failed: {e}", user.id);
            }
            let (message, kind) = share_toast(&user.username, &result);
            config.with_value(|cfg| show_toast(toasts, cfg, message, kind));
            if result.is_ok() {
                share.update(ShareState::close_all);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, config, toasts);
    });

    view! {
        <div
            id=format!("sharePopup-{pin_id}")
            class="share-popup"
            class:d-none=move || !share.with(|s| s.is_open(pin_id))
        >
            <input
                class="form-control form-control-sm user-search-input"
                type="text"
                placeholder="Search users..."
                autocomplete="off"
                data-pin=pin_id
                prop:value=move || share.with(|s| s.input(pin_id).to_owned())
                on:input=on_input
            />
            <div id=format!("searchResults-{pin_id}") class="search-results list-group">
                {move || {
                    share.with(|s| s.results(pin_id).to_vec())
                        .into_iter()
                        .map(|user| {
                            let username = user.username.clone();
                            view! {
                                <button
                                    type="button"
                                    class="list-group-item list-group-item-action user-result-row"
                                    data-user-id=user.id
                                    on:click=move |_| send_to.run(user.clone())
                                >
                                    {username}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
