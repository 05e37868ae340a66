//! Messages-tab user search that opens a conversation.

use leptos::prelude::*;

use crate::net::types::UserResult;
use crate::state::chat::{ChatState, chat_link};
use crate::state::search::SearchStep;

/// Search box whose results link to `/dashboard?tab=messages&chat_with=<id>`.
/// The router handles the link click, so picking a user is an in-app
/// navigation that the dashboard picks up from the query string.
#[component]
pub fn UserSearch() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let mut step = SearchStep::Clear;
        chat.update(|c| step = c.search.begin(&raw));
        spawn_lookup(step, move |ticket, results| {
            chat.update(|c| {
                c.search.apply(ticket, results);
            });
        });
    };

    view! {
        <div class="messages-search mb-3">
            <input
                id="messagesSearch"
                class="form-control"
                type="text"
                placeholder="Search users to message..."
                autocomplete="off"
                prop:value=move || chat.with(|c| c.search.input.clone())
                on:input=on_input
            />
            <div id="messagesSearchResults" class="search-results list-group">
                {move || {
                    chat.with(|c| c.search.results.clone())
                        .into_iter()
                        .map(|user| {
                            view! {
                                <a
                                    class="list-group-item list-group-item-action user-result-row"
                                    href=chat_link(user.id)
                                    on:click=move |_| {
                                        chat.update(|c| {
                                            c.search.begin("");
                                        });
                                    }
                                >
                                    {user.username}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// Run the lookup a [`SearchStep`] asks for and hand the reply to `apply`.
///
/// Lookup failures are logged; the previous results stay on screen.
pub(crate) fn spawn_lookup<A>(step: SearchStep, apply: A)
where
    A: FnOnce(u64, Vec<UserResult>) + 'static,
{
    let SearchStep::Lookup { query, ticket } = step else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::search_users(&query).await {
            Ok(results) => apply(ticket, results),
            Err(e) => leptos::logging::warn!("user search for {query:?} failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (query, ticket, apply);
}
