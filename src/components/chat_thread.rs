//! Direct-message thread for the conversation picked by `chat_with`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A messages poller runs for the open conversation and restarts when the
//! user switches to another one. Every changed snapshot re-renders the whole
//! thread and scrolls it to the newest message.

use leptos::prelude::*;

use crate::net::types::{SharedPin, ThreadMessage};
use crate::state::chat::ChatState;

#[component]
pub fn ChatThread() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::config::ClientConfig;
        use crate::net::poller::{PollHandle, spawn_poller};
        use crate::net::types::MessagesResponse;

        fn messages_snapshot(reply: &MessagesResponse) -> &[ThreadMessage] {
            &reply.messages
        }

        let interval = expect_context::<ClientConfig>().messages_poll;
        let other = Memo::new(move |_| chat.with(|c| c.other_id));
        let running = StoredValue::new(None::<PollHandle>);

        Effect::new(move || {
            let next = other.get().map(|other_id| {
                spawn_poller(
                    "messages",
                    interval,
                    move || crate::net::api::fetch_messages_for(other_id),
                    messages_snapshot,
                    move |reply: MessagesResponse| {
                        if chat.with_untracked(|c| c.other_id) == Some(other_id) {
                            chat.update(|c| c.replace(reply));
                        }
                    },
                )
            });
            running.update_value(|slot| {
                if let Some(previous) = std::mem::replace(slot, next) {
                    previous.cancel();
                }
            });
        });
        on_cleanup(move || {
            running.update_value(|slot| {
                if let Some(handle) = slot.take() {
                    handle.cancel();
                }
            });
        });
    }

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let chat_user_id = move || chat.with(|c| c.other_id.map(|id| id.to_string()).unwrap_or_default());

    view! {
        <div class="chat-thread">
            <Show when=move || chat.with(|c| !c.other_username.is_empty())>
                <h5 class="chat-thread__title">{move || chat.with(|c| format!("Chat with {}", c.other_username))}</h5>
            </Show>
            <div id="chatMessages" class="chat-thread__messages" data-chat-user-id=chat_user_id node_ref=messages_ref>
                {move || {
                    chat.with(|c| {
                        if c.other_id.is_none() {
                            return view! {
                                <p class="text-muted">"Search for a user to start a conversation."</p>
                            }
                                .into_any();
                        }
                        if c.loaded && c.messages.is_empty() {
                            return view! { <p class="text-muted">"No messages yet."</p> }.into_any();
                        }
                        c.messages
                            .iter()
                            .map(|message| message_row(c.sender_label(message), message.clone()))
                            .collect::<Vec<_>>()
                            .into_any()
                    })
                }}
            </div>
        </div>
    }
}

fn message_row(sender: String, message: ThreadMessage) -> impl IntoView {
    view! {
        <div class="chat-message mb-2">
            <strong class="chat-message__sender">{sender}":"</strong>
            " "
            {message.text.map(|text| view! { <span class="chat-message__text">{text}</span> })}
            {message.pin.map(shared_pin_block)}
        </div>
    }
}

fn shared_pin_block(pin: SharedPin) -> impl IntoView {
    let SharedPin { image_url, title, description } = pin;
    let alt = title.clone();
    view! {
        <div class="shared-pin mt-1 p-2 border rounded small">
            <div class="fw-semibold mb-1">"Shared pin:"</div>
            <div class="d-flex align-items-center gap-2">
                <img class="shared-pin__thumb" src=image_url alt=alt/>
                <div class="shared-pin__body">
                    <div class="fw-semibold text-truncate">{title}</div>
                    {description.map(|d| view! { <small class="text-muted d-block text-truncate">{d}</small> })}
                </div>
            </div>
        </div>
    }
}
