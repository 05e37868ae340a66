//! Home feed grid and the saved-pins view, both fed by the pins poller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each view mounts only while its section is active and owns a pins poller
//! for that lifetime. Both render from the shared `FeedState`, so switching
//! sections shows the last known pins until the next poll lands.

use leptos::prelude::*;

use crate::components::pin_card::PinCard;
use crate::net::types::FeedPin;
use crate::state::feed::FeedState;

#[component]
pub fn PinFeed() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    poll_pins(feed);

    view! {
        <div id="pinFeed" class="pin-grid">
            <Show
                when=move || feed.with(|f| f.loaded)
                fallback=|| view! { <p class="text-muted">"Loading pins..."</p> }
            >
                <Show
                    when=move || feed.with(|f| !f.pins.is_empty())
                    fallback=|| view! { <p class="text-muted">"No pins yet."</p> }
                >
                    <For
                        each=move || feed.with(|f| f.pins.clone())
                        key=FeedPin::clone
                        children=|pin| view! { <PinCard pin=pin/> }
                    />
                </Show>
            </Show>
        </div>
    }
}

#[component]
pub fn SavedPins() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    poll_pins(feed);

    view! {
        <div id="savedPins" class="pin-grid">
            <Show
                when=move || feed.with(|f| f.pins.iter().any(|p| p.saved))
                fallback=|| view! { <p class="text-muted">"You have not saved any pins yet."</p> }
            >
                <For
                    each=move || feed.with(FeedState::saved_pins)
                    key=FeedPin::clone
                    children=|pin| view! { <PinCard pin=pin compact=true/> }
                />
            </Show>
        </div>
    }
}

/// Keep `feed` in sync with `GET /api/pins` while the calling view is mounted.
fn poll_pins(feed: RwSignal<FeedState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::config::ClientConfig;
        use crate::net::poller::spawn_poller;
        use crate::net::types::PinsResponse;

        fn pins_snapshot(reply: &PinsResponse) -> &[FeedPin] {
            &reply.pins
        }

        let config = expect_context::<ClientConfig>();
        let handle = spawn_poller(
            "pins",
            config.pins_poll,
            crate::net::api::fetch_pins,
            pins_snapshot,
            move |reply: PinsResponse| feed.update(|f| f.replace(reply.pins)),
        );
        on_cleanup(move || handle.cancel());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = feed;
    }
}
