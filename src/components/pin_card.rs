//! Feed card for a single pin with like, save, and share actions.
//!
//! DESIGN
//! ======
//! A card renders one immutable `FeedPin`. The feed list is keyed on the whole
//! pin, so a like/save reply or a poll that changes this pin rebuilds the
//! card and handlers are attached exactly once per rendered card.

use leptos::prelude::*;

use crate::components::share_popup::SharePopup;
use crate::net::types::{FeedPin, PinId};
use crate::state::feed::{FeedState, like_glyph, save_glyph};
use crate::state::share::ShareState;

#[component]
pub fn PinCard(pin: FeedPin, #[prop(optional)] compact: bool) -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let share = expect_context::<RwSignal<ShareState>>();
    let FeedPin { id: pin_id, image_url, title, description, author, created_at, liked, likes_count, saved } = pin;
    let alt = title.clone();

    let on_like = move |_| toggle_like(feed, pin_id);
    let on_save = move |_| toggle_save(feed, pin_id);
    let on_share = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        share.update(|s| s.toggle(pin_id));
    };

    let meta = if created_at.is_empty() { author } else { format!("{author} · {created_at}") };

    view! {
        <div class="pin-card card" data-pin-id=pin_id>
            <img class="pin-card__image card-img-top" src=image_url alt=alt/>
            <div class="pin-card__body card-body">
                <h5 class="pin-card__title card-title">{title}</h5>
                {description.map(|d| view! { <p class="pin-card__description card-text">{d}</p> })}
                <small class="pin-card__meta text-muted">{meta}</small>
                <div class="pin-card__actions">
                    <button type="button" class="btn btn-sm like-btn" class:active=liked data-pin=pin_id on:click=on_like>
                        <span class="like-icon">{like_glyph(liked)}</span>
                        " "
                        <span class="like-count">{likes_count}</span>
                    </button>
                    <button type="button" class="btn btn-sm save-btn" class:active=saved data-pin=pin_id on:click=on_save>
                        <span class="save-icon">{save_glyph(saved)}</span>
                    </button>
                    <Show when=move || !compact>
                        <button type="button" class="btn btn-sm share-btn" data-pin=pin_id on:click=on_share>
                            "Share"
                        </button>
                    </Show>
                </div>
                <Show when=move || !compact>
                    <SharePopup pin_id=pin_id/>
                </Show>
            </div>
        </div>
    }
}

fn toggle_like(feed: RwSignal<FeedState>, pin_id: PinId) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::toggle_like(pin_id).await {
            Ok(reply) => {
                let mut applied = false;
                feed.update(|f| applied = f.apply_like(pin_id, &reply));
                if !applied {
                    log::debug!("like reply for pin {pin_id} not applied");
                }
            }
            Err(e) => leptos::logging::warn!("like toggle failed for pin {pin_id}: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (feed, pin_id);
}

fn toggle_save(feed: RwSignal<FeedState>, pin_id: PinId) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::toggle_save(pin_id).await {
            Ok(reply) => {
                let mut applied = false;
                feed.update(|f| applied = f.apply_save(pin_id, &reply));
                if !applied {
                    log::debug!("save reply for pin {pin_id} not applied");
                }
            }
            Err(e) => leptos::logging::warn!("save toggle failed for pin {pin_id}: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (feed, pin_id);
}
