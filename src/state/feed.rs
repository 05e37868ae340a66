//! Pin feed state refreshed by the pins poller and the like/save buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poller replaces `pins` wholesale when the server list changes. Like and
//! save replies patch a single pin in place with the server-reported state.
//! The poller's snapshot predates that patch, so the next poll reports a
//! change and replaces the list again; cards are keyed on the full pin, so
//! only pins whose contents differ are rebuilt.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::{FeedPin, LikeResponse, PinId, SaveResponse};

pub const LIKED_GLYPH: &str = "♥";
pub const UNLIKED_GLYPH: &str = "♡";
pub const SAVED_GLYPH: &str = "★";
pub const UNSAVED_GLYPH: &str = "☆";

pub fn like_glyph(liked: bool) -> &'static str {
    if liked { LIKED_GLYPH } else { UNLIKED_GLYPH }
}

pub fn save_glyph(saved: bool) -> &'static str {
    if saved { SAVED_GLYPH } else { UNSAVED_GLYPH }
}

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub pins: Vec<FeedPin>,
    /// False until the first poll has rendered.
    pub loaded: bool,
}

impl FeedState {
    pub fn replace(&mut self, pins: Vec<FeedPin>) {
        self.pins = pins;
        self.loaded = true;
    }

    /// Apply a like-toggle reply. Returns `false` (state untouched) when the
    /// reply is not ok or the pin is no longer in the feed.
    pub fn apply_like(&mut self, pin_id: PinId, reply: &LikeResponse) -> bool {
        if !reply.ok {
            return false;
        }
        let Some(pin) = self.pins.iter_mut().find(|p| p.id == pin_id) else {
            return false;
        };
        pin.liked = reply.liked;
        pin.likes_count = reply.count;
        true
    }

    /// Apply a save-toggle reply. Same contract as [`FeedState::apply_like`].
    pub fn apply_save(&mut self, pin_id: PinId, reply: &SaveResponse) -> bool {
        if !reply.ok {
            return false;
        }
        let Some(pin) = self.pins.iter_mut().find(|p| p.id == pin_id) else {
            return false;
        };
        pin.saved = reply.saved;
        true
    }

    /// Pins the current user has saved, in feed order.
    pub fn saved_pins(&self) -> Vec<FeedPin> {
        self.pins.iter().filter(|p| p.saved).cloned().collect()
    }
}
