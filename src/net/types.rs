//! Wire DTOs for the pinboard JSON API.
//!
//! DESIGN
//! ======
//! These types mirror the backend responses field for field. Optional fields
//! default when absent so older server revisions still deserialize, and every
//! type serializes back in declaration order, which keeps poller snapshots
//! stable across identical payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Numeric identifier the backend uses for users and pins.
pub type PinId = i64;
pub type UserId = i64;

/// One row from `GET /api/search_users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResult {
    pub id: UserId,
    pub username: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUsersResponse {
    #[serde(default)]
    pub results: Vec<UserResult>,
}

/// Reply to `POST /messages/send`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `POST /pin/:id/like`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub count: i64,
}

/// Reply to `POST /pin/:id/save`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub saved: bool,
}

/// Pin preview attached to a direct message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedPin {
    pub image_url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A single direct message in a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMessage {
    /// True when the current user sent this message.
    #[serde(default)]
    pub from_me: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub pin: Option<SharedPin>,
}

/// Reply to `GET /api/messages_for/:other_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<ThreadMessage>,
    #[serde(default)]
    pub other_username: String,
}

/// A pin as rendered in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedPin {
    pub id: PinId,
    pub image_url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Author username.
    #[serde(default)]
    pub author: String,
    /// Server-formatted creation timestamp, displayed verbatim.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub saved: bool,
}

/// Reply to `GET /api/pins`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinsResponse {
    #[serde(default)]
    pub pins: Vec<FeedPin>,
}
