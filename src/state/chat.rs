//! Direct-message state for the messages section.
//!
//! SYSTEM CONTEXT
//! ==============
//! The open conversation is chosen by the `chat_with` query parameter and kept
//! current by the messages poller. The section's user search picks who to
//! talk to next by navigating to that user's chat link.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::search::UserSearch;
use crate::net::types::{MessagesResponse, ThreadMessage, UserId};

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// User on the other side of the open conversation.
    pub other_id: Option<UserId>,
    pub other_username: String,
    pub messages: Vec<ThreadMessage>,
    /// False until the first poll for `other_id` has rendered.
    pub loaded: bool,
    pub search: UserSearch,
}

impl ChatState {
    /// Switch to the conversation with `other_id`, dropping the previous thread.
    pub fn open(&mut self, other_id: UserId) {
        if self.other_id == Some(other_id) {
            return;
        }
        self.other_id = Some(other_id);
        self.other_username.clear();
        self.messages.clear();
        self.loaded = false;
    }

    pub fn replace(&mut self, reply: MessagesResponse) {
        self.messages = reply.messages;
        self.other_username = reply.other_username;
        self.loaded = true;
    }

    /// Sender label shown before a message.
    pub fn sender_label(&self, message: &ThreadMessage) -> String {
        if message.from_me { "You".to_owned() } else { self.other_username.clone() }
    }
}

/// Dashboard URL that opens the messages section on a conversation.
pub fn chat_link(user_id: UserId) -> String {
    format!("/dashboard?tab=messages&chat_with={user_id}")
}
