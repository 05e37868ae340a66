//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard sections and read/write the shared state
//! models from Leptos context providers. Network calls go through `net::api`;
//! decisions about what changes live in `state`.

pub mod chat_thread;
pub mod pin_card;
pub mod pin_feed;
pub mod share_popup;
pub mod sidebar;
pub mod toast_host;
pub mod upload_dropzone;
pub mod user_search;
