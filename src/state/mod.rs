//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by dashboard concern (`sidebar`, `feed`, `share`, `chat`,
//! etc.) so each component depends on a small focused model. `App` provides
//! each one as an `RwSignal` context.

pub mod chat;
pub mod feed;
pub mod poll;
pub mod search;
pub mod share;
pub mod sidebar;
pub mod toast;
pub mod upload;
