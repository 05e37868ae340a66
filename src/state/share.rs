//! Share popup state: which pin's popup is open and each popup's search.
//!
//! DESIGN
//! ======
//! At most one popup is visible, so "close every other popup, then toggle
//! this one" reduces to a single `Option<PinId>`. Search boxes are kept per
//! pin so a hidden popup keeps its typed query, as a hidden DOM node would.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use std::collections::HashMap;

use super::search::{SearchStep, UserSearch};
use super::toast::ToastKind;
use crate::error::ApiError;
use crate::net::types::{PinId, UserResult};

pub const SHARE_REJECTED_DEFAULT: &str = "Could not share pin";
pub const SHARE_FAILED: &str = "Failed to share pin";

#[derive(Clone, Debug, Default)]
pub struct ShareState {
    pub open_pin: Option<PinId>,
    searches: HashMap<PinId, UserSearch>,
}

impl ShareState {
    /// Share-button click: close any other popup and flip this one.
    pub fn toggle(&mut self, pin_id: PinId) {
        self.open_pin = if self.open_pin == Some(pin_id) { None } else { Some(pin_id) };
    }

    pub fn close_all(&mut self) {
        self.open_pin = None;
    }

    /// Apply a click anywhere on the page. Returns `true` when it closed an
    /// open popup.
    pub fn document_click(&mut self, inside_popup: bool, on_share_btn: bool) -> bool {
        if self.open_pin.is_none() || !should_close_popups(inside_popup, on_share_btn) {
            return false;
        }
        self.close_all();
        true
    }

    pub fn is_open(&self, pin_id: PinId) -> bool {
        self.open_pin == Some(pin_id)
    }

    pub fn begin_search(&mut self, pin_id: PinId, raw: &str) -> SearchStep {
        self.searches.entry(pin_id).or_default().begin(raw)
    }

    pub fn apply_results(&mut self, pin_id: PinId, ticket: u64, results: Vec<UserResult>) -> bool {
        self.searches
            .get_mut(&pin_id)
            .is_some_and(|s| s.apply(ticket, results))
    }

    pub fn results(&self, pin_id: PinId) -> &[UserResult] {
        self.searches
            .get(&pin_id)
            .map(|s| s.results.as_slice())
            .unwrap_or_default()
    }

    pub fn input(&self, pin_id: PinId) -> &str {
        self.searches.get(&pin_id).map_or("", |s| s.input.as_str())
    }
}

/// Whether a document click should hide every popup: true unless the click
/// landed inside a popup or on a share button.
pub fn should_close_popups(inside_popup: bool, on_share_btn: bool) -> bool {
    !inside_popup && !on_share_btn
}

/// Toast text and style for the result of sharing with `username`.
pub fn share_toast(username: &str, result: &Result<(), ApiError>) -> (String, ToastKind) {
    match result {
        Ok(()) => (format!("Pin shared with {username}"), ToastKind::Success),
        Err(err @ ApiError::Rejected(_)) => (
            err.server_message().unwrap_or(SHARE_REJECTED_DEFAULT).to_owned(),
            ToastKind::Error,
        ),
        Err(_) => (SHARE_FAILED.to_owned(), ToastKind::Error),
    }
}
