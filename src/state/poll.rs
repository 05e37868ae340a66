//! Change detection for the polling loops.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each poller owns one `PollState`. A response is rendered only when its
//! serialized snapshot differs byte-for-byte from the last one rendered.
//! Comparison is order-sensitive: a reordered payload counts as a change.
//!
//! Ticks are spawned independently, so responses can resolve out of order.
//! Every request takes a ticket from `issue`; a response whose ticket is not
//! newer than the last one observed is reported as `Stale` and dropped.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use serde::Serialize;

use crate::error::ApiError;

/// What a poller should do with a freshly fetched response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// Snapshot differs from the last render; replace the container.
    Changed,
    /// Same snapshot as last time; leave the container untouched.
    Unchanged,
    /// A newer response was already observed; drop this one.
    Stale,
}

/// Per-poller change-detection state.
#[derive(Clone, Debug, Default)]
pub struct PollState {
    last_json: Option<String>,
    issued: u64,
    observed: u64,
}

impl PollState {
    /// Reserve a ticket for a request about to be sent.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Compare `value` against the last rendered snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `value` cannot be serialized; the stored
    /// snapshot is left as it was.
    pub fn observe<T: Serialize + ?Sized>(&mut self, ticket: u64, value: &T) -> Result<PollOutcome, ApiError> {
        if ticket <= self.observed {
            return Ok(PollOutcome::Stale);
        }
        let json = serde_json::to_string(value)?;
        self.observed = ticket;
        if self.last_json.as_deref() == Some(json.as_str()) {
            return Ok(PollOutcome::Unchanged);
        }
        self.last_json = Some(json);
        Ok(PollOutcome::Changed)
    }

    /// Last rendered snapshot, if any response has been rendered yet.
    pub fn last_json(&self) -> Option<&str> {
        self.last_json.as_deref()
    }
}
