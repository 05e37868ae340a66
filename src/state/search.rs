//! Live user search shared by the share popups and the messages tab.
//!
//! Every keystroke issues a lookup (no debounce). Each lookup takes a ticket;
//! only the reply to the newest ticket is applied, so a slow reply for an
//! older prefix cannot overwrite newer results. Clearing the box also bumps
//! the ticket, which drops any reply still in flight.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::UserResult;

/// What to do after the search input changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep {
    /// Query is blank: results were cleared, send nothing.
    Clear,
    /// Send a lookup for `query`, then hand the reply back with `ticket`.
    Lookup { query: String, ticket: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserSearch {
    pub input: String,
    pub results: Vec<UserResult>,
    issued: u64,
}

impl UserSearch {
    pub fn begin(&mut self, raw: &str) -> SearchStep {
        raw.clone_into(&mut self.input);
        self.issued += 1;
        let query = raw.trim();
        if query.is_empty() {
            self.results.clear();
            return SearchStep::Clear;
        }
        SearchStep::Lookup { query: query.to_owned(), ticket: self.issued }
    }

    /// Store `results` if `ticket` belongs to the newest lookup.
    pub fn apply(&mut self, ticket: u64, results: Vec<UserResult>) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.results = results;
        true
    }
}
