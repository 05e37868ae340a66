//! Networking modules for the pinboard JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints, `poller` drives interval refreshes, and
//! `types` defines the wire schema.

pub mod api;
pub mod poller;
pub mod types;
