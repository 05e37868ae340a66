//! Interval polling bound to a component's lifetime.
//!
//! A poller fetches once immediately and then once per interval. Each tick
//! runs as its own task, so a slow response never delays the timer. The
//! owning component cancels the poller from `on_cleanup`; cancellation stops
//! the timer and any response still in flight is discarded on arrival.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and encode failures are logged and swallowed. The loop keeps its
//! cadence with no backoff and nothing is shown to the user.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation flag shared by a poll loop and the component that owns it.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PollHandle {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Start a poll loop.
///
/// `select` picks the part of the response used for change detection;
/// `apply` runs only when that part changed since the last render.
#[cfg(feature = "hydrate")]
pub fn spawn_poller<T, S, F, Fut, Sel, A>(
    label: &'static str,
    interval: std::time::Duration,
    fetch: F,
    select: Sel,
    apply: A,
) -> PollHandle
where
    T: 'static,
    S: serde::Serialize + ?Sized,
    F: Fn() -> Fut + 'static,
    Fut: std::future::Future<Output = Result<T, crate::error::ApiError>> + 'static,
    Sel: Fn(&T) -> &S + 'static,
    A: Fn(T) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::state::poll::PollState;

    let handle = PollHandle::new();
    let loop_handle = handle.clone();
    let state = Rc::new(RefCell::new(PollState::default()));
    let fetch = Rc::new(fetch);
    let select = Rc::new(select);
    let apply = Rc::new(apply);

    leptos::task::spawn_local(async move {
        while loop_handle.is_alive() {
            let ticket = state.borrow_mut().issue();
            let tick_handle = loop_handle.clone();
            let state = Rc::clone(&state);
            let fetch = Rc::clone(&fetch);
            let select = Rc::clone(&select);
            let apply = Rc::clone(&apply);
            leptos::task::spawn_local(async move {
                let value = match fetch().await {
                    Ok(value) => value,
                    Err(e) => {
                        leptos::logging::warn!("{label} poll error: {e}");
                        return;
                    }
                };
                if !tick_handle.is_alive() {
                    return;
                }
                let outcome = state.borrow_mut().observe(ticket, select(&value));
                match outcome {
                    Ok(crate::state::poll::PollOutcome::Changed) => {
                        let bytes = state.borrow().last_json().map_or(0, str::len);
                        log::debug!("{label} poll: snapshot #{ticket} changed ({bytes} bytes)");
                        apply(value);
                    }
                    Ok(crate::state::poll::PollOutcome::Unchanged) => {}
                    Ok(crate::state::poll::PollOutcome::Stale) => {
                        log::debug!("{label} poll: dropped stale response #{ticket}");
                    }
                    Err(e) => leptos::logging::warn!("{label} poll snapshot error: {e}"),
                }
            });
            gloo_timers::future::sleep(interval).await;
        }
        log::debug!("{label} poller stopped");
    });

    handle
}
