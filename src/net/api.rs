//! REST API helpers for the pinboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! `ApiError::Unavailable`, since these endpoints only make sense in the
//! browser session that owns the login cookie.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. `ok: false` replies become
//! `ApiError::Rejected` so callers handle transport and application
//! failures through one path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LikeResponse, MessagesResponse, PinId, PinsResponse, SaveResponse, UserId, UserResult};
#[cfg(any(test, feature = "hydrate"))]
use super::types::SendResponse;
use crate::error::ApiError;

/// Header the backend uses to tell programmatic requests from form posts.
#[cfg(any(test, feature = "hydrate"))]
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

#[cfg(any(test, feature = "hydrate"))]
fn search_users_endpoint(query: &str) -> String {
    format!("/api/search_users?q={}", urlencoding::encode(query))
}

#[cfg(any(test, feature = "hydrate"))]
fn like_endpoint(pin_id: PinId) -> String {
    format!("/pin/{pin_id}/like")
}

#[cfg(any(test, feature = "hydrate"))]
fn save_endpoint(pin_id: PinId) -> String {
    format!("/pin/{pin_id}/save")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_for_endpoint(other_id: UserId) -> String {
    format!("/api/messages_for/{other_id}")
}

#[cfg(any(test, feature = "hydrate"))]
const SEND_ENDPOINT: &str = "/messages/send";

#[cfg(any(test, feature = "hydrate"))]
const PINS_ENDPOINT: &str = "/api/pins";

/// Form fields for sharing a pin: the pin, the recipient, and an empty note.
#[cfg(any(test, feature = "hydrate"))]
fn share_form_fields(pin_id: PinId, recipient_id: UserId) -> [(&'static str, String); 3] {
    [
        ("pin_id", pin_id.to_string()),
        ("recipient_id", recipient_id.to_string()),
        ("text", String::new()),
    ]
}

#[cfg(any(test, feature = "hydrate"))]
fn check_send(body: SendResponse) -> Result<(), ApiError> {
    if body.ok { Ok(()) } else { Err(ApiError::Rejected(body.error)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_like(body: LikeResponse) -> Result<LikeResponse, ApiError> {
    if body.ok { Ok(body) } else { Err(ApiError::Rejected(None)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_save(body: SaveResponse) -> Result<SaveResponse, ApiError> {
    if body.ok { Ok(body) } else { Err(ApiError::Rejected(None)) }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_toggle<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
        .send()
        .await
        .map_err(network_error)?;
    read_json(resp).await
}

/// Search users by name prefix via `GET /api/search_users?q=`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a result list.
pub async fn search_users(query: &str) -> Result<Vec<UserResult>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_users_endpoint(query);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(network_error)?;
        let body: super::types::SearchUsersResponse = read_json(resp).await?;
        Ok(body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Share a pin with another user via `POST /messages/send`.
///
/// Non-2xx replies are still read as JSON first, since the backend reports
/// share rejections (`ok: false, error`) with an error status.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the server's message when it answers
/// `ok: false`, or a transport/decode error.
pub async fn send_pin(pin_id: PinId, recipient_id: UserId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
        for (name, value) in share_form_fields(pin_id, recipient_id) {
            form.append_with_str(name, &value)
                .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
        }
        let resp = gloo_net::http::Request::post(SEND_ENDPOINT)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let status = resp.status();
        match resp.json::<SendResponse>().await {
            Ok(body) => check_send(body),
            Err(_) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pin_id, recipient_id);
        Err(ApiError::Unavailable)
    }
}

/// Toggle the current user's like on a pin via `POST /pin/{id}/like`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or `ok: false`.
pub async fn toggle_like(pin_id: PinId) -> Result<LikeResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_like(post_toggle(&like_endpoint(pin_id)).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pin_id;
        Err(ApiError::Unavailable)
    }
}

/// Toggle the current user's save on a pin via `POST /pin/{id}/save`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or `ok: false`.
pub async fn toggle_save(pin_id: PinId) -> Result<SaveResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        check_save(post_toggle(&save_endpoint(pin_id)).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pin_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the direct-message thread with `other_id`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not parse.
pub async fn fetch_messages_for(other_id: UserId) -> Result<MessagesResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_for_endpoint(other_id);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = other_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the pin feed from `GET /api/pins`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not parse.
pub async fn fetch_pins() -> Result<PinsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PINS_ENDPOINT)
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
