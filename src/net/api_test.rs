use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn search_users_endpoint_encodes_query() {
    assert_eq!(search_users_endpoint("ann"), "/api/search_users?q=ann");
    assert_eq!(search_users_endpoint("ann lee&co"), "/api/search_users?q=ann%20lee%26co");
}

#[test]
fn toggle_endpoints_include_pin_id() {
    assert_eq!(like_endpoint(42), "/pin/42/like");
    assert_eq!(save_endpoint(42), "/pin/42/save");
}

#[test]
fn messages_for_endpoint_includes_other_id() {
    assert_eq!(messages_for_endpoint(9), "/api/messages_for/9");
}

#[test]
fn static_endpoints() {
    assert_eq!(SEND_ENDPOINT, "/messages/send");
    assert_eq!(PINS_ENDPOINT, "/api/pins");
}

#[test]
fn requested_with_header_marks_programmatic_request() {
    assert_eq!(REQUESTED_WITH, ("X-Requested-With", "XMLHttpRequest"));
}

// =============================================================
// Share form
// =============================================================

#[test]
fn share_form_fields_send_empty_text() {
    let fields = share_form_fields(3, 7);
    assert_eq!(
        fields,
        [
            ("pin_id", "3".to_owned()),
            ("recipient_id", "7".to_owned()),
            ("text", String::new()),
        ]
    );
}

// =============================================================
// Reply checks
// =============================================================

#[test]
fn check_send_accepts_ok() {
    assert_eq!(check_send(SendResponse { ok: true, error: None }), Ok(()));
}

#[test]
fn check_send_keeps_server_error() {
    let result = check_send(SendResponse { ok: false, error: Some("blocked".to_owned()) });
    assert_eq!(result, Err(ApiError::Rejected(Some("blocked".to_owned()))));
}

#[test]
fn check_like_rejects_not_ok() {
    let body = LikeResponse { ok: false, liked: true, count: 9 };
    assert_eq!(check_like(body), Err(ApiError::Rejected(None)));
}

#[test]
fn check_like_passes_through_ok_body() {
    let body = LikeResponse { ok: true, liked: true, count: 5 };
    assert_eq!(check_like(body.clone()), Ok(body));
}

#[test]
fn check_save_rejects_not_ok() {
    assert_eq!(check_save(SaveResponse { ok: false, saved: true }), Err(ApiError::Rejected(None)));
}

// =============================================================
// Native stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn helpers_are_unavailable_without_browser() {
    assert_eq!(block_on(search_users("ann")), Err(ApiError::Unavailable));
    assert_eq!(block_on(send_pin(1, 2)), Err(ApiError::Unavailable));
    assert_eq!(block_on(toggle_like(1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(toggle_save(1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_messages_for(1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_pins()), Err(ApiError::Unavailable));
}
