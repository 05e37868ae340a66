use super::*;

// =============================================================
// Search + send
// =============================================================

#[test]
fn search_users_response_parses_results() {
    let raw = serde_json::json!({ "results": [{ "id": 7, "username": "ann" }] });
    let parsed: SearchUsersResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.results, vec![UserResult { id: 7, username: "ann".to_owned() }]);
}

#[test]
fn search_users_response_missing_results_is_empty() {
    let parsed: SearchUsersResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.results.is_empty());
}

#[test]
fn send_response_carries_optional_error() {
    let ok: SendResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
    assert!(ok.ok);
    assert_eq!(ok.error, None);

    let failed: SendResponse = serde_json::from_str(r#"{"ok":false,"error":"blocked"}"#).unwrap();
    assert!(!failed.ok);
    assert_eq!(failed.error.as_deref(), Some("blocked"));
}

// =============================================================
// Like + save
// =============================================================

#[test]
fn like_response_parses_state_and_count() {
    let parsed: LikeResponse = serde_json::from_str(r#"{"ok":true,"liked":true,"count":5}"#).unwrap();
    assert_eq!(parsed, LikeResponse { ok: true, liked: true, count: 5 });
}

#[test]
fn like_response_failure_defaults_other_fields() {
    let parsed: LikeResponse = serde_json::from_str(r#"{"ok":false}"#).unwrap();
    assert!(!parsed.ok);
    assert!(!parsed.liked);
    assert_eq!(parsed.count, 0);
}

#[test]
fn save_response_parses_flag() {
    let parsed: SaveResponse = serde_json::from_str(r#"{"ok":true,"saved":true}"#).unwrap();
    assert!(parsed.ok && parsed.saved);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn messages_response_parses_text_and_pin_messages() {
    let raw = serde_json::json!({
        "other_username": "ann",
        "messages": [
            { "from_me": true, "text": "hi" },
            { "from_me": false, "pin": { "image_url": "/static/uploads/a.png", "title": "Lake" } }
        ]
    });
    let parsed: MessagesResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.other_username, "ann");
    assert_eq!(parsed.messages.len(), 2);
    assert_eq!(parsed.messages[0].text.as_deref(), Some("hi"));
    assert!(parsed.messages[0].pin.is_none());
    let pin = parsed.messages[1].pin.as_ref().unwrap();
    assert_eq!(pin.title, "Lake");
    assert_eq!(pin.description, None);
}

#[test]
fn thread_message_null_text_is_none() {
    let parsed: ThreadMessage = serde_json::from_str(r#"{"from_me":false,"text":null}"#).unwrap();
    assert_eq!(parsed.text, None);
}

// =============================================================
// Pins
// =============================================================

#[test]
fn pins_response_parses_feed_pin() {
    let raw = serde_json::json!({
        "pins": [{
            "id": 3,
            "image_url": "/static/uploads/x.jpg",
            "title": "Bridge",
            "description": "at dusk",
            "author": "bob",
            "created_at": "2025-01-02 10:00",
            "liked": true,
            "likes_count": 4,
            "saved": false
        }]
    });
    let parsed: PinsResponse = serde_json::from_value(raw).unwrap();
    let pin = &parsed.pins[0];
    assert_eq!(pin.id, 3);
    assert_eq!(pin.description.as_deref(), Some("at dusk"));
    assert!(pin.liked);
    assert_eq!(pin.likes_count, 4);
    assert!(!pin.saved);
}

#[test]
fn feed_pin_serialization_is_stable_for_equal_values() {
    let raw = r#"{"pins":[{"id":1,"image_url":"a","title":"t","author":"x","created_at":"now"}]}"#;
    let a: PinsResponse = serde_json::from_str(raw).unwrap();
    let b: PinsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(serde_json::to_string(&a.pins).unwrap(), serde_json::to_string(&b.pins).unwrap());
}
