use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed: 502");
}

#[test]
fn rejected_error_formats_server_reason() {
    let err = ApiError::Rejected(Some("recipient not found".to_owned()));
    assert_eq!(err.to_string(), "rejected by server: recipient not found");
}

#[test]
fn rejected_error_without_reason_uses_placeholder() {
    assert_eq!(ApiError::Rejected(None).to_string(), "rejected by server: no reason given");
}

#[test]
fn server_message_only_for_non_blank_rejections() {
    assert_eq!(ApiError::Rejected(Some("nope".to_owned())).server_message(), Some("nope"));
    assert_eq!(ApiError::Rejected(Some("   ".to_owned())).server_message(), None);
    assert_eq!(ApiError::Rejected(None).server_message(), None);
    assert_eq!(ApiError::Status(400).server_message(), None);
}

#[test]
fn serde_json_error_maps_to_encode() {
    let err = serde_json::from_str::<u32>("not json").unwrap_err();
    assert!(matches!(ApiError::from(err), ApiError::Encode(_)));
}
