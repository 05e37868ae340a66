use super::*;

fn file(name: &str, size: u64) -> FileMeta {
    FileMeta { name: name.to_owned(), size }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn extension_is_lowercased() {
    assert_eq!(file("Cat.JPG", 1).extension().as_deref(), Some("jpg"));
    assert_eq!(file("archive.tar.gz", 1).extension().as_deref(), Some("gz"));
    assert_eq!(file("noext", 1).extension(), None);
}

#[test]
fn bare_dot_name_has_empty_extension() {
    assert_eq!(file(".", 1).extension().as_deref(), Some(""));
    assert_eq!(file(".png", 1).extension().as_deref(), Some("png"));
}

#[test]
fn bare_dot_name_is_an_unsupported_type() {
    let err = validate_upload(&file(".", 1), &ClientConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Only JPG, JPEG, PNG, GIF allowed.");
}

#[test]
fn validate_accepts_allowed_image() {
    assert_eq!(validate_upload(&file("pin.png", 1024), &ClientConfig::default()), Ok(()));
}

#[test]
fn validate_rejects_missing_extension() {
    assert_eq!(
        validate_upload(&file("pin", 1024), &ClientConfig::default()),
        Err(UploadError::MissingExtension)
    );
}

#[test]
fn validate_rejects_unsupported_type_with_listing() {
    let err = validate_upload(&file("pin.bmp", 1024), &ClientConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Only JPG, JPEG, PNG, GIF allowed.");
}

#[test]
fn validate_rejects_oversized_file() {
    let cfg = ClientConfig::default();
    let err = validate_upload(&file("pin.gif", cfg.max_upload_bytes + 1), &cfg).unwrap_err();
    assert_eq!(err, UploadError::TooLarge(cfg.max_upload_bytes));
    assert_eq!(err.to_string(), "Image is larger than 5 MB.");
}

#[test]
fn validate_accepts_file_at_exact_limit() {
    let cfg = ClientConfig::default();
    assert_eq!(validate_upload(&file("pin.gif", cfg.max_upload_bytes), &cfg), Ok(()));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn empty_file_list_is_noop() {
    assert_eq!(select_files(&[], &ClientConfig::default()), Selection::Empty);
}

#[test]
fn only_first_file_is_used() {
    let files = [file("first.png", 10), file("second.jpg", 10)];
    assert_eq!(select_files(&files, &ClientConfig::default()), Selection::Accepted(file("first.png", 10)));
}

#[test]
fn invalid_first_file_is_rejected_even_if_later_ones_are_valid() {
    let files = [file("notes.txt", 10), file("second.jpg", 10)];
    assert!(matches!(
        select_files(&files, &ClientConfig::default()),
        Selection::Rejected(UploadError::UnsupportedType(_))
    ));
}

// =============================================================
// UploadState
// =============================================================

#[test]
fn default_state_shows_placeholder() {
    let state = UploadState::default();
    assert!(state.shows_placeholder());
    assert!(!state.dragover);
}

#[test]
fn show_preview_hides_placeholder_and_returns_previous_url() {
    let mut state = UploadState::default();
    assert_eq!(state.show_preview(&file("a.png", 1), "blob:a".to_owned()), None);
    assert!(!state.shows_placeholder());
    assert_eq!(state.file_name.as_deref(), Some("a.png"));

    let previous = state.show_preview(&file("b.png", 1), "blob:b".to_owned());
    assert_eq!(previous.as_deref(), Some("blob:a"));
    assert_eq!(state.preview_url.as_deref(), Some("blob:b"));
}

#[test]
fn reject_keeps_existing_preview() {
    let mut state = UploadState::default();
    state.show_preview(&file("a.png", 1), "blob:a".to_owned());
    state.reject(&UploadError::MissingExtension);
    assert_eq!(state.preview_url.as_deref(), Some("blob:a"));
    assert_eq!(state.error.as_deref(), Some("Invalid image file."));
}

#[test]
fn show_preview_clears_previous_error() {
    let mut state = UploadState::default();
    state.reject(&UploadError::MissingExtension);
    state.show_preview(&file("a.png", 1), "blob:a".to_owned());
    assert_eq!(state.error, None);
}

#[test]
fn reset_returns_preview_url_and_clears_state() {
    let mut state = UploadState::default();
    state.show_preview(&file("a.png", 1), "blob:a".to_owned());
    state.reject(&UploadError::MissingExtension);
    assert_eq!(state.reset().as_deref(), Some("blob:a"));
    assert_eq!(state, UploadState::default());
    assert_eq!(state.reset(), None);
}

#[test]
fn dragover_toggles() {
    let mut state = UploadState::default();
    state.set_dragover(true);
    assert!(state.dragover);
    state.set_dragover(false);
    assert!(!state.dragover);
}

// =============================================================
// File input sync
// =============================================================

#[test]
fn accepted_file_replaces_input_files() {
    let cfg = ClientConfig::default();
    let mut state = UploadState::default();
    let selection = select_files(&[file("a.png", 1)], &cfg);
    if let Selection::Accepted(f) = &selection {
        state.show_preview(f, "blob:a".to_owned());
    }
    assert_eq!(state.input_sync(&selection), InputSync::UseOffered);
}

#[test]
fn rejected_file_after_accepted_restores_previewed_file() {
    let cfg = ClientConfig::default();
    let mut state = UploadState::default();
    state.show_preview(&file("a.png", 1), "blob:a".to_owned());

    let selection = select_files(&[file("b.bmp", 1)], &cfg);
    let Selection::Rejected(err) = &selection else {
        panic!("bmp should be rejected");
    };
    state.reject(err);

    assert_eq!(state.preview_url.as_deref(), Some("blob:a"));
    assert_eq!(state.file_name.as_deref(), Some("a.png"));
    assert_eq!(state.input_sync(&selection), InputSync::RestorePreviewed);
}

#[test]
fn rejected_file_without_preview_clears_input() {
    let cfg = ClientConfig::default();
    let mut state = UploadState::default();
    let selection = select_files(&[file("notes.txt", 1)], &cfg);
    if let Selection::Rejected(err) = &selection {
        state.reject(err);
    }
    assert_eq!(state.input_sync(&selection), InputSync::Clear);
}

#[test]
fn empty_offer_leaves_input_alone() {
    let mut state = UploadState::default();
    state.show_preview(&file("a.png", 1), "blob:a".to_owned());
    assert_eq!(state.input_sync(&Selection::Empty), InputSync::Unchanged);
}
