use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("one", ToastKind::Success);
    let b = state.push("two", ToastKind::Error);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert!(state.toasts.iter().all(|t| t.visible));
}

#[test]
fn fade_hides_without_removing() {
    let mut state = ToastState::default();
    let id = state.push("saved", ToastKind::Success);
    state.fade(id);
    assert_eq!(state.toasts.len(), 1);
    assert!(!state.toasts[0].visible);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push("a", ToastKind::Success);
    let b = state.push("b", ToastKind::Success);
    state.dismiss(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn fade_and_dismiss_unknown_id_are_noops() {
    let mut state = ToastState::default();
    state.push("a", ToastKind::Success);
    state.fade(99);
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
    assert!(state.toasts[0].visible);
}

#[test]
fn class_name_reflects_kind_and_visibility() {
    let mut toast = Toast { id: 1, message: "x".to_owned(), kind: ToastKind::Success, visible: true };
    assert_eq!(toast.class_name(), "alert alert-success alert-dismissible fade show");
    toast.kind = ToastKind::Error;
    toast.visible = false;
    assert_eq!(toast.class_name(), "alert alert-danger alert-dismissible fade");
}

#[test]
fn class_of_tracks_fade_on_the_same_toast() {
    let mut state = ToastState::default();
    let id = state.push("Pin shared with ann", ToastKind::Success);
    assert_eq!(state.class_of(id), "alert alert-success alert-dismissible fade show");
    state.fade(id);
    assert_eq!(state.class_of(id), "alert alert-success alert-dismissible fade");
    state.dismiss(id);
    assert_eq!(state.class_of(id), "");
}
