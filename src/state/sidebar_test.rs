use super::*;

// =============================================================
// Section
// =============================================================

#[test]
fn section_default_is_home() {
    assert_eq!(Section::default(), Section::Home);
}

#[test]
fn section_ids_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_id(section.id()), Some(section));
    }
}

#[test]
fn section_from_unknown_id_is_none() {
    assert_eq!(Section::from_id("settings"), None);
    assert_eq!(Section::from_id(""), None);
    assert_eq!(Section::from_id("Home"), None);
}

// =============================================================
// SidebarState
// =============================================================

#[test]
fn sidebar_default_is_home_with_home_title() {
    let state = SidebarState::default();
    assert_eq!(state.active, Section::Home);
    assert_eq!(state.title, "Home");
}

#[test]
fn select_activates_exactly_one_section() {
    let mut state = SidebarState::default();
    assert!(state.select("messages", "Messages"));
    let active: Vec<_> = Section::ALL.into_iter().filter(|s| state.is_active(*s)).collect();
    assert_eq!(active, vec![Section::Messages]);
}

#[test]
fn select_uses_trimmed_label_as_title() {
    let mut state = SidebarState::default();
    state.select("upload", "\n   Upload   \n");
    assert_eq!(state.title, "Upload");
}

#[test]
fn select_unknown_target_is_noop() {
    let mut state = SidebarState::opened_at(Section::Saved);
    let before = state.clone();
    assert!(!state.select("nowhere", "Nowhere"));
    assert_eq!(state, before);
}

#[test]
fn opened_at_sets_title_from_section() {
    let state = SidebarState::opened_at(Section::Messages);
    assert!(state.is_active(Section::Messages));
    assert_eq!(state.title, "Messages");
}
