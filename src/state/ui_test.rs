use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults_to_dark_theme() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn ui_state_starts_with_no_active_section() {
    let state = UiState::default();
    assert_eq!(state.active_section, None);
}

#[test]
fn ui_state_starts_with_nothing_revealed() {
    let state = UiState::default();
    for section in SectionId::ALL {
        assert!(!state.is_revealed(section));
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_toggled_twice_is_identity() {
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn theme_attr_values_are_distinct() {
    assert_eq!(Theme::Dark.attr_value(), "dark");
    assert_eq!(Theme::Light.attr_value(), "light");
}

#[test]
fn toggle_theme_twice_restores_original_scheme() {
    let mut state = UiState::default();
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Light);
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Dark);
}

// =============================================================
// record_enter
// =============================================================

#[test]
fn record_enter_sets_active_and_reveals() {
    let mut state = UiState::default();
    state.record_enter(SectionId::Work);
    assert_eq!(state.active_section, Some(SectionId::Work));
    assert!(state.is_revealed(SectionId::Work));
}

#[test]
fn record_enter_last_write_wins_within_a_batch() {
    let mut state = UiState::default();
    state.record_enter(SectionId::Work);
    state.record_enter(SectionId::Projects);
    assert_eq!(state.active_section, Some(SectionId::Projects));
    assert!(state.is_revealed(SectionId::Work));
    assert!(state.is_revealed(SectionId::Projects));
}

#[test]
fn re_entering_a_section_keeps_it_revealed() {
    let mut state = UiState::default();
    state.record_enter(SectionId::Skills);
    state.record_enter(SectionId::Work);
    state.record_enter(SectionId::Skills);
    assert_eq!(state.active_section, Some(SectionId::Skills));
    assert!(state.is_revealed(SectionId::Skills));
    assert!(state.is_revealed(SectionId::Work));
}

#[test]
fn record_enter_never_clears_reveals() {
    let mut state = UiState::default();
    for section in SectionId::ALL {
        state.record_enter(section);
    }
    for section in SectionId::ALL {
        state.record_enter(SectionId::Intro);
        assert!(state.is_revealed(section));
    }
}
