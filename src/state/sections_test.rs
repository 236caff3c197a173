use super::*;

// =============================================================
// SectionId
// =============================================================

#[test]
fn all_lists_sections_in_document_order() {
    assert_eq!(
        SectionId::ALL,
        [
            SectionId::Intro,
            SectionId::Skills,
            SectionId::Work,
            SectionId::Projects,
            SectionId::Connect,
        ]
    );
}

#[test]
fn anchors_are_distinct() {
    for (i, a) in SectionId::ALL.iter().enumerate() {
        for (j, b) in SectionId::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }
}

#[test]
fn from_anchor_round_trips_every_section() {
    for section in SectionId::ALL {
        assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
    }
}

#[test]
fn from_anchor_rejects_unknown_ids() {
    assert_eq!(SectionId::from_anchor("footer"), None);
    assert_eq!(SectionId::from_anchor(""), None);
    assert_eq!(SectionId::from_anchor("Intro"), None);
}

#[test]
fn index_matches_position_in_all() {
    for (i, section) in SectionId::ALL.iter().enumerate() {
        assert_eq!(section.index(), i);
    }
}

#[test]
fn labels_are_non_empty() {
    for section in SectionId::ALL {
        assert!(!section.label().is_empty());
    }
}

// =============================================================
// RevealSet
// =============================================================

#[test]
fn reveal_set_starts_empty() {
    let set = RevealSet::default();
    assert!(set.is_empty());
    for section in SectionId::ALL {
        assert!(!set.contains(section));
    }
}

#[test]
fn record_returns_true_only_on_first_reveal() {
    let mut set = RevealSet::default();
    assert!(set.record(SectionId::Work));
    assert!(!set.record(SectionId::Work));
    assert!(!set.record(SectionId::Work));
    assert!(set.contains(SectionId::Work));
}

#[test]
fn recording_one_section_leaves_others_hidden() {
    let mut set = RevealSet::default();
    set.record(SectionId::Skills);
    assert!(set.contains(SectionId::Skills));
    assert!(!set.contains(SectionId::Intro));
    assert!(!set.contains(SectionId::Connect));
    assert_eq!(set.len(), 1);
}

#[test]
fn len_counts_distinct_reveals() {
    let mut set = RevealSet::default();
    set.record(SectionId::Intro);
    set.record(SectionId::Work);
    set.record(SectionId::Work);
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
}

#[test]
fn all_sections_can_be_revealed() {
    let mut set = RevealSet::default();
    for section in SectionId::ALL {
        assert!(set.record(section));
    }
    assert_eq!(set.len(), SectionId::ALL.len());
}
