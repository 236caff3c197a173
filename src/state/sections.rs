//! Page section identity and the one-time reveal record.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// The five page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Intro,
    Skills,
    Work,
    Projects,
    Connect,
}

impl SectionId {
    /// All sections in document order. Both the anchor layout and the side
    /// navigation iterate this, so the two can never disagree.
    pub const ALL: [SectionId; 5] = [
        SectionId::Intro,
        SectionId::Skills,
        SectionId::Work,
        SectionId::Projects,
        SectionId::Connect,
    ];

    /// DOM id of the section's anchor element.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Intro => "intro",
            SectionId::Skills => "skills",
            SectionId::Work => "work",
            SectionId::Projects => "projects",
            SectionId::Connect => "connect",
        }
    }

    /// Human-readable name, used for navigation tooltips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Intro => "Intro",
            SectionId::Skills => "Skills",
            SectionId::Work => "Work",
            SectionId::Projects => "Projects",
            SectionId::Connect => "Connect",
        }
    }

    /// Parse a DOM id back into a section, e.g. from an observer callback.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Zero-based position in document order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SectionId::Intro => 0,
            SectionId::Skills => 1,
            SectionId::Work => 2,
            SectionId::Projects => 3,
            SectionId::Connect => 4,
        }
    }
}

/// Insert-only record of which sections have had their fade-in.
///
/// There is no removal API: once a section is recorded it stays recorded,
/// so later observer callbacks or resize re-evaluation can never undo a
/// reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealSet([bool; 5]);

impl RevealSet {
    /// Record `section` as revealed. Returns `true` on the first reveal,
    /// `false` if it was already recorded.
    pub fn record(&mut self, section: SectionId) -> bool {
        let slot = &mut self.0[section.index()];
        let first = !*slot;
        *slot = true;
        first
    }

    /// Whether `section` has been revealed.
    #[must_use]
    pub const fn contains(self, section: SectionId) -> bool {
        self.0[section.index()]
    }

    /// Number of revealed sections.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.iter().filter(|revealed| **revealed).count()
    }

    /// Whether no section has been revealed yet.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
