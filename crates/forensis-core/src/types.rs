//! Section identifiers for the content panels

use serde::{Deserialize, Serialize};

/// One navigable content panel of the application.
///
/// The set is closed: every accepted navigation target is a member of this
/// enum, and anything else is rejected before it can reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Landing panel with the molecule background
    #[default]
    Hero,

    /// Analytical methodology overview (chromatography, spectroscopy)
    Methodology,

    /// Ethanol analysis panel
    Alcohol,

    /// Cocaine analysis panel
    Cocaine,

    /// Blood evidence panel (presumptive tests)
    Blood,

    /// Drug screening panel (colorimetric tests)
    Drugs,

    /// Supplementary substance table
    AdditionalSubstances,
}

impl Section {
    /// Every section in canonical navigation order.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Methodology,
        Section::Alcohol,
        Section::Cocaine,
        Section::Blood,
        Section::Drugs,
        Section::AdditionalSubstances,
    ];

    /// The stable identifier slug used in location fragments and panel ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Methodology => "methodology",
            Section::Alcohol => "alcohol",
            Section::Cocaine => "cocaine",
            Section::Blood => "blood",
            Section::Drugs => "drugs",
            Section::AdditionalSubstances => "additional-substances",
        }
    }

    /// Parse a slug back into a section. Returns `None` for anything outside
    /// the fixed set.
    pub fn parse(slug: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.as_str() == slug)
    }

    /// Human-readable title shown in the navigation bar and panel header.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Methodology => "Methodology",
            Section::Alcohol => "Alcohol",
            Section::Cocaine => "Cocaine",
            Section::Blood => "Blood",
            Section::Drugs => "Drugs",
            Section::AdditionalSubstances => "More Substances",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section at the given position, if any.
    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// Next section in navigation order, wrapping at the end.
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section in navigation order, wrapping at the start.
    pub fn prev(&self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }

    /// Whether this is the default landing section.
    pub fn is_default(&self) -> bool {
        *self == Section::Hero
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slugs_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_slugs() {
        assert_eq!(Section::parse("nonexistent"), None);
        assert_eq!(Section::parse(""), None);
        assert_eq!(Section::parse("Hero"), None); // case-sensitive
        assert_eq!(Section::parse("additional_substances"), None);
    }

    #[test]
    fn test_default_is_hero() {
        assert_eq!(Section::default(), Section::Hero);
        assert!(Section::Hero.is_default());
        assert!(!Section::Alcohol.is_default());
    }

    #[test]
    fn test_next_prev_cycle() {
        assert_eq!(Section::Hero.next(), Section::Methodology);
        assert_eq!(Section::AdditionalSubstances.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::AdditionalSubstances);
        assert_eq!(Section::Methodology.prev(), Section::Hero);
    }

    #[test]
    fn test_index_round_trip() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(section));
        }
        assert_eq!(Section::from_index(7), None);
    }

    #[test]
    fn test_serde_uses_kebab_case_slug() {
        let json = serde_json::to_string(&Section::AdditionalSubstances).unwrap();
        assert_eq!(json, "\"additional-substances\"");
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Section::AdditionalSubstances);
    }
}
