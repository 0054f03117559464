//! Canonical ADR sections
//!
//! Synonyms are matched against normalized section keys at word boundaries.
//! A trailing `*` makes the synonym a prefix (`consequence*` matches
//! "consequences").

use serde::Serialize;

/// Canonical section with its heading synonyms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    /// Canonical name, as reported
    pub name: &'static str,
    /// Heading synonyms (lowercase)
    pub synonyms: &'static [&'static str],
}

/// Name of the canonical title section
pub const TITLE: &str = "Title";

/// Sections every ADR must have, in reporting order
pub static MANDATORY_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        name: TITLE,
        synonyms: &["title"],
    },
    SectionSpec {
        name: "Status",
        synonyms: &["status"],
    },
    SectionSpec {
        name: "Context",
        synonyms: &["context", "background", "problem*", "motivation"],
    },
    SectionSpec {
        name: "Decision",
        synonyms: &["decision", "decision outcome", "resolution", "chosen option"],
    },
    SectionSpec {
        name: "Consequences",
        synonyms: &["consequence*", "implication*", "impact*"],
    },
];

/// Sections that add signal when present; absence is never reported
pub static OPTIONAL_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        name: "Alternatives",
        synonyms: &["alternative*", "option*"],
    },
    SectionSpec {
        name: "Assumptions",
        synonyms: &["assumption*"],
    },
    SectionSpec {
        name: "Constraints",
        synonyms: &["constraint*", "limitation*"],
    },
    SectionSpec {
        name: "Risks",
        synonyms: &["risk*"],
    },
    SectionSpec {
        name: "Stakeholders",
        synonyms: &["stakeholder*", "decider*", "decision makers", "owner*"],
    },
];

/// Points each mandatory section contributes to the structural score
pub const MANDATORY_SECTION_POINTS: f64 = 18.0;

/// Flat bonus when at least one optional section is present
pub const OPTIONAL_SECTION_BONUS: f64 = 10.0;

/// Completeness weight and target body length per mandatory section
///
/// The title's "body" is its heading, so one word populates it.
pub static COMPLETENESS_TARGETS: &[(&str, f64, usize)] = &[
    (TITLE, 0.10, 1),
    ("Status", 0.10, 1),
    ("Context", 0.30, 50),
    ("Decision", 0.30, 40),
    ("Consequences", 0.20, 40),
];

/// Look up a mandatory or optional section by canonical name
#[must_use]
pub fn section(name: &str) -> Option<&'static SectionSpec> {
    MANDATORY_SECTIONS
        .iter()
        .chain(OPTIONAL_SECTIONS)
        .find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_mandatory_sections() {
        let names: Vec<_> = MANDATORY_SECTIONS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Title", "Status", "Context", "Decision", "Consequences"]);
    }

    #[test]
    fn mandatory_points_leave_room_for_bonus_only_when_complete() {
        let full = MANDATORY_SECTION_POINTS * MANDATORY_SECTIONS.len() as f64;
        assert!((full + OPTIONAL_SECTION_BONUS - 100.0).abs() < f64::EPSILON);
        let one_missing = full - MANDATORY_SECTION_POINTS + OPTIONAL_SECTION_BONUS;
        assert!(one_missing < 100.0);
    }

    #[test]
    fn completeness_weights_sum_to_one() {
        let sum: f64 = COMPLETENESS_TARGETS.iter().map(|(_, w, _)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        for (name, _, _) in COMPLETENESS_TARGETS {
            assert!(section(name).is_some(), "{name} is not a catalog section");
        }
    }

    #[test]
    fn synonyms_are_lowercase() {
        for spec in MANDATORY_SECTIONS.iter().chain(OPTIONAL_SECTIONS) {
            for syn in spec.synonyms {
                assert_eq!(*syn, syn.to_lowercase());
            }
        }
    }
}
