//! Maturity levels and their improvement pathways

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-step maturity scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    /// [0, 20)
    Initial,
    /// [20, 40)
    Developing,
    /// [40, 60)
    Defined,
    /// [60, 80)
    Managed,
    /// [80, 100]
    Optimizing,
}

impl MaturityLevel {
    /// All levels, lowest first
    pub const ALL: [Self; 5] = [
        Self::Initial,
        Self::Developing,
        Self::Defined,
        Self::Managed,
        Self::Optimizing,
    ];

    /// Level for a score in [0, 100]; out-of-range scores clamp
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 20.0 => Self::Initial,
            s if s < 40.0 => Self::Developing,
            s if s < 60.0 => Self::Defined,
            s if s < 80.0 => Self::Managed,
            _ => Self::Optimizing,
        }
    }

    /// Inclusive lower bound of the level's score band
    #[must_use]
    pub fn lower_bound(self) -> f64 {
        match self {
            Self::Initial => 0.0,
            Self::Developing => 20.0,
            Self::Defined => 40.0,
            Self::Managed => 60.0,
            Self::Optimizing => 80.0,
        }
    }

    /// Ordered next steps toward the following level
    #[must_use]
    pub fn pathway(self) -> &'static [&'static str] {
        match self {
            Self::Initial => &[
                "Adopt a standard ADR template with Title, Status, Context, Decision and Consequences sections",
                "Describe the problem context before stating the decision",
                "State the decision in one clear, active sentence",
            ],
            Self::Developing => &[
                "Explain why the decision was made using explicit rationale",
                "List positive and negative consequences of the decision",
                "Record the decision status and keep it current",
            ],
            Self::Defined => &[
                "Document the alternatives considered and why they were rejected",
                "Add a risk section with mitigations for each identified risk",
                "Link the record to related ADRs, tickets and implementation",
            ],
            Self::Managed => &[
                "Quantify trade-offs with measurable criteria",
                "Define success metrics and a review date for the decision",
                "Route the record through a documented review and approval process",
            ],
            Self::Optimizing => &[
                "Revisit the decision when its success metrics drift",
                "Feed lessons learned back into the ADR template",
                "Share the record as a reference example for other teams",
            ],
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(MaturityLevel::from_score(0.0), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::from_score(19.9), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::from_score(20.0), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::from_score(59.9), MaturityLevel::Defined);
        assert_eq!(MaturityLevel::from_score(60.0), MaturityLevel::Managed);
        assert_eq!(MaturityLevel::from_score(80.0), MaturityLevel::Optimizing);
        assert_eq!(MaturityLevel::from_score(100.0), MaturityLevel::Optimizing);
    }

    #[test]
    fn lower_bounds_round_trip() {
        for level in MaturityLevel::ALL {
            assert_eq!(MaturityLevel::from_score(level.lower_bound()), level);
            assert!(!level.pathway().is_empty());
        }
    }
}
