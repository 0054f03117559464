//! ADR Catalog
//!
//! Immutable, versioned data tables behind the ADR analysis pipeline:
//!
//! - Canonical mandatory and optional sections
//! - Keyword lists for the scoring heuristics
//! - Enterprise-architecture concern categories
//! - Design pattern catalog (6 categories)
//! - Technical-debt templates (7 types)
//! - Maturity levels and pathways
//! - The 24-topic compliance checklist
//!
//! Tables are `static` slices: they are built at compile time, shared by every
//! analysis without locking, and can be dumped with [`snapshot`].

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod debt;
pub mod enterprise;
pub mod lexicon;
pub mod maturity;
pub mod ordinal;
pub mod patterns;
pub mod sections;
pub mod topics;

pub use debt::{DebtSpec, DebtType, DEBT_TYPES};
pub use enterprise::{EnterpriseCategory, ENTERPRISE_CATEGORIES};
pub use maturity::MaturityLevel;
pub use ordinal::{Effort, Priority, Severity};
pub use patterns::{MatchRule, PatternCategory, PatternSpec, PATTERNS};
pub use sections::{SectionSpec, MANDATORY_SECTIONS, OPTIONAL_SECTIONS};
pub use topics::{TopicSpec, COMPLIANCE_TOPICS};

use serde::Serialize;

/// Version of the data tables; bump when any table changes meaning
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable view of every table
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    /// [`CATALOG_VERSION`]
    pub version: &'static str,
    /// Mandatory sections
    pub mandatory_sections: &'static [SectionSpec],
    /// Optional sections
    pub optional_sections: &'static [SectionSpec],
    /// Enterprise categories
    pub enterprise_categories: &'static [EnterpriseCategory],
    /// Pattern catalog
    pub patterns: &'static [PatternSpec],
    /// Debt templates
    pub debt_types: &'static [DebtSpec],
    /// Maturity levels with pathways
    pub maturity_levels: Vec<MaturityLevelView>,
    /// Compliance checklist
    pub compliance_topics: &'static [TopicSpec],
}

/// Maturity level with its band and pathway
#[derive(Debug, Clone, Serialize)]
pub struct MaturityLevelView {
    /// Level
    pub level: MaturityLevel,
    /// Inclusive lower bound
    pub lower_bound: f64,
    /// Next steps
    pub pathway: &'static [&'static str],
}

/// Snapshot of the whole catalog
#[must_use]
pub fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        version: CATALOG_VERSION,
        mandatory_sections: MANDATORY_SECTIONS,
        optional_sections: OPTIONAL_SECTIONS,
        enterprise_categories: ENTERPRISE_CATEGORIES,
        patterns: PATTERNS,
        debt_types: DEBT_TYPES,
        maturity_levels: MaturityLevel::ALL
            .iter()
            .map(|&level| MaturityLevelView {
                level,
                lower_bound: level.lower_bound(),
                pathway: level.pathway(),
            })
            .collect(),
        compliance_topics: COMPLIANCE_TOPICS,
    }
}
