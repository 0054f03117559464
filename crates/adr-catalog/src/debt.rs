//! Technical-debt types and their fixed remediation templates

use crate::ordinal::{Effort, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Debt taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtType {
    /// Decision not traceable to implementation
    Code,
    /// Structural shortcuts in the architecture itself
    Architectural,
    /// Unjustified design choices
    Design,
    /// Incomplete record
    Documentation,
    /// No validation strategy
    Test,
    /// No operational plan
    Infrastructure,
    /// No ownership or attribution
    Knowledge,
}

impl fmt::Display for DebtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Template for one debt type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebtSpec {
    /// Debt type
    pub debt_type: DebtType,
    /// Severity before score-based adjustment
    pub default_severity: Severity,
    /// What the debt is
    pub description: &'static str,
    /// Consequence of carrying it
    pub impact: &'static str,
    /// How to pay it down
    pub remediation_strategy: &'static str,
    /// Effort estimate
    pub estimated_effort: Effort,
}

/// One template per debt type, in detection order
pub static DEBT_TYPES: &[DebtSpec] = &[
    DebtSpec {
        debt_type: DebtType::Code,
        default_severity: Severity::Medium,
        description: "Decision lacks linkage to implementation and related records",
        impact: "Hard to trace the decision to code and keep them consistent",
        remediation_strategy: "Reference repositories, tickets and related ADRs from the record",
        estimated_effort: Effort::Small,
    },
    DebtSpec {
        debt_type: DebtType::Architectural,
        default_severity: Severity::High,
        description: "Record admits shortcuts or lacks a proper decision structure",
        impact: "Makes the architecture difficult to govern and evolve",
        remediation_strategy: "Restructure into the standard ADR format and plan the removal of interim solutions",
        estimated_effort: Effort::Large,
    },
    DebtSpec {
        debt_type: DebtType::Design,
        default_severity: Severity::High,
        description: "Decision rationale is not clearly documented",
        impact: "Future maintainers may not understand why the design was chosen",
        remediation_strategy: "Add explicit rationale, trade-offs and the alternatives that were rejected",
        estimated_effort: Effort::Medium,
    },
    DebtSpec {
        debt_type: DebtType::Documentation,
        default_severity: Severity::High,
        description: "Mandatory sections are missing or too thin",
        impact: "Increases onboarding time and decision ambiguity",
        remediation_strategy: "Complete each mandatory section with concrete detail and examples",
        estimated_effort: Effort::Medium,
    },
    DebtSpec {
        debt_type: DebtType::Test,
        default_severity: Severity::Medium,
        description: "No testing or validation strategy is described",
        impact: "The decision cannot be verified once implemented",
        remediation_strategy: "Describe how the decision will be tested and what acceptance looks like",
        estimated_effort: Effort::Medium,
    },
    DebtSpec {
        debt_type: DebtType::Infrastructure,
        default_severity: Severity::Low,
        description: "Deployment and operational concerns are not covered",
        impact: "Operational surprises during rollout",
        remediation_strategy: "Document target environments, deployment approach and operational ownership",
        estimated_effort: Effort::Medium,
    },
    DebtSpec {
        debt_type: DebtType::Knowledge,
        default_severity: Severity::Medium,
        description: "Decision is not attributed to owners or stakeholders",
        impact: "Context is lost when the original authors move on",
        remediation_strategy: "Record deciders, owners and consulted stakeholders",
        estimated_effort: Effort::Small,
    },
];

/// Template for a debt type
#[must_use]
pub fn spec(debt_type: DebtType) -> &'static DebtSpec {
    // DEBT_TYPES covers every variant; the test below pins that.
    DEBT_TYPES
        .iter()
        .find(|d| d.debt_type == debt_type)
        .unwrap_or(&DEBT_TYPES[0])
}
