//! The common phase contract
//!
//! A phase is a pure function of the normalized [`Document`] and the outputs
//! of earlier phases. Phases never fail; edge cases resolve to 0, an empty
//! list or a Missing status. Inputs are borrowed, so a phase can read earlier
//! outputs but never mutate them.

use crate::report::{
    AnalysisReport, ComplianceResult, DebtItem, EnterpriseGuidance, LlmDetection,
    MaturityAssessment, PatternMatch, QualityAssessment, StructuralAnalysis, Suggestion,
};
use adr_document::Document;
use serde::Serialize;
use std::fmt;

/// Phase identity, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PhaseId {
    /// Phase 1
    Structural,
    /// Phase 2
    Quality,
    /// Phase 3
    LlmDetection,
    /// Phase 4
    Improvements,
    /// Phase 5
    Enterprise,
    /// Phase 6
    Patterns,
    /// Phase 7
    TechnicalDebt,
    /// Phase 8
    Maturity,
    /// Phase 9
    Compliance,
}

impl PhaseId {
    /// All phases in execution order
    pub const ALL: [Self; 9] = [
        Self::Structural,
        Self::Quality,
        Self::LlmDetection,
        Self::Improvements,
        Self::Enterprise,
        Self::Patterns,
        Self::TechnicalDebt,
        Self::Maturity,
        Self::Compliance,
    ];

    /// 1-based phase number
    #[inline]
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Human-readable name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Structural => "Structural Analysis",
            Self::Quality => "Quality Assessment",
            Self::LlmDetection => "AI-Authorship Detection",
            Self::Improvements => "Improvement Suggestions",
            Self::Enterprise => "Enterprise Architecture Guidance",
            Self::Patterns => "Design Patterns",
            Self::TechnicalDebt => "Technical Debt",
            Self::Maturity => "Architecture Maturity",
            Self::Compliance => "Standards Compliance",
        }
    }

    /// Report field holding the phase output
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Structural => "phase_1_structural_analysis",
            Self::Quality => "phase_2_quality_assessment",
            Self::LlmDetection => "phase_3_llm_detection",
            Self::Improvements => "phase_4_improvements",
            Self::Enterprise => "phase_5_enterprise",
            Self::Patterns => "phase_6_design_patterns",
            Self::TechnicalDebt => "phase_7_technical_debt",
            Self::Maturity => "phase_8_maturity",
            Self::Compliance => "phase_9_compliance",
        }
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase {}: {}", self.number(), self.name())
    }
}

/// One analyzer stage
pub trait Phase {
    /// Which stage this is
    const ID: PhaseId;

    /// Earlier outputs the phase reads
    type Input<'a>;

    /// Immutable result record
    type Output;

    /// Run the phase
    fn run(&self, doc: &Document, input: Self::Input<'_>) -> Self::Output;
}

/// Borrowed view of one phase output
#[derive(Debug, Clone, Copy)]
pub enum PhaseResult<'a> {
    /// Phase 1
    Structural(&'a StructuralAnalysis),
    /// Phase 2
    Quality(&'a QualityAssessment),
    /// Phase 3
    LlmDetection(&'a LlmDetection),
    /// Phase 4
    Improvements(&'a [Suggestion]),
    /// Phase 5
    Enterprise(&'a [EnterpriseGuidance]),
    /// Phase 6
    Patterns(&'a [PatternMatch]),
    /// Phase 7
    TechnicalDebt(&'a [DebtItem]),
    /// Phase 8
    Maturity(&'a MaturityAssessment),
    /// Phase 9
    Compliance(&'a ComplianceResult),
}

impl PhaseResult<'_> {
    /// Phase that produced the output
    #[must_use]
    pub fn id(&self) -> PhaseId {
        match self {
            Self::Structural(_) => PhaseId::Structural,
            Self::Quality(_) => PhaseId::Quality,
            Self::LlmDetection(_) => PhaseId::LlmDetection,
            Self::Improvements(_) => PhaseId::Improvements,
            Self::Enterprise(_) => PhaseId::Enterprise,
            Self::Patterns(_) => PhaseId::Patterns,
            Self::TechnicalDebt(_) => PhaseId::TechnicalDebt,
            Self::Maturity(_) => PhaseId::Maturity,
            Self::Compliance(_) => PhaseId::Compliance,
        }
    }

    /// One-line headline for the phase
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Structural(r) => format!(
                "structure {:.1}; {}",
                r.structure_quality_score, r.detailed_findings
            ),
            Self::Quality(r) => format!("overall quality {:.1}", r.overall_quality_score),
            Self::LlmDetection(r) => format!(
                "confidence {:.1}; likely AI-generated: {}",
                r.confidence,
                if r.is_likely_ai_generated { "yes" } else { "no" }
            ),
            Self::Improvements(items) => format!("{} suggestions", items.len()),
            Self::Enterprise(items) => format!("{} enterprise gaps", items.len()),
            Self::Patterns(items) => format!("{} applicable patterns", items.len()),
            Self::TechnicalDebt(items) => format!("{} debt items", items.len()),
            Self::Maturity(r) => format!(
                "maturity {:.1} ({})",
                r.overall_maturity_score, r.maturity_level
            ),
            Self::Compliance(r) => format!(
                "{} of {} topics present ({:.1}%)",
                r.present_topics_count, r.total_topics, r.compliance_percentage
            ),
        }
    }
}

impl AnalysisReport {
    /// All phase outputs in execution order
    #[must_use]
    pub fn phases(&self) -> [PhaseResult<'_>; 9] {
        [
            PhaseResult::Structural(&self.phase_1_structural_analysis),
            PhaseResult::Quality(&self.phase_2_quality_assessment),
            PhaseResult::LlmDetection(&self.phase_3_llm_detection),
            PhaseResult::Improvements(&self.phase_4_improvements),
            PhaseResult::Enterprise(&self.phase_5_enterprise),
            PhaseResult::Patterns(&self.phase_6_design_patterns),
            PhaseResult::TechnicalDebt(&self.phase_7_technical_debt),
            PhaseResult::Maturity(&self.phase_8_maturity),
            PhaseResult::Compliance(&self.phase_9_compliance),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_follows_execution_order() {
        for (i, id) in PhaseId::ALL.iter().enumerate() {
            assert_eq!(usize::from(id.number()), i + 1);
            assert!(id.field().starts_with(&format!("phase_{}_", i + 1)));
        }
        assert_eq!(PhaseId::Compliance.to_string(), "Phase 9: Standards Compliance");
    }
}
