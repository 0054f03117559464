//! Phase result records and the aggregate report
//!
//! Field names are the wire contract with rendering and storage collaborators.
//! Records hold only owned primitives, strings and lists so a report is
//! independent of the document it came from. Maps are `BTreeMap` so that
//! serialized output is byte-stable.

use adr_catalog::{DebtType, Effort, MaturityLevel, PatternCategory, Priority, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Phase 1 output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralAnalysis {
    /// Title present
    pub has_title: bool,
    /// Status present
    pub has_status: bool,
    /// Context present
    pub has_context: bool,
    /// Decision present
    pub has_decision: bool,
    /// Consequences present
    pub has_consequences: bool,
    /// Number of mandatory sections present
    pub mandatory_sections_count: usize,
    /// Present mandatory sections, catalog order
    pub mandatory_sections_present: Vec<String>,
    /// Missing mandatory sections, catalog order
    pub mandatory_sections_missing: Vec<String>,
    /// Present optional sections, catalog order
    pub optional_sections_found: Vec<String>,
    /// 0-100
    pub structure_quality_score: f64,
    /// One-line summary
    pub detailed_findings: String,
}

/// Phase 2 output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Mandatory sections populated, weighted by body length
    pub completeness_score: f64,
    /// Sentence length and hedge-word rate
    pub clarity_score: f64,
    /// Cross-references relative to length
    pub traceability_score: f64,
    /// Absence of contradictory status keywords
    pub consistency_score: f64,
    /// Rationale-bearing sentences near the decision
    pub justification_score: f64,
    /// Mean of the five
    pub overall_quality_score: f64,
    /// The five scores keyed by dimension name
    pub quality_dimensions: BTreeMap<String, f64>,
}

/// Phase 3 output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmDetection {
    /// 0-100
    pub confidence: f64,
    /// `confidence` above the configured threshold
    pub is_likely_ai_generated: bool,
    /// One entry per triggered heuristic
    pub ai_indicators: Vec<String>,
    /// Verdict explanation
    pub analysis_text: String,
}

/// Phase 4 list element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Ordinal tag
    pub priority: Priority,
    /// Human-readable category
    pub category: String,
    /// What to improve
    pub description: String,
    /// Filled-in template
    pub specific_example: String,
    /// Fixed per-category advice
    pub implementation_guidance: String,
}

/// Phase 5 list element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseGuidance {
    /// Enterprise concern
    pub category: String,
    /// From the category ranking
    pub priority: Priority,
    /// Gap description
    pub description: String,
    /// Why it matters
    pub rationale: String,
    /// How to close the gap
    pub implementation_guidance: String,
    /// What closing it buys
    pub impact_assessment: String,
}

/// Phase 6 list element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Pattern name
    pub name: String,
    /// Catalog category
    pub category: PatternCategory,
    /// When the pattern applies
    pub applicability: String,
    /// Fixed benefits
    pub benefits: Vec<String>,
    /// Fixed considerations
    pub considerations: Vec<String>,
    /// Fixed hints
    pub implementation_hints: String,
}

/// Phase 7 list element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtItem {
    /// Debt taxonomy entry
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    /// Adjusted severity
    pub severity: Severity,
    /// What the debt is
    pub description: String,
    /// Cost of carrying it
    pub impact: String,
    /// How to pay it down
    pub remediation_strategy: String,
    /// Effort estimate
    pub estimated_effort: Effort,
}

/// Phase 8 output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityAssessment {
    /// Mean of the four dimensions
    pub overall_maturity_score: f64,
    /// Level for the rounded score
    pub maturity_level: MaturityLevel,
    /// Structure and completeness
    pub documentation_quality: f64,
    /// Justification and clarity
    pub decision_rationale: f64,
    /// Risks section and risk vocabulary
    pub risk_assessment: f64,
    /// Alternatives section and comparison vocabulary
    pub alternative_analysis: f64,
    /// Next steps for the current level
    pub improvement_pathway: Vec<String>,
}

/// Compliance topic status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicStatus {
    /// Covered by a section or content
    Present,
    /// Not covered
    Missing,
}

/// Phase 9 per-topic record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceTopic {
    /// Topic name
    pub topic_name: String,
    /// Requirement text
    pub topic_description: String,
    /// Present or Missing
    pub status: TopicStatus,
    /// Where the topic was found, or "Not addressed"
    pub content_summary: String,
    /// Advice, empty when present
    pub recommendations: String,
}

/// Phase 9 output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Always 24
    pub total_topics: usize,
    /// Topics present
    pub present_topics_count: usize,
    /// Topics missing
    pub missing_topics_count: usize,
    /// present / total * 100
    pub compliance_percentage: f64,
    /// Checklist order
    pub topics: Vec<ComplianceTopic>,
    /// Up to five missing topics, most important first
    pub priority_improvements: Vec<String>,
}

/// Aggregate of all nine phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Assigned by the persistence collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Phase 1
    pub phase_1_structural_analysis: StructuralAnalysis,
    /// Phase 2
    pub phase_2_quality_assessment: QualityAssessment,
    /// Phase 3
    pub phase_3_llm_detection: LlmDetection,
    /// Phase 4
    pub phase_4_improvements: Vec<Suggestion>,
    /// Phase 5
    pub phase_5_enterprise: Vec<EnterpriseGuidance>,
    /// Phase 6
    pub phase_6_design_patterns: Vec<PatternMatch>,
    /// Phase 7
    pub phase_7_technical_debt: Vec<DebtItem>,
    /// Phase 8
    pub phase_8_maturity: MaturityAssessment,
    /// Phase 9
    pub phase_9_compliance: ComplianceResult,
    /// Phase 2 overall
    pub overall_quality_score: f64,
    /// Phase 8 overall
    pub overall_maturity_score: f64,
    /// Phase 9 percentage
    pub compliance_percentage: f64,
}

impl AnalysisReport {
    /// With identifier
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Canonical JSON
    ///
    /// # Errors
    ///
    /// Only if serialization fails, which plain records never do.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
