//! Phase 7: technical-debt signals
//!
//! Score-triggered types (Code, Design, Documentation) adjust their default
//! severity by the gap below the floor: one level up at a gap of 30 or more,
//! one level down under 10. Keyword-triggered types keep their default, except
//! Architectural which escalates on three or more shortcut admissions.

use crate::config::AnalyzerConfig;
use crate::phase::{Phase, PhaseId};
use crate::report::{DebtItem, QualityAssessment};
use adr_catalog::debt::{spec, DebtType};
use adr_catalog::lexicon::{DEBT_SIGNAL_TERMS, INFRASTRUCTURE_TERMS, KNOWLEDGE_TERMS, TEST_TERMS};
use adr_catalog::Severity;
use adr_document::{text, Document};

const ESCALATION_GAP: f64 = 30.0;
const DEESCALATION_GAP: f64 = 10.0;
const MIN_SECTIONS: usize = 3;

/// Phase 7
#[derive(Debug, Clone, Copy)]
pub struct DebtDetector {
    code_floor: f64,
    design_floor: f64,
    documentation_floor: f64,
}

impl DebtDetector {
    /// Detector with the floors from `config`
    #[must_use]
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            code_floor: config.code_debt_floor,
            design_floor: config.design_debt_floor,
            documentation_floor: config.documentation_debt_floor,
        }
    }
}

impl Default for DebtDetector {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl Phase for DebtDetector {
    const ID: PhaseId = PhaseId::TechnicalDebt;
    type Input<'a> = &'a QualityAssessment;
    type Output = Vec<DebtItem>;

    fn run(&self, doc: &Document, quality: &QualityAssessment) -> Vec<DebtItem> {
        let hay = doc.text_lower.as_str();
        let mut items = Vec::new();

        if let Some(item) = below_floor(DebtType::Code, "traceability", quality.traceability_score, self.code_floor) {
            items.push(item);
        }

        let signals = text::matched_terms(hay, DEBT_SIGNAL_TERMS);
        let sections = doc.sections.len();
        if !signals.is_empty() || sections < MIN_SECTIONS {
            let template = spec(DebtType::Architectural);
            let occurrences = text::count_terms(hay, DEBT_SIGNAL_TERMS);
            let severity = if occurrences >= 3 {
                template.default_severity.escalate()
            } else {
                template.default_severity
            };
            let detail = if signals.is_empty() {
                format!("only {sections} sections")
            } else {
                let words: Vec<&str> = signals.iter().map(|t| t.trim_end_matches('*')).collect();
                format!("mentions {}", words.join(", "))
            };
            items.push(item(DebtType::Architectural, severity, &detail));
        }

        if let Some(item) = below_floor(DebtType::Design, "justification", quality.justification_score, self.design_floor) {
            items.push(item);
        }
        if let Some(item) = below_floor(
            DebtType::Documentation,
            "completeness",
            quality.completeness_score,
            self.documentation_floor,
        ) {
            items.push(item);
        }

        for (debt_type, terms, detail) in [
            (DebtType::Test, TEST_TERMS, "no testing or validation terms"),
            (DebtType::Infrastructure, INFRASTRUCTURE_TERMS, "no deployment or operations terms"),
            (DebtType::Knowledge, KNOWLEDGE_TERMS, "no owners or stakeholders named"),
        ] {
            if !text::contains_any(hay, terms) {
                items.push(item(debt_type, spec(debt_type).default_severity, detail));
            }
        }

        tracing::debug!(count = items.len(), "technical debt");
        items
    }
}

fn below_floor(debt_type: DebtType, dimension: &str, score: f64, floor: f64) -> Option<DebtItem> {
    if score >= floor {
        return None;
    }
    let gap = floor - score;
    let default = spec(debt_type).default_severity;
    let severity = if gap >= ESCALATION_GAP {
        default.escalate()
    } else if gap < DEESCALATION_GAP {
        default.deescalate()
    } else {
        default
    };
    Some(item(
        debt_type,
        severity,
        &format!("{dimension} {score:.1}, floor {floor:.1}"),
    ))
}

fn item(debt_type: DebtType, severity: Severity, detail: &str) -> DebtItem {
    let template = spec(debt_type);
    DebtItem {
        debt_type,
        severity,
        description: format!("{} ({detail})", template.description),
        impact: template.impact.to_string(),
        remediation_strategy: template.remediation_strategy.to_string(),
        estimated_effort: template.estimated_effort,
    }
}
