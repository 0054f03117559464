//! Phase 1: structural completeness
//!
//! Each mandatory section is worth [`MANDATORY_SECTION_POINTS`]; any optional
//! section adds a flat [`OPTIONAL_SECTION_BONUS`]. The score reaches 100 only
//! with every mandatory section and at least one optional one.

use crate::matching::SectionLookup;
use crate::phase::{Phase, PhaseId};
use crate::report::StructuralAnalysis;
use crate::score;
use adr_catalog::sections::{
    SectionSpec, MANDATORY_SECTIONS, MANDATORY_SECTION_POINTS, OPTIONAL_SECTIONS,
    OPTIONAL_SECTION_BONUS,
};
use adr_document::Document;

/// Phase 1
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralAnalyzer;

impl Phase for StructuralAnalyzer {
    const ID: PhaseId = PhaseId::Structural;
    type Input<'a> = ();
    type Output = StructuralAnalysis;

    fn run(&self, doc: &Document, (): ()) -> StructuralAnalysis {
        let lookup = SectionLookup::new(doc);

        let (present, missing): (Vec<&SectionSpec>, Vec<&SectionSpec>) = MANDATORY_SECTIONS
            .iter()
            .partition(|spec| lookup.has(spec));
        let present: Vec<String> = present.iter().map(|s| s.name.to_string()).collect();
        let missing: Vec<String> = missing.iter().map(|s| s.name.to_string()).collect();
        let optional: Vec<String> = OPTIONAL_SECTIONS
            .iter()
            .filter(|spec| lookup.has(spec))
            .map(|s| s.name.to_string())
            .collect();

        let bonus = if optional.is_empty() { 0.0 } else { OPTIONAL_SECTION_BONUS };
        let raw = MANDATORY_SECTION_POINTS * present.len() as f64 + bonus;
        let structure_quality_score = score::finish(raw);

        let has = |name: &str| present.iter().any(|p| p == name);
        let result = StructuralAnalysis {
            has_title: has("Title"),
            has_status: has("Status"),
            has_context: has("Context"),
            has_decision: has("Decision"),
            has_consequences: has("Consequences"),
            mandatory_sections_count: present.len(),
            detailed_findings: findings(present.len(), &missing, &optional),
            mandatory_sections_present: present,
            mandatory_sections_missing: missing,
            optional_sections_found: optional,
            structure_quality_score,
        };

        tracing::debug!(
            present = result.mandatory_sections_count,
            optional = result.optional_sections_found.len(),
            score = result.structure_quality_score,
            "structural analysis"
        );
        result
    }
}

fn findings(present: usize, missing: &[String], optional: &[String]) -> String {
    let mut out = format!(
        "{present} of {} mandatory sections present",
        MANDATORY_SECTIONS.len()
    );
    if !missing.is_empty() {
        out.push_str("; missing: ");
        out.push_str(&missing.join(", "));
    }
    if optional.is_empty() {
        out.push_str("; no optional sections");
    } else {
        out.push_str("; optional sections: ");
        out.push_str(&optional.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> StructuralAnalysis {
        StructuralAnalyzer.run(&Document::parse(text).unwrap(), ())
    }

    #[test]
    fn complete_record_with_optional_section_scores_100() {
        let r = run("# ADR-1: Use Kafka\n## Status\nAccepted\n## Context\nc\n## Decision\nd\n## Consequences\ne\n## Risks\nr\n");
        assert!((r.structure_quality_score - 100.0).abs() < f64::EPSILON);
        assert_eq!(r.mandatory_sections_count, 5);
        assert!(r.mandatory_sections_missing.is_empty());
        assert_eq!(r.optional_sections_found, ["Risks"]);
        assert!(r.has_title && r.has_status && r.has_context && r.has_decision && r.has_consequences);
    }

    #[test]
    fn complete_record_without_optional_section_scores_90() {
        let r = run("# ADR-1: Use Kafka\n## Status\nAccepted\n## Context\nc\n## Decision\nd\n## Consequences\ne\n");
        assert!((r.structure_quality_score - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_sections_are_listed_in_catalog_order() {
        let r = run("# Use Kafka\n## Decision\nd\n## Alternatives\nRabbitMQ\n");
        assert_eq!(r.mandatory_sections_present, ["Title", "Decision"]);
        assert_eq!(r.mandatory_sections_missing, ["Status", "Context", "Consequences"]);
        assert_eq!(
            r.detailed_findings,
            "2 of 5 mandatory sections present; missing: Status, Context, Consequences; optional sections: Alternatives"
        );
        assert!((r.structure_quality_score - 46.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unstructured_text_has_nothing() {
        let r = run("just some words about a decision");
        assert_eq!(r.mandatory_sections_count, 0);
        assert_eq!(r.mandatory_sections_missing.len(), 5);
        assert!(r.structure_quality_score.abs() < f64::EPSILON);
    }
}
