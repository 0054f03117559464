//! Phase 4: prioritized improvement suggestions
//!
//! Rules fire in a fixed order (missing headings, missing mandatory sections,
//! weak quality dimensions, AI-authorship); the result is then stably sorted
//! High before Medium before Low.

use crate::phase::{Phase, PhaseId};
use crate::report::{LlmDetection, QualityAssessment, StructuralAnalysis, Suggestion};
use adr_catalog::Priority;
use adr_document::Document;
use std::cmp::Reverse;

/// Earlier outputs read by [`ImprovementGenerator`]
#[derive(Debug, Clone, Copy)]
pub struct ImprovementInput<'a> {
    /// Phase 1
    pub structure: &'a StructuralAnalysis,
    /// Phase 2
    pub quality: &'a QualityAssessment,
    /// Phase 3
    pub llm: &'a LlmDetection,
}

/// Phase 4
#[derive(Debug, Clone, Copy)]
pub struct ImprovementGenerator {
    quality_floor: f64,
}

impl ImprovementGenerator {
    /// Generator suggesting fixes for dimensions strictly below `quality_floor`
    #[inline]
    #[must_use]
    pub fn new(quality_floor: f64) -> Self {
        Self { quality_floor }
    }
}

impl Default for ImprovementGenerator {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl Phase for ImprovementGenerator {
    const ID: PhaseId = PhaseId::Improvements;
    type Input<'a> = ImprovementInput<'a>;
    type Output = Vec<Suggestion>;

    fn run(&self, doc: &Document, input: ImprovementInput<'_>) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if doc.is_unstructured() {
            suggestions.push(Suggestion {
                priority: Priority::High,
                category: "Structure".to_string(),
                description: "Add markdown section headings".to_string(),
                specific_example: "# ADR-001: <decision title>\n\n## Status\n\n## Context\n\n## Decision\n\n## Consequences".to_string(),
                implementation_guidance: "Split the record into sections, each introduced by a markdown heading that names it".to_string(),
            });
        }

        for missing in &input.structure.mandatory_sections_missing {
            suggestions.push(Suggestion {
                priority: Priority::High,
                category: "Missing Content".to_string(),
                description: format!("Add missing '{missing}' section"),
                specific_example: format!(
                    "## {missing}\n[Detailed content about the {} of this decision]",
                    missing.to_lowercase()
                ),
                implementation_guidance: format!(
                    "Create a '{missing}' section with its own heading so readers and tools can find it"
                ),
            });
        }

        for (dimension, score) in [
            ("Completeness", input.quality.completeness_score),
            ("Clarity", input.quality.clarity_score),
            ("Traceability", input.quality.traceability_score),
            ("Consistency", input.quality.consistency_score),
            ("Justification", input.quality.justification_score),
        ] {
            if score < self.quality_floor {
                let (example, guidance) = dimension_template(dimension);
                suggestions.push(Suggestion {
                    priority: Priority::Medium,
                    category: dimension.to_string(),
                    description: format!(
                        "Improve {} (scored {score:.1}, below {:.1})",
                        dimension.to_lowercase(),
                        self.quality_floor
                    ),
                    specific_example: example.to_string(),
                    implementation_guidance: guidance.to_string(),
                });
            }
        }

        if input.llm.is_likely_ai_generated {
            suggestions.push(Suggestion {
                priority: Priority::Low,
                category: "Authenticity".to_string(),
                description: format!(
                    "Have a human review the wording (AI-authorship confidence {:.1})",
                    input.llm.confidence
                ),
                specific_example: "Replace 'a robust architecture with seamless integration' with the concrete systems, numbers and dates behind the decision".to_string(),
                implementation_guidance: "Ask the decision owner to rewrite generic passages in their own words and remove stock phrases".to_string(),
            });
        }

        suggestions.sort_by_key(|s| Reverse(s.priority));
        tracing::debug!(count = suggestions.len(), "improvement suggestions");
        suggestions
    }
}

fn dimension_template(dimension: &str) -> (&'static str, &'static str) {
    match dimension {
        "Completeness" => (
            "Expand Context to describe the forces at play and Consequences to list both benefits and drawbacks",
            "Give every mandatory section enough detail to stand on its own",
        ),
        "Clarity" => (
            "Replace 'we might possibly adopt some kind of queue' with 'we will adopt RabbitMQ'",
            "Prefer short, active sentences and remove hedge words",
        ),
        "Traceability" => (
            "Link related records and tickets: 'Supersedes ADR-012; tracked in PLAT-341'",
            "Include URLs, ticket IDs and references to related ADRs",
        ),
        "Consistency" => (
            "Status: Accepted (remove conflicting 'Proposed' wording elsewhere)",
            "Make the status and the decision wording agree throughout the record",
        ),
        _ => (
            "We chose PostgreSQL because the team already operates it, which avoids new on-call runbooks",
            "Explain why the decision was made using explicit rationale and trade-offs",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::{LlmDetector, QualityScorer, StructuralAnalyzer};
    use pretty_assertions::assert_eq;

    fn run(text: &str, generator: ImprovementGenerator) -> Vec<Suggestion> {
        let doc = Document::parse(text).unwrap();
        let structure = StructuralAnalyzer.run(&doc, ());
        let quality = QualityScorer.run(&doc, ());
        let llm = LlmDetector::default().run(&doc, ());
        generator.run(&doc, ImprovementInput { structure: &structure, quality: &quality, llm: &llm })
    }

    #[test]
    fn missing_sections_become_high_priority() {
        let s = run("# Use Redis\n\nShort note.", ImprovementGenerator::default());
        let high: Vec<_> = s
            .iter()
            .filter(|s| s.priority == Priority::High)
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(
            high,
            [
                "Add missing 'Status' section",
                "Add missing 'Context' section",
                "Add missing 'Decision' section",
                "Add missing 'Consequences' section",
            ]
        );
        assert!(s.iter().any(|s| s.specific_example.starts_with("## Context\n")));
    }

    #[test]
    fn unstructured_text_leads_with_headings_suggestion() {
        let s = run("A few words without headings.", ImprovementGenerator::default());
        assert_eq!(s[0].category, "Structure");
        assert_eq!(s[1].description, "Add missing 'Title' section");
    }

    #[test]
    fn output_is_sorted_by_priority() {
        let s = run("# Use Redis\n\nShort note.", ImprovementGenerator::default());
        let ranks: Vec<_> = s.iter().map(|s| s.priority).collect();
        let mut sorted = ranks.clone();
        sorted.sort_by_key(|p| Reverse(*p));
        assert_eq!(ranks, sorted);
        assert!(s.iter().any(|s| s.priority == Priority::Medium));
    }

    #[test]
    fn floor_zero_suppresses_quality_suggestions() {
        let s = run("# Use Redis\n\nShort note.", ImprovementGenerator::new(0.0));
        assert!(s.iter().all(|s| s.priority == Priority::High));
    }
}
