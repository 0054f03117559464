//! Phase 5: enterprise-architecture gaps
//!
//! Only the Decision and Context sections are scanned. A category with no
//! keyword hit there is reported; categories that are addressed are omitted.

use crate::matching::SectionLookup;
use crate::phase::{Phase, PhaseId};
use crate::report::EnterpriseGuidance;
use adr_catalog::ENTERPRISE_CATEGORIES;
use adr_document::{text, Document};

/// Phase 5
#[derive(Debug, Clone, Copy, Default)]
pub struct EnterpriseAdvisor;

impl Phase for EnterpriseAdvisor {
    const ID: PhaseId = PhaseId::Enterprise;
    type Input<'a> = ();
    type Output = Vec<EnterpriseGuidance>;

    fn run(&self, doc: &Document, (): ()) -> Vec<EnterpriseGuidance> {
        let lookup = SectionLookup::new(doc);
        let scanned: String = ["Decision", "Context"]
            .iter()
            .filter_map(|name| lookup.find_named(name))
            .map(|s| s.body_lower.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        // The catalog is declared in importance order.
        let gaps: Vec<EnterpriseGuidance> = ENTERPRISE_CATEGORIES
            .iter()
            .filter(|category| !text::contains_any(&scanned, category.keywords))
            .map(|category| EnterpriseGuidance {
                category: category.name.to_string(),
                priority: category.priority,
                description: category.description.to_string(),
                rationale: category.rationale.to_string(),
                implementation_guidance: category.implementation_guidance.to_string(),
                impact_assessment: category.impact_assessment.to_string(),
            })
            .collect();

        tracing::debug!(gaps = gaps.len(), "enterprise guidance");
        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adr_catalog::Priority;
    use pretty_assertions::assert_eq;

    fn categories(text: &str) -> Vec<String> {
        EnterpriseAdvisor
            .run(&Document::parse(text).unwrap(), ())
            .into_iter()
            .map(|g| g.category)
            .collect()
    }

    #[test]
    fn every_category_is_a_gap_without_decision_or_context() {
        let gaps = EnterpriseAdvisor.run(&Document::parse("# T\n## Notes\nsecurity governance").unwrap(), ());
        assert_eq!(gaps.len(), 6);
        assert_eq!(gaps[0].category, "Security");
        assert_eq!(gaps[0].priority, Priority::High);
        assert_eq!(gaps[5].priority, Priority::Low);
    }

    #[test]
    fn addressed_categories_are_omitted() {
        let got = categories(
            "# T\n## Context\nAll traffic uses TLS and encryption at rest.\n## Decision\nThe architecture board approved the policy.",
        );
        assert!(!got.contains(&"Security".to_string()));
        assert!(!got.contains(&"Governance".to_string()));
        assert!(got.contains(&"Scalability".to_string()));
    }

    #[test]
    fn output_follows_ranking() {
        let ranks: Vec<_> = EnterpriseAdvisor
            .run(&Document::parse("# T\n## Decision\nnothing relevant").unwrap(), ())
            .iter()
            .map(|g| g.priority)
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
    }
}
