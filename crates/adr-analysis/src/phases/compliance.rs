//! Phase 9: standards-compliance checklist
//!
//! A topic is present when a content section's key names it, when one of its
//! phrases appears anywhere in the text, or (for the title topic) when the
//! document has a title heading.

use crate::matching::SectionLookup;
use crate::phase::{Phase, PhaseId};
use crate::report::{ComplianceResult, ComplianceTopic, TopicStatus};
use crate::score;
use adr_catalog::topics::{TopicSpec, COMPLIANCE_TOPICS, PRIORITY_IMPROVEMENT_COUNT};
use adr_document::{text, Document};

/// Phase 9
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceChecker;

impl Phase for ComplianceChecker {
    const ID: PhaseId = PhaseId::Compliance;
    type Input<'a> = ();
    type Output = ComplianceResult;

    fn run(&self, doc: &Document, (): ()) -> ComplianceResult {
        let lookup = SectionLookup::new(doc);
        let topics: Vec<ComplianceTopic> = COMPLIANCE_TOPICS
            .iter()
            .map(|topic| check(doc, &lookup, topic))
            .collect();

        let total_topics = topics.len();
        let present_topics_count = topics
            .iter()
            .filter(|t| t.status == TopicStatus::Present)
            .count();
        let missing_topics_count = total_topics - present_topics_count;

        let mut missing: Vec<&TopicSpec> = COMPLIANCE_TOPICS
            .iter()
            .zip(&topics)
            .filter(|(_, t)| t.status == TopicStatus::Missing)
            .map(|(spec, _)| spec)
            .collect();
        missing.sort_by_key(|spec| spec.importance);
        let priority_improvements = missing
            .iter()
            .take(PRIORITY_IMPROVEMENT_COUNT)
            .map(|spec| spec.name.to_string())
            .collect();

        let compliance_percentage = score::finish(score::ratio(
            present_topics_count as f64,
            total_topics as f64,
        ) * 100.0);

        tracing::debug!(
            present = present_topics_count,
            total = total_topics,
            percentage = compliance_percentage,
            "compliance"
        );

        ComplianceResult {
            total_topics,
            present_topics_count,
            missing_topics_count,
            compliance_percentage,
            topics,
            priority_improvements,
        }
    }
}

fn check(doc: &Document, lookup: &SectionLookup<'_>, topic: &TopicSpec) -> ComplianceTopic {
    let evidence = if let Some(heading) = topic
        .title_heading
        .then(|| lookup.title_heading())
        .flatten()
    {
        Some(format!("Title heading '{}'", heading.heading))
    } else if let Some(section) = lookup.find_by_terms(topic.section_terms).next() {
        Some(format!("Covered by section '{}'", section.heading))
    } else {
        topic
            .content_terms
            .iter()
            .find(|term| text::contains_term(&doc.text_lower, term))
            .map(|term| format!("Mentioned in content ({})", term.trim_end_matches('*')))
    };

    let (status, content_summary, recommendations) = match evidence {
        Some(summary) => (TopicStatus::Present, summary, String::new()),
        None => (
            TopicStatus::Missing,
            "Not addressed".to_string(),
            topic.recommendation.to_string(),
        ),
    };

    ComplianceTopic {
        topic_name: topic.name.to_string(),
        topic_description: topic.description.to_string(),
        status,
        content_summary,
        recommendations,
    }
}
