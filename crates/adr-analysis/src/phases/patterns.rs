//! Phase 6: applicable design patterns
//!
//! Patterns are evaluated once each, in catalog order, against the whole
//! document text.

use crate::phase::{Phase, PhaseId};
use crate::report::PatternMatch;
use adr_catalog::{MatchRule, PatternSpec, PATTERNS};
use adr_document::{text, Document};
use tracing::Level;

/// Phase 6
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl Phase for PatternMatcher {
    const ID: PhaseId = PhaseId::Patterns;
    type Input<'a> = ();
    type Output = Vec<PatternMatch>;

    fn run(&self, doc: &Document, (): ()) -> Vec<PatternMatch> {
        let matches: Vec<PatternMatch> = PATTERNS
            .iter()
            .filter(|pattern| applies(pattern, &doc.text_lower))
            .map(to_match)
            .collect();
        tracing::debug!(count = matches.len(), "design patterns");
        matches
    }
}

fn applies(pattern: &PatternSpec, haystack: &str) -> bool {
    let Some(rule) = pattern.rules.iter().find(|rule| holds(rule, haystack)) else {
        return false;
    };
    if tracing::enabled!(Level::TRACE) {
        let evidence: Vec<&str> = rule
            .all_of
            .iter()
            .filter_map(|group| group.iter().copied().find(|t| text::contains_term(haystack, t)))
            .collect();
        tracing::trace!(pattern = pattern.name, ?evidence, "pattern matched");
    }
    true
}

fn holds(rule: &MatchRule, haystack: &str) -> bool {
    rule.all_of
        .iter()
        .all(|group| text::contains_any(haystack, group))
}

fn to_match(pattern: &PatternSpec) -> PatternMatch {
    PatternMatch {
        name: pattern.name.to_string(),
        category: pattern.category,
        applicability: pattern.applicability.to_string(),
        benefits: pattern.benefits.iter().map(ToString::to_string).collect(),
        considerations: pattern.considerations.iter().map(ToString::to_string).collect(),
        implementation_hints: pattern.implementation_hints.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adr_catalog::PatternCategory;
    use pretty_assertions::assert_eq;

    fn names(text: &str) -> Vec<String> {
        PatternMatcher
            .run(&Document::parse(text).unwrap(), ())
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn microservices_by_conjunction() {
        let got = names("# T\n## Decision\nEach service can be deployed independently by its team.");
        assert!(got.contains(&"Microservices".to_string()));
        let got = names("# T\n## Decision\nEach service shares one release train.");
        assert!(!got.contains(&"Microservices".to_string()));
    }

    #[test]
    fn matches_follow_catalog_order_without_duplicates() {
        let got = names(
            "# T\n## Decision\nWe split into microservices behind an API gateway, add a circuit breaker and keep secrets in Vault.",
        );
        let catalog: Vec<_> = PATTERNS.iter().map(|p| p.name.to_string()).filter(|n| got.contains(n)).collect();
        assert_eq!(got, catalog);
        assert!(got.len() >= 3);
    }

    #[test]
    fn nothing_matches_unrelated_text() {
        assert!(names("# T\n## Decision\nWe rename the button to Save.").is_empty());
    }

    #[test]
    fn records_carry_catalog_content() {
        let m = PatternMatcher.run(&Document::parse("Use a circuit breaker.").unwrap(), ());
        let breaker = m.iter().find(|p| p.name == "Circuit Breaker").unwrap();
        assert_eq!(breaker.category, PatternCategory::Resilience);
        assert!(!breaker.benefits.is_empty());
    }

    #[test]
    fn trace_logging_does_not_change_matches() {
        let doc = Document::parse("Each service is deployed independently behind a circuit breaker.").unwrap();
        let quiet = PatternMatcher.run(&doc, ());
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .finish();
        let traced = tracing::subscriber::with_default(subscriber, || PatternMatcher.run(&doc, ()));
        assert_eq!(traced, quiet);
        assert!(!quiet.is_empty());
    }
}
