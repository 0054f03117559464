//! Phase 2: five quality dimensions
//!
//! Clarity and consistency are scaled by an evidence factor
//! (`min(words / 120, 1)`) so that a near-empty record cannot earn them by
//! saying nothing.

use crate::matching::SectionLookup;
use crate::phase::{Phase, PhaseId};
use crate::report::QualityAssessment;
use crate::score;
use adr_catalog::lexicon::{
    BACK_REFERENCE_TERMS, CONTRADICTORY_PAIRS, HEDGE_TERMS, RATIONALE_SECTION_TERMS,
    RATIONALE_TERMS, STATUS_VALUES,
};
use adr_catalog::sections::{section, COMPLETENESS_TARGETS, TITLE};
use adr_document::{text, Document};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Words at which a document counts as full evidence
const EVIDENCE_WORDS: f64 = 120.0;
/// Average sentence length with no clarity penalty
const TARGET_SENTENCE_WORDS: f64 = 20.0;

// Patterns are literals; a pattern that failed to compile would count no matches.
static URL: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"https?://[^\s)>\]]+").ok());
static TICKET: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\b[A-Z][A-Z0-9]+-\d+\b").ok());
static ISSUE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"#\d+\b").ok());
static PASSIVE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:is|was|were|are|been|be)\s+\w+(?:ed|en)\b").ok());

fn match_count(pattern: &Lazy<Option<Regex>>, haystack: &str) -> usize {
    pattern
        .as_ref()
        .map_or(0, |re| re.find_iter(haystack).count())
}

/// Phase 2
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityScorer;

impl Phase for QualityScorer {
    const ID: PhaseId = PhaseId::Quality;
    type Input<'a> = ();
    type Output = QualityAssessment;

    fn run(&self, doc: &Document, (): ()) -> QualityAssessment {
        let lookup = SectionLookup::new(doc);
        let evidence = (doc.word_count as f64 / EVIDENCE_WORDS).min(1.0);
        let prose = prose(doc);

        let completeness_score = score::finish(completeness(&lookup));
        let clarity_score = score::finish(clarity(doc, &prose) * evidence);
        let traceability_score = score::finish(traceability(doc));
        let consistency_score = score::finish(consistency(doc, &lookup) * evidence);
        let justification_score = score::finish(justification(&lookup, &prose));

        let dimensions = [
            ("completeness", completeness_score),
            ("clarity", clarity_score),
            ("traceability", traceability_score),
            ("consistency", consistency_score),
            ("justification", justification_score),
        ];
        let values: Vec<f64> = dimensions.iter().map(|(_, v)| *v).collect();
        let overall_quality_score = score::finish(score::mean(&values));

        tracing::debug!(
            completeness = completeness_score,
            clarity = clarity_score,
            traceability = traceability_score,
            consistency = consistency_score,
            justification = justification_score,
            overall = overall_quality_score,
            "quality assessment"
        );

        QualityAssessment {
            completeness_score,
            clarity_score,
            traceability_score,
            consistency_score,
            justification_score,
            overall_quality_score,
            quality_dimensions: dimensions
                .iter()
                .map(|(name, value)| ((*name).to_string(), *value))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

/// Body text without headings: preamble then section bodies
pub(crate) fn prose(doc: &Document) -> String {
    std::iter::once(doc.preamble.as_str())
        .chain(doc.sections().map(|s| s.body.as_str()))
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn completeness(lookup: &SectionLookup<'_>) -> f64 {
    COMPLETENESS_TARGETS
        .iter()
        .map(|&(name, weight, target)| {
            let fill = match section(name).and_then(|spec| lookup.find(spec)) {
                None => 0.0,
                Some(_) if name == TITLE => 1.0,
                Some(found) => (found.word_count() as f64 / target as f64).min(1.0),
            };
            weight * fill * 100.0
        })
        .sum()
}

fn clarity(doc: &Document, prose: &str) -> f64 {
    let sentences = text::sentences(prose);
    if sentences.is_empty() {
        return 0.0;
    }
    let words: usize = sentences.iter().map(|s| text::word_count(s)).sum();
    let avg = words as f64 / sentences.len() as f64;
    let length_score = score::clamp(100.0 - 5.0 * (avg - TARGET_SENTENCE_WORDS).max(0.0));

    let hedges = text::count_terms(&doc.text_lower, HEDGE_TERMS);
    let hedge_penalty = (8.0 * text::per_hundred(hedges, doc.word_count)).min(50.0);
    let passive_penalty = (2.0 * match_count(&PASSIVE, prose) as f64).min(10.0);

    length_score - hedge_penalty - passive_penalty
}

/// Explicit references: URLs, ticket IDs, issue numbers and back-references
pub(crate) fn reference_count(doc: &Document) -> usize {
    match_count(&URL, &doc.text)
        + match_count(&TICKET, &doc.text)
        + match_count(&ISSUE, &doc.text)
        + text::count_terms(&doc.text_lower, BACK_REFERENCE_TERMS)
}

fn traceability(doc: &Document) -> f64 {
    let expected = (doc.word_count as f64 / 100.0).max(2.0);
    (reference_count(doc) as f64 / expected).min(1.0) * 100.0
}

fn consistency(doc: &Document, lookup: &SectionLookup<'_>) -> f64 {
    let contradictions = CONTRADICTORY_PAIRS
        .iter()
        .filter(|(a, b)| {
            text::contains_term(&doc.text_lower, a) && text::contains_term(&doc.text_lower, b)
        })
        .count();
    let ambiguous_status = lookup
        .find_named("Status")
        .map_or(false, |s| text::matched_terms(&s.body_lower, STATUS_VALUES).len() > 1);

    100.0 - 25.0 * contradictions as f64 - if ambiguous_status { 20.0 } else { 0.0 }
}

fn justification(lookup: &SectionLookup<'_>, prose: &str) -> f64 {
    // One heading can satisfy several lookups ("Decision Drivers"); count its body once.
    let mut bodies: IndexMap<&str, &str> = IndexMap::new();
    let named = ["Decision", "Context"]
        .into_iter()
        .filter_map(|name| lookup.find_named(name));
    for section in named.chain(lookup.find_by_terms(RATIONALE_SECTION_TERMS)) {
        bodies.entry(section.key.as_str()).or_insert(section.body.as_str());
    }

    if bodies.is_empty() {
        return 0.5 * rationale_score(prose);
    }
    rationale_score(&bodies.into_values().collect::<Vec<_>>().join("\n"))
}

fn rationale_score(body: &str) -> f64 {
    let rationale: Vec<usize> = text::sentences(body)
        .into_iter()
        .filter(|s| text::contains_any(&s.to_lowercase(), RATIONALE_TERMS))
        .map(text::word_count)
        .collect();
    if rationale.is_empty() {
        return 0.0;
    }
    let n = rationale.len() as f64;
    let avg = rationale.iter().sum::<usize>() as f64 / n;
    (20.0 * n).min(60.0) + 40.0 * (avg / 15.0).min(1.0)
}
