//! Phase 3: AI-authorship heuristics
//!
//! Five independent heuristics each add a fixed weight to the confidence
//! score when triggered. This is a rule of thumb with false positives and
//! false negatives; the verdict text says so.

use crate::phase::{Phase, PhaseId};
use crate::phases::quality::prose;
use crate::report::LlmDetection;
use crate::score;
use adr_catalog::lexicon::{BOILERPLATE_PHRASES, JARGON_TERMS};
use adr_document::{text, Document};
use std::collections::HashMap;

const BOILERPLATE_WEIGHT: f64 = 30.0;
const REPEATED_OPENINGS_WEIGHT: f64 = 15.0;
const UNIFORM_LENGTH_WEIGHT: f64 = 25.0;
const JARGON_WEIGHT: f64 = 20.0;
const PUNCTUATION_WEIGHT: f64 = 10.0;

/// Phase 3
#[derive(Debug, Clone, Copy)]
pub struct LlmDetector {
    threshold: f64,
}

impl LlmDetector {
    /// Detector flagging confidence strictly above `threshold`
    #[inline]
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for LlmDetector {
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl Phase for LlmDetector {
    const ID: PhaseId = PhaseId::LlmDetection;
    type Input<'a> = ();
    type Output = LlmDetection;

    fn run(&self, doc: &Document, (): ()) -> LlmDetection {
        let prose = prose(doc);
        let heuristics = [
            boilerplate(doc),
            repeated_openings(&prose),
            uniform_sentence_length(&prose),
            jargon(doc),
            perfect_punctuation(&prose),
        ];

        let mut total = 0.0;
        let mut ai_indicators = Vec::new();
        for (weight, indicator) in heuristics.into_iter().flatten() {
            total += weight;
            ai_indicators.push(indicator);
        }

        let confidence = score::finish(total);
        let is_likely_ai_generated = confidence > self.threshold;
        let analysis_text = verdict(confidence, self.threshold, ai_indicators.len());

        tracing::debug!(
            confidence,
            indicators = ai_indicators.len(),
            likely = is_likely_ai_generated,
            "ai-authorship detection"
        );

        LlmDetection {
            confidence,
            is_likely_ai_generated,
            ai_indicators,
            analysis_text,
        }
    }
}

type Finding = Option<(f64, String)>;

fn boilerplate(doc: &Document) -> Finding {
    let hits = text::count_terms(&doc.text_lower, BOILERPLATE_PHRASES);
    if hits < 3 {
        return None;
    }
    let examples: Vec<String> = text::matched_terms(&doc.text_lower, BOILERPLATE_PHRASES)
        .into_iter()
        .take(3)
        .map(|p| format!("'{p}'"))
        .collect();
    Some((
        BOILERPLATE_WEIGHT,
        format!(
            "Generic boilerplate phrasing: {hits} occurrences (e.g. {})",
            examples.join(", ")
        ),
    ))
}

fn repeated_openings(prose: &str) -> Finding {
    let openings: Vec<String> = prose
        .lines()
        .filter(|line| text::word_count(line) >= 4)
        .map(|line| {
            text::words(line)
                .take(2)
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    if openings.is_empty() {
        return None;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for opening in &openings {
        *counts.entry(opening.as_str()).or_default() += 1;
    }
    // Ties resolve to the lexicographically smallest opening so output is stable.
    let (opening, count) = counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))?;

    let share = count as f64 / openings.len() as f64;
    (count >= 3 && share >= 0.25).then(|| {
        (
            REPEATED_OPENINGS_WEIGHT,
            format!(
                "Repetitive paragraph openings: '{opening}' starts {count} of {} paragraphs",
                openings.len()
            ),
        )
    })
}

fn uniform_sentence_length(prose: &str) -> Finding {
    let lengths: Vec<f64> = text::sentences(prose)
        .into_iter()
        .map(|s| text::word_count(s) as f64)
        .collect();
    if lengths.len() < 5 {
        return None;
    }
    let mean = score::mean(&lengths);
    if mean == 0.0 {
        return None;
    }
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    let cv = variance.sqrt() / mean;
    (cv < 0.25).then(|| {
        (
            UNIFORM_LENGTH_WEIGHT,
            format!(
                "Uniform sentence length: {} sentences averaging {mean:.1} words (variation {cv:.2})",
                lengths.len()
            ),
        )
    })
}

fn jargon(doc: &Document) -> Finding {
    let hits = text::count_terms(&doc.text_lower, JARGON_TERMS);
    let density = text::per_hundred(hits, doc.word_count);
    (hits >= 3 && density >= 2.0).then(|| {
        (
            JARGON_WEIGHT,
            format!("High corporate jargon density: {hits} terms ({density:.1} per 100 words)"),
        )
    })
}

fn perfect_punctuation(prose: &str) -> Finding {
    let mut terminators = 0usize;
    let mut capitalized = 0usize;
    let mut chars = prose.chars().peekable();
    while let Some(c) = chars.next() {
        if !matches!(c, '.' | '!' | '?') || !chars.peek().map_or(false, |n| n.is_whitespace()) {
            continue;
        }
        // Only terminators followed by more text count.
        if let Some(following) = chars.clone().find(|n| !n.is_whitespace()) {
            terminators += 1;
            if following.is_uppercase() {
                capitalized += 1;
            }
        }
    }
    if terminators < 8 {
        return None;
    }
    let share = capitalized as f64 / terminators as f64;
    (share > 0.9).then(|| {
        (
            PUNCTUATION_WEIGHT,
            format!("Consistently perfect punctuation and capitalization ({capitalized} of {terminators} sentence breaks)"),
        )
    })
}

fn verdict(confidence: f64, threshold: f64, indicators: usize) -> String {
    let caveat = "This is a heuristic estimate with known false positives and false negatives, not proof of authorship.";
    if confidence > threshold {
        format!(
            "Confidence {confidence:.1} exceeds the threshold of {threshold:.1}: {indicators} indicators of machine-generated prose were found. {caveat} A human review of the wording is recommended."
        )
    } else if indicators > 0 {
        format!(
            "Confidence {confidence:.1} is at or below the threshold of {threshold:.1}; {indicators} weak indicators were found. {caveat}"
        )
    } else {
        format!("No indicators of machine-generated prose were found. {caveat}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> LlmDetection {
        LlmDetector::default().run(&Document::parse(text).unwrap(), ())
    }

    #[test]
    fn plain_human_note_is_not_flagged() {
        let r = run("# T\n## Decision\nWe picked Postgres. Ops knows it; nobody wants to learn Mongo on call at 3am!");
        assert!(!r.is_likely_ai_generated);
        assert!(r.ai_indicators.is_empty());
        assert!(r.confidence.abs() < f64::EPSILON);
        assert!(r.analysis_text.contains("not proof"));
    }

    #[test]
    fn boilerplate_triggers_its_weight() {
        let r = run("Furthermore, we ship. Additionally, we test. In conclusion, we are done.");
        assert!((r.confidence - BOILERPLATE_WEIGHT).abs() < f64::EPSILON);
        assert_eq!(r.ai_indicators.len(), 1);
        assert!(r.ai_indicators[0].contains("3 occurrences"));
    }

    #[test]
    fn uniform_sentences_are_detected() {
        let finding = uniform_sentence_length(
            "One two three four five.\nSix seven eight nine ten.\nA b c d e.\nF g h i j.\nK l m n o.",
        );
        assert!(finding.is_some());
        let varied = uniform_sentence_length(
            "One.\nSix seven eight nine ten eleven twelve thirteen.\nA b.\nF g h i j k l m n o p q r.\nK l m.",
        );
        assert!(varied.is_none());
    }

    #[test]
    fn repeated_openings_need_three() {
        let prose = "The system will scale well.\nThe system will be secure.\nThe system will be cheap.\nWe like it a lot.";
        let (_, indicator) = repeated_openings(prose).unwrap();
        assert!(indicator.contains("'the system' starts 3 of 4"));
        assert!(repeated_openings("The system will scale.\nThe system is fine.").is_none());
    }

    #[test]
    fn punctuation_needs_eight_breaks() {
        let tidy = "Alpha one. Beta two. Gamma three. Delta four. Echo five. Foxtrot six. Golf seven. Hotel eight. India nine.";
        assert!(perfect_punctuation(tidy).is_some());
        let sloppy = "alpha one. beta two. gamma three. delta four. echo five. foxtrot six. golf seven. hotel eight. india nine.";
        assert!(perfect_punctuation(sloppy).is_none());
        assert!(perfect_punctuation("Short. Text. Here.").is_none());
    }

    #[test]
    fn threshold_is_strict() {
        let detector = LlmDetector::new(30.0);
        let doc = Document::parse("Furthermore, we ship. Additionally, we test. In conclusion, we are done.").unwrap();
        let r = detector.run(&doc, ());
        assert!((r.confidence - 30.0).abs() < f64::EPSILON);
        assert!(!r.is_likely_ai_generated);
    }
}
