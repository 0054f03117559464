//! Phase 8: maturity level and pathway

use crate::matching::SectionLookup;
use crate::phase::{Phase, PhaseId};
use crate::report::{MaturityAssessment, QualityAssessment, StructuralAnalysis};
use crate::score;
use adr_catalog::lexicon::{ALTERNATIVE_TERMS, RISK_TERMS};
use adr_catalog::MaturityLevel;
use adr_document::{text, Document};

/// Credit for having the dedicated section
const SECTION_CREDIT: f64 = 50.0;

/// Earlier outputs read by [`MaturityAggregator`]
#[derive(Debug, Clone, Copy)]
pub struct MaturityInput<'a> {
    /// Phase 1
    pub structure: &'a StructuralAnalysis,
    /// Phase 2
    pub quality: &'a QualityAssessment,
}

/// Phase 8
#[derive(Debug, Clone, Copy, Default)]
pub struct MaturityAggregator;

impl Phase for MaturityAggregator {
    const ID: PhaseId = PhaseId::Maturity;
    type Input<'a> = MaturityInput<'a>;
    type Output = MaturityAssessment;

    fn run(&self, doc: &Document, input: MaturityInput<'_>) -> MaturityAssessment {
        let lookup = SectionLookup::new(doc);
        let quality = input.quality;

        let documentation_quality = score::finish(
            0.6 * input.structure.structure_quality_score + 0.4 * quality.completeness_score,
        );
        let decision_rationale =
            score::finish(0.7 * quality.justification_score + 0.3 * quality.clarity_score);
        let risk_assessment = score::finish(dimension(doc, &lookup, "Risks", RISK_TERMS));
        let alternative_analysis =
            score::finish(dimension(doc, &lookup, "Alternatives", ALTERNATIVE_TERMS));

        let overall_maturity_score = score::finish(score::mean(&[
            documentation_quality,
            decision_rationale,
            risk_assessment,
            alternative_analysis,
        ]));
        let maturity_level = MaturityLevel::from_score(overall_maturity_score);

        tracing::debug!(
            score = overall_maturity_score,
            level = %maturity_level,
            "maturity assessment"
        );

        MaturityAssessment {
            overall_maturity_score,
            maturity_level,
            documentation_quality,
            decision_rationale,
            risk_assessment,
            alternative_analysis,
            improvement_pathway: maturity_level
                .pathway()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Section credit plus up to 50 for keyword density (20 per term per 100 words)
fn dimension(doc: &Document, lookup: &SectionLookup<'_>, section: &str, terms: &[&str]) -> f64 {
    let credit = if lookup.find_named(section).is_some() {
        SECTION_CREDIT
    } else {
        0.0
    };
    let density = text::per_hundred(text::count_terms(&doc.text_lower, terms), doc.word_count);
    credit + (20.0 * density).min(50.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::{QualityScorer, StructuralAnalyzer};

    fn run(text: &str) -> MaturityAssessment {
        let doc = Document::parse(text).unwrap();
        let structure = StructuralAnalyzer.run(&doc, ());
        let quality = QualityScorer.run(&doc, ());
        MaturityAggregator.run(&doc, MaturityInput { structure: &structure, quality: &quality })
    }

    #[test]
    fn risk_section_and_vocabulary() {
        let m = run("# T\n## Risks\nThe main risk is vendor failure; we mitigate it with a fallback.");
        // section 50; 4 risk terms in 15 words saturates the density half
        assert!((m.risk_assessment - 100.0).abs() < f64::EPSILON);
        assert!(m.alternative_analysis.abs() < f64::EPSILON);
    }

    #[test]
    fn vocabulary_without_section_caps_at_50() {
        let m = run("The alternative we considered instead was Redis versus Memcached.");
        assert!((m.alternative_analysis - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn level_and_pathway_follow_score() {
        let m = run("# T\nsmall");
        assert_eq!(m.maturity_level, MaturityLevel::Initial);
        assert_eq!(m.improvement_pathway.len(), MaturityLevel::Initial.pathway().len());
        assert_eq!(m.maturity_level, MaturityLevel::from_score(m.overall_maturity_score));
    }
}
