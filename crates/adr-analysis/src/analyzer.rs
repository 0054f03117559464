//! Pipeline orchestrator
//!
//! Normalizes the text once, then runs the nine phases in order, feeding each
//! the borrowed outputs it depends on:
//!
//! ```text
//! 1 Structural ──┬────────────────────────────┐
//! 2 Quality ─────┼──> 4 Improvements          ├──> 8 Maturity
//! 3 LLM ─────────┘    7 Debt <── 2            │
//! 5 Enterprise, 6 Patterns, 9 Compliance <── document only
//! ```
//!
//! Analysis is pure, so separate documents may be analyzed on separate
//! threads; [`Analyzer::analyze_batch`] does that with rayon.

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::phase::Phase;
use crate::phases::{
    ComplianceChecker, DebtDetector, EnterpriseAdvisor, ImprovementGenerator, ImprovementInput,
    LlmDetector, MaturityAggregator, MaturityInput, PatternMatcher, QualityScorer,
    StructuralAnalyzer,
};
use crate::report::AnalysisReport;
use adr_document::Document;
use rayon::prelude::*;

/// Runs the full pipeline with one configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Analyzer with the given thresholds
    #[inline]
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze raw ADR text
    ///
    /// # Errors
    ///
    /// [`AnalysisError::Document`] when the text is empty or has only
    /// whitespace and markup. No phase runs in that case.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let doc = Document::parse(text).map_err(|e| {
            tracing::warn!(error = %e, "rejected input");
            AnalysisError::from(e)
        })?;
        Ok(self.analyze_document(&doc))
    }

    /// Analyze an already normalized document
    #[must_use]
    pub fn analyze_document(&self, doc: &Document) -> AnalysisReport {
        let span = tracing::info_span!(
            "analysis",
            words = doc.word_count,
            sections = doc.sections.len()
        );
        let _enter = span.enter();

        let structure = run_phase(&StructuralAnalyzer, doc, ());
        let quality = run_phase(&QualityScorer, doc, ());
        let llm = run_phase(
            &LlmDetector::new(self.config.ai_confidence_threshold),
            doc,
            (),
        );
        let improvements = run_phase(
            &ImprovementGenerator::new(self.config.quality_floor),
            doc,
            ImprovementInput {
                structure: &structure,
                quality: &quality,
                llm: &llm,
            },
        );
        let enterprise = run_phase(&EnterpriseAdvisor, doc, ());
        let patterns = run_phase(&PatternMatcher, doc, ());
        let debt = run_phase(&DebtDetector::new(&self.config), doc, &quality);
        let maturity = run_phase(
            &MaturityAggregator,
            doc,
            MaturityInput {
                structure: &structure,
                quality: &quality,
            },
        );
        let compliance = run_phase(&ComplianceChecker, doc, ());

        tracing::info!(
            quality = quality.overall_quality_score,
            maturity = maturity.overall_maturity_score,
            compliance = compliance.compliance_percentage,
            "analysis complete"
        );

        AnalysisReport {
            id: None,
            overall_quality_score: quality.overall_quality_score,
            overall_maturity_score: maturity.overall_maturity_score,
            compliance_percentage: compliance.compliance_percentage,
            phase_1_structural_analysis: structure,
            phase_2_quality_assessment: quality,
            phase_3_llm_detection: llm,
            phase_4_improvements: improvements,
            phase_5_enterprise: enterprise,
            phase_6_design_patterns: patterns,
            phase_7_technical_debt: debt,
            phase_8_maturity: maturity,
            phase_9_compliance: compliance,
        }
    }

    /// Analyze many documents in parallel; results keep input order
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Result<AnalysisReport, AnalysisError>>
    where
        S: AsRef<str> + Sync,
    {
        tracing::debug!(documents = texts.len(), "batch analysis");
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }
}

fn run_phase<P: Phase>(phase: &P, doc: &Document, input: P::Input<'_>) -> P::Output {
    let _span = tracing::debug_span!("phase", number = P::ID.number(), name = P::ID.name()).entered();
    phase.run(doc, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::PhaseId;
    use pretty_assertions::assert_eq;

    const ADR: &str = "# ADR-1: Use Postgres\n## Status\nAccepted\n## Context\nWe need durable storage.\n## Decision\nWe will use Postgres because the team runs it.\n## Consequences\nOne more database to operate.";

    #[test]
    fn empty_input_is_rejected() {
        let err = Analyzer::default().analyze("  \n\t").unwrap_err();
        assert!(err.is_empty_document());
        assert!(Analyzer::default().analyze("").is_err());
    }

    #[test]
    fn top_level_scores_mirror_phases() {
        let report = Analyzer::default().analyze(ADR).unwrap();
        assert_eq!(report.overall_quality_score, report.phase_2_quality_assessment.overall_quality_score);
        assert_eq!(report.overall_maturity_score, report.phase_8_maturity.overall_maturity_score);
        assert_eq!(report.compliance_percentage, report.phase_9_compliance.compliance_percentage);
        assert!(report.id.is_none());
        assert_eq!(report.phase_1_structural_analysis.mandatory_sections_count, 5);
    }

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.analyze(ADR).unwrap(), analyzer.analyze(ADR).unwrap());
    }

    #[test]
    fn config_reaches_the_phases() {
        let strict = Analyzer::new(AnalyzerConfig::new().with_quality_floor(101.0));
        let lenient = Analyzer::new(AnalyzerConfig::new().with_quality_floor(0.0));
        let strict = strict.analyze(ADR).unwrap();
        let lenient = lenient.analyze(ADR).unwrap();
        assert!(strict.phase_4_improvements.len() > lenient.phase_4_improvements.len());
    }

    #[test]
    fn batch_keeps_order_and_isolates_failures() {
        let results = Analyzer::default().analyze_batch(&[ADR, "", "# Note\nSmall text."]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        let third = results[2].as_ref().unwrap();
        assert_eq!(third.phase_1_structural_analysis.mandatory_sections_count, 1);
    }

    #[test]
    fn phases_view_is_in_order() {
        let report = Analyzer::default().analyze(ADR).unwrap();
        let ids: Vec<_> = report.phases().iter().map(|p| p.id()).collect();
        assert_eq!(ids, PhaseId::ALL);
    }
}
