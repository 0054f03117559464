//! ADR Analysis - the nine-phase quality pipeline
//!
//! Turns the text of one Architecture Decision Record into an
//! [`AnalysisReport`]:
//! - Phase 1: structural analysis against the mandatory/optional sections
//! - Phase 2: five quality dimensions and their mean as the overall score
//! - Phase 3: heuristic AI-authorship confidence
//! - Phase 4: prioritized improvement suggestions
//! - Phase 5: enterprise-architecture gaps
//! - Phase 6: applicable design patterns
//! - Phase 7: technical-debt signals
//! - Phase 8: architecture maturity level and pathway
//! - Phase 9: 24-topic standards compliance
//!
//! Every phase is deterministic; the same text and configuration always give
//! the same report.
//!
//! # Example
//!
//! ```rust
//! use adr_analysis::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::default());
//! let report = analyzer
//!     .analyze("# ADR-1: Use Postgres\n## Status\nAccepted\n")
//!     .expect("non-empty input");
//! assert_eq!(report.phase_1_structural_analysis.mandatory_sections_count, 2);
//! assert!(report.phase_1_structural_analysis.mandatory_sections_missing.contains(&"Context".to_string()));
//! ```

#![warn(unreachable_pub)]

pub mod analyzer;
pub mod config;
pub mod error;
mod matching;
pub mod phase;
pub mod phases;
pub mod report;
mod score;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ConfigError};
pub use phase::{Phase, PhaseId, PhaseResult};
pub use report::{
    AnalysisReport, ComplianceResult, ComplianceTopic, DebtItem, EnterpriseGuidance,
    LlmDetection, MaturityAssessment, PatternMatch, QualityAssessment, StructuralAnalysis,
    Suggestion, TopicStatus,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze `text` with the default configuration
///
/// # Errors
///
/// See [`Analyzer::analyze`].
pub fn analyze(text: &str) -> Result<AnalysisReport, AnalysisError> {
    Analyzer::default().analyze(text)
}
