//! The nine analysis phases

mod compliance;
mod debt;
mod enterprise;
mod improvements;
mod llm_detection;
mod maturity;
mod patterns;
pub(crate) mod quality;
mod structural;

pub use compliance::ComplianceChecker;
pub use debt::DebtDetector;
pub use enterprise::EnterpriseAdvisor;
pub use improvements::{ImprovementGenerator, ImprovementInput};
pub use llm_detection::LlmDetector;
pub use maturity::{MaturityAggregator, MaturityInput};
pub use patterns::PatternMatcher;
pub use quality::QualityScorer;
pub use structural::StructuralAnalyzer;
