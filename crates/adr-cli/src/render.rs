//! Plain-text report rendering

use adr_analysis::{PhaseResult, TopicStatus};
use adr_store::StoredAnalysis;
use std::fmt::Write;

/// Human-readable report
#[must_use]
pub fn text(record: &StoredAnalysis) -> String {
    let report = &record.report;
    let mut out = String::new();
    let _ = writeln!(out, "ADR analysis {}", record.id);
    if let Some(name) = &record.provenance.file_name {
        let _ = writeln!(out, "File: {name} ({})", record.provenance.document_type.as_str());
    }
    let _ = writeln!(
        out,
        "Quality {:.1} | Maturity {:.1} ({}) | Compliance {:.1}%",
        report.overall_quality_score,
        report.overall_maturity_score,
        report.phase_8_maturity.maturity_level,
        report.compliance_percentage
    );

    for phase in report.phases() {
        let _ = writeln!(out, "\n{}\n  {}", phase.id(), phase.summary());
        details(&mut out, phase);
    }
    out
}

fn details(out: &mut String, phase: PhaseResult<'_>) {
    match phase {
        PhaseResult::Structural(_) => {}
        PhaseResult::Quality(q) => {
            for (name, score) in &q.quality_dimensions {
                let _ = writeln!(out, "  - {name}: {score:.1}");
            }
        }
        PhaseResult::LlmDetection(d) => {
            for indicator in &d.ai_indicators {
                let _ = writeln!(out, "  - {indicator}");
            }
            let _ = writeln!(out, "  {}", d.analysis_text);
        }
        PhaseResult::Improvements(items) => {
            for s in items {
                let _ = writeln!(out, "  [{}] {}: {}", s.priority.as_str(), s.category, s.description);
            }
        }
        PhaseResult::Enterprise(items) => {
            for g in items {
                let _ = writeln!(out, "  [{}] {}", g.priority.as_str(), g.category);
            }
        }
        PhaseResult::Patterns(items) => {
            for p in items {
                let _ = writeln!(out, "  - {} ({:?})", p.name, p.category);
            }
        }
        PhaseResult::TechnicalDebt(items) => {
            for d in items {
                let _ = writeln!(out, "  [{}] {:?}: {}", d.severity.as_str(), d.debt_type, d.description);
            }
        }
        PhaseResult::Maturity(m) => {
            for step in &m.improvement_pathway {
                let _ = writeln!(out, "  - {step}");
            }
        }
        PhaseResult::Compliance(c) => {
            let missing = c.topics.iter().filter(|t| t.status == TopicStatus::Missing);
            for topic in missing {
                let _ = writeln!(out, "  missing: {}", topic.topic_name);
            }
            if !c.priority_improvements.is_empty() {
                let _ = writeln!(out, "  priorities: {}", c.priority_improvements.join(", "));
            }
        }
    }
}
