//! Property tests over arbitrary markdown-ish input

use adr_analysis::{analyze, AnalysisReport};
use adr_catalog::Priority;
use adr_catalog::sections::MANDATORY_SECTIONS;
use adr_test_utils::scenarios;
use proptest::prelude::*;

fn in_range(score: f64) -> bool {
    (0.0..=100.0).contains(&score)
}

fn scores(report: &AnalysisReport) -> Vec<f64> {
    let q = &report.phase_2_quality_assessment;
    let m = &report.phase_8_maturity;
    vec![
        report.phase_1_structural_analysis.structure_quality_score,
        q.completeness_score,
        q.clarity_score,
        q.traceability_score,
        q.consistency_score,
        q.justification_score,
        q.overall_quality_score,
        report.phase_3_llm_detection.confidence,
        m.documentation_quality,
        m.decision_rationale,
        m.risk_assessment,
        m.alternative_analysis,
        m.overall_maturity_score,
        report.phase_9_compliance.compliance_percentage,
    ]
}

/// Headings drawn from the catalog vocabulary mixed with noise
fn heading() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Status".to_string()),
        Just("Context".to_string()),
        Just("Decision".to_string()),
        Just("Consequences".to_string()),
        Just("Alternatives".to_string()),
        Just("Risks".to_string()),
        "[A-Za-z ]{1,20}",
    ]
}

fn adr_text() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9 ]{0,30}",
        prop::collection::vec((1usize..4, heading(), "[A-Za-z0-9 ,.:/#-]{0,200}"), 0..8),
    )
        .prop_map(|(title, sections)| {
            let mut out = format!("# {title}\n");
            for (level, name, body) in sections {
                out.push_str(&format!("{} {name}\n{body}\n\n", "#".repeat(level)));
            }
            out
        })
}

proptest! {
    #[test]
    fn scores_stay_in_range(text in adr_text()) {
        if let Ok(report) = analyze(&text) {
            for score in scores(&report) {
                prop_assert!(in_range(score), "{score} out of range");
            }
        }
    }

    #[test]
    fn mandatory_sections_are_partitioned(text in adr_text()) {
        if let Ok(report) = analyze(&text) {
            let s = &report.phase_1_structural_analysis;
            prop_assert_eq!(s.mandatory_sections_count + s.mandatory_sections_missing.len(), MANDATORY_SECTIONS.len());
            prop_assert_eq!(s.mandatory_sections_present.len(), s.mandatory_sections_count);
        }
    }

    #[test]
    fn full_structure_score_needs_every_mandatory_section(text in adr_text()) {
        if let Ok(report) = analyze(&text) {
            let s = &report.phase_1_structural_analysis;
            if (s.structure_quality_score - 100.0).abs() < f64::EPSILON {
                prop_assert!(s.mandatory_sections_missing.is_empty());
            }
        }
    }

    #[test]
    fn every_missing_section_gets_a_high_suggestion(text in adr_text()) {
        if let Ok(report) = analyze(&text) {
            for missing in &report.phase_1_structural_analysis.mandatory_sections_missing {
                let found = report.phase_4_improvements.iter().any(|s| {
                    s.priority == Priority::High && s.description.contains(missing.as_str())
                });
                prop_assert!(found, "no suggestion for {}", missing);
            }
        }
    }

    #[test]
    fn analysis_is_idempotent(text in adr_text()) {
        let first = analyze(&text).map(|r| r.to_json().unwrap_or_default());
        let second = analyze(&text).map(|r| r.to_json().unwrap_or_default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blank_input_is_always_rejected(text in "[ \t\r\n]{0,40}") {
        prop_assert!(analyze(&text).is_err());
    }

    #[test]
    fn visible_character_is_always_accepted(prefix in "[ \n]{0,10}", c in "[a-zA-Z0-9]") {
        let text = format!("{prefix}{c}");
        prop_assert!(analyze(&text).is_ok());
    }
}

#[test]
fn fixtures_are_in_range() {
    for (name, text) in scenarios() {
        let report = analyze(text).unwrap();
        assert!(scores(&report).into_iter().all(in_range), "{name}");
    }
}
