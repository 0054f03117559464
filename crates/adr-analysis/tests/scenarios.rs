//! End-to-end scenarios over the shared fixtures

use adr_analysis::{analyze, Analyzer, AnalyzerConfig, MaturityAssessment, TopicStatus};
use adr_catalog::{MaturityLevel, Priority};
use adr_test_utils::{BOILERPLATE_ADR, COMPLETE_ADR, EMPTY_INPUTS, TITLE_ONLY_ADR};
use pretty_assertions::assert_eq;

#[test]
fn complete_record_scores_high() {
    let report = analyze(COMPLETE_ADR).unwrap();

    let structure = &report.phase_1_structural_analysis;
    assert!(structure.structure_quality_score >= 90.0);
    assert_eq!(structure.mandatory_sections_count, 5);
    assert!(structure.mandatory_sections_missing.is_empty());
    assert!(structure.optional_sections_found.contains(&"Alternatives".to_string()));
    assert!(structure.optional_sections_found.contains(&"Risks".to_string()));

    let MaturityAssessment {
        risk_assessment,
        alternative_analysis,
        ..
    } = report.phase_8_maturity;
    assert!(risk_assessment >= 70.0, "risk {risk_assessment}");
    assert!(alternative_analysis >= 70.0, "alternatives {alternative_analysis}");

    let compliance = &report.phase_9_compliance;
    assert!(compliance.present_topics_count >= 10);
    assert!(report.compliance_percentage >= 10.0 / 24.0 * 100.0 - 0.1);

    assert!(!report.phase_3_llm_detection.is_likely_ai_generated);
    assert!(report
        .phase_4_improvements
        .iter()
        .all(|s| s.category != "Missing Content"));
}

#[test]
fn title_only_record_is_initial() {
    let report = analyze(TITLE_ONLY_ADR).unwrap();

    let structure = &report.phase_1_structural_analysis;
    assert!(structure.has_title);
    assert_eq!(
        structure.mandatory_sections_missing,
        ["Status", "Context", "Decision", "Consequences"]
    );
    assert!(report.overall_quality_score < 20.0, "{}", report.overall_quality_score);
    assert_eq!(report.phase_8_maturity.maturity_level, MaturityLevel::Initial);

    let missing = report
        .phase_9_compliance
        .topics
        .iter()
        .filter(|t| t.status == TopicStatus::Missing)
        .count();
    assert!(missing >= 20);

    for section in &structure.mandatory_sections_missing {
        assert!(report
            .phase_4_improvements
            .iter()
            .any(|s| s.priority == Priority::High && s.description.contains(section.as_str())));
    }
}

#[test]
fn boilerplate_record_is_flagged() {
    let detection = analyze(BOILERPLATE_ADR).unwrap().phase_3_llm_detection;
    assert!(detection.is_likely_ai_generated);
    assert!(detection.confidence >= 70.0, "{}", detection.confidence);
    assert!(!detection.ai_indicators.is_empty());
    assert!(detection.analysis_text.contains("not proof of authorship"));
}

#[test]
fn threshold_comes_from_config() {
    let lenient = Analyzer::new(AnalyzerConfig::new().with_ai_confidence_threshold(99.0));
    let detection = lenient.analyze(BOILERPLATE_ADR).unwrap().phase_3_llm_detection;
    assert!(!detection.is_likely_ai_generated);
}

#[test]
fn empty_inputs_are_rejected() {
    for input in EMPTY_INPUTS {
        let err = analyze(input).unwrap_err();
        assert!(err.is_empty_document(), "{input:?}");
    }
}

#[test]
fn report_json_keeps_the_wire_shape() {
    let report = analyze(COMPLETE_ADR).unwrap().with_id("analysis_0000abcd");
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    for field in [
        "id",
        "phase_1_structural_analysis",
        "phase_2_quality_assessment",
        "phase_3_llm_detection",
        "phase_4_improvements",
        "phase_5_enterprise",
        "phase_6_design_patterns",
        "phase_7_technical_debt",
        "phase_8_maturity",
        "phase_9_compliance",
        "overall_quality_score",
        "overall_maturity_score",
        "compliance_percentage",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["phase_9_compliance"]["total_topics"], 24);
    let back: adr_analysis::AnalysisReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
