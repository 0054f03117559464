//! Subcommands end to end, writing to a buffer

use adr_test_utils::{fixture_file, BOILERPLATE_ADR, COMPLETE_ADR, TITLE_ONLY_ADR};
use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["adr-analyzer"];
    argv.extend_from_slice(args);
    let matches = adr_cli::command().try_get_matches_from(argv)?;
    let mut out = Vec::new();
    adr_cli::run(&matches, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn analyze_as_json() {
    let file = fixture_file(COMPLETE_ADR, "md");
    let path = file.path().to_string_lossy().into_owned();
    let out = run(&["analyze", &path, "--format", "json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    let id = json["id"].as_str().unwrap();
    assert!(id.starts_with("analysis_"));
    assert_eq!(json["report"]["id"], id);
    assert_eq!(json["document_type"], "markdown");
    assert_eq!(json["report"]["phase_1_structural_analysis"]["mandatory_sections_count"], 5);
}

#[test]
fn analyze_as_text() {
    let file = fixture_file(TITLE_ONLY_ADR, "txt");
    let path = file.path().to_string_lossy().into_owned();
    let out = run(&["analyze", &path]).unwrap();
    assert!(out.contains("Phase 1: Structural Analysis"));
    assert!(out.contains("Phase 9: Standards Compliance"));
    assert!(out.contains("Add missing 'Status' section"));
    assert!(out.contains("(text)"));
}

#[test]
fn empty_file_fails() {
    let file = fixture_file("   \n", "md");
    let path = file.path().to_string_lossy().into_owned();
    let err = run(&["analyze", &path]).unwrap_err();
    assert!(format!("{err:#}").contains("document has no analyzable content"));
}

#[test]
fn pdf_is_rejected() {
    let file = fixture_file("%PDF-1.7", "pdf");
    let path = file.path().to_string_lossy().into_owned();
    assert!(run(&["analyze", &path]).is_err());
}

#[test]
fn config_overrides_thresholds() {
    let adr = fixture_file(BOILERPLATE_ADR, "md");
    let config = fixture_file("ai_confidence_threshold = 99.0\n", "toml");
    let out = run(&[
        "analyze",
        &adr.path().to_string_lossy(),
        "--format",
        "json",
        "--config",
        &config.path().to_string_lossy(),
    ])
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["report"]["phase_3_llm_detection"]["is_likely_ai_generated"], false);
}

#[test]
fn invalid_config_is_reported() {
    let adr = fixture_file(COMPLETE_ADR, "md");
    let config = fixture_file("quality_floor = 150.0\n", "toml");
    let err = run(&[
        "analyze",
        &adr.path().to_string_lossy(),
        "--config",
        &config.path().to_string_lossy(),
    ])
    .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invalid config"));
    assert!(message.contains("quality_floor must be within [0, 100]"));
}

#[test]
fn batch_keeps_order_and_reports_failures() {
    let a = fixture_file(COMPLETE_ADR, "md");
    let b = fixture_file("", "md");
    let c = fixture_file(TITLE_ONLY_ADR, "md");
    let paths: Vec<String> = [&a, &b, &c]
        .iter()
        .map(|f| f.path().to_string_lossy().into_owned())
        .collect();
    let out = run(&["batch", &paths[0], &paths[1], &paths[2]]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    for (entry, path) in entries.iter().zip(&paths) {
        assert_eq!(entry["file"], path.as_str());
    }
    assert!(entries[0]["analysis"]["id"].is_string());
    assert!(entries[1]["error"].is_string());
    assert!(entries[2]["analysis"].is_object());
}

#[test]
fn catalog_dump() {
    let out = run(&["catalog"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["version"], adr_catalog::CATALOG_VERSION);
    assert_eq!(json["compliance_topics"].as_array().unwrap().len(), 24);
}
