use chrono::{TimeZone, Utc};
use pgx_advisor::config::ReportFormat;
use pgx_advisor::report::ClinicalReport;
use pgx_advisor::types::RecommendationLevel;
use pgx_advisor::ui::AppState;

#[test]
fn test_report_from_app_state() {
    let mut state = AppState::default();
    state.select("slco1b1_521", "CC").unwrap();
    state.select("tpmt_460", "GA").unwrap();

    let report = state.report();
    assert_eq!(report.recommendations, state.recommendations);
    assert_eq!(report.highest_level, Some(RecommendationLevel::Danger));
    assert_eq!(report.genotypes.get("slco1b1_521").map(String::as_str), Some("CC"));
    assert_eq!(report.genotypes.len(), 8);
}

#[test]
fn test_json_report_is_stable() {
    let state = AppState::default();
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let report = ClinicalReport::at(at, &state.genotypes, &state.recommendations);

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["generated_at"], "2024-01-02T03:04:05Z");
    assert_eq!(json["genotypes"]["mthfr_677"], "CC");
    assert!(json["recommendations"].as_array().unwrap().is_empty());
    assert!(json["highest_level"].is_null());
}

#[test]
fn test_save_text_report() {
    let mut state = AppState::default();
    state.select("cep72_rs924607", "TT").unwrap();

    let path = std::env::temp_dir().join(format!("pgx_advisor_report_{}.txt", std::process::id()));
    state.report().save(&path, ReportFormat::Text).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[High Risk] 长春新碱 (VCR)"));
    assert!(text.contains("cep72_rs924607"));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_save_to_missing_directory_fails() {
    let state = AppState::default();
    let result = state
        .report()
        .save("/nonexistent/dir/report.json", ReportFormat::Json);
    assert!(result.is_err());
}
