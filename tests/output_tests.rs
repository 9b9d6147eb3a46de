use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use structure_match::output::{parse_value, read_value, validate_path, write_report};
use structure_match::report::{generate_report, CompareReport};
use structure_match::utils::InputError;
use tempfile::NamedTempFile;

fn create_test_report() -> CompareReport {
    generate_report(
        &json!({"id": 1, "tags": ["a"]}),
        &json!({"id": 2, "tags": ["b"]}),
        "baseline.json",
        "target.json",
    )
}

#[test]
fn test_write_report_json_layout() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();

    write_report(&report, temp_file.path()).unwrap();

    let written = read_value(temp_file.path()).unwrap();
    assert_eq!(written["report_version"], json!("1.0.0"));
    assert_eq!(written["baseline"], json!({"source": "baseline.json", "root_kind": "object"}));
    assert_eq!(
        written["result"],
        json!({"structureIsIdentical": true, "propertiesChanged": ["id"]})
    );
    assert_eq!(written["summary"]["status"], json!("PASSED"));
}

#[test]
fn test_report_round_trips_through_serde() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    write_report(&report, temp_file.path()).unwrap();

    let contents = std::fs::read_to_string(temp_file.path()).unwrap();
    let loaded: CompareReport = serde_json::from_str(&contents).unwrap();

    assert_eq!(loaded.result, report.result);
    assert_eq!(loaded.target.source, "target.json");
}

#[test]
fn test_parse_value_rejects_garbage() {
    assert!(matches!(parse_value("[1,"), Err(InputError::ParseFailed(_))));
    assert_eq!(parse_value(" [1] ").unwrap(), json!([1]));
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}
