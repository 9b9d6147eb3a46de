use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::{Path, PathBuf};
use structure_match::commands::{
    execute_canonicalize, execute_compare, validate_args, CanonicalizeArgs, CompareArgs,
};
use structure_match::output::read_value;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn compare_args(baseline: PathBuf, target: PathBuf) -> CompareArgs {
    CompareArgs {
        baseline,
        target,
        summary: false,
        ..Default::default()
    }
}

#[test]
fn test_compare_matching_documents() {
    let dir = TempDir::new().unwrap();
    let baseline = write_file(dir.path(), "a.json", r#"{"id": 1, "tags": ["x", "y"]}"#);
    let target = write_file(dir.path(), "b.json", r#"{"id": 2, "tags": ["y", "x"]}"#);

    let args = compare_args(baseline, target);
    validate_args(&args).unwrap();
    let report = execute_compare(args).unwrap();

    assert_eq!(report.summary.status, "PASSED");
    assert_eq!(report.result.changed_properties(), ["id"]);
}

#[test]
fn test_compare_diverging_documents_fails() {
    let dir = TempDir::new().unwrap();
    let baseline = write_file(dir.path(), "a.json", r#"{"id": 1}"#);
    let target = write_file(dir.path(), "b.json", r#"{"id": "1"}"#);

    let result = execute_compare(compare_args(baseline, target));

    assert!(result.is_err());
}

#[test]
fn test_compare_writes_report_before_failing() {
    let dir = TempDir::new().unwrap();
    let baseline = write_file(dir.path(), "a.json", r#"[1, 2]"#);
    let target = write_file(dir.path(), "b.json", r#"[1]"#);
    let output = dir.path().join("out/report.json");

    let args = CompareArgs {
        output: Some(output.clone()),
        ..compare_args(baseline, target)
    };
    assert!(execute_compare(args).is_err());

    let written = read_value(&output).unwrap();
    assert_eq!(
        written["result"],
        json!({"structureIsIdentical": false, "pathWhereStructureDiffers": ""})
    );
    assert_eq!(written["summary"]["status"], json!("FAILED"));
}

#[test]
fn test_compare_with_policy_file() {
    let dir = TempDir::new().unwrap();
    let baseline = write_file(dir.path(), "a.json", r#"{"id": 1, "seen": "mon"}"#);
    let target = write_file(dir.path(), "b.json", r#"{"id": 1, "seen": "tue"}"#);
    let policy = write_file(
        dir.path(),
        "policy.toml",
        "[properties]\nwatched = [\"seen\"]\n",
    );

    let args = CompareArgs {
        policy_file: Some(policy),
        ..compare_args(baseline, target)
    };
    let report = execute_compare(args).unwrap();

    assert_eq!(report.summary.status, "WARNING");
    assert_eq!(report.policy_violations.len(), 1);
}

#[test]
fn test_compare_max_changed_override() {
    let dir = TempDir::new().unwrap();
    let baseline = write_file(dir.path(), "a.json", r#"{"a": 1, "b": 1}"#);
    let target = write_file(dir.path(), "b.json", r#"{"a": 2, "b": 2}"#);

    let args = CompareArgs {
        max_changed: Some(1),
        ..compare_args(baseline, target)
    };

    assert!(execute_compare(args).is_err());
}

#[test]
fn test_compare_rejects_invalid_policy() {
    let dir = TempDir::new().unwrap();
    let baseline = write_file(dir.path(), "a.json", "{}");
    let target = write_file(dir.path(), "b.json", "{}");
    let policy = write_file(
        dir.path(),
        "policy.toml",
        "[properties]\nprotected = [\"id\"]\nwatched = [\"id\"]\n",
    );

    let args = CompareArgs {
        policy_file: Some(policy),
        ..compare_args(baseline, target)
    };

    assert!(execute_compare(args).is_err());
}

#[test]
fn test_compare_invalid_json_input() {
    let dir = TempDir::new().unwrap();
    let baseline = write_file(dir.path(), "a.json", "{");
    let target = write_file(dir.path(), "b.json", "{}");

    assert!(execute_compare(compare_args(baseline, target)).is_err());
}

#[test]
fn test_canonicalize_writes_sorted_document() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "in.json", r#"{"xs": [3, 1, 2], "ys": [["b", "a"]]}"#);
    let output = dir.path().join("canonical.json");

    let canonical = execute_canonicalize(CanonicalizeArgs {
        input,
        output: Some(output.clone()),
    })
    .unwrap();

    let expected = json!({"xs": [1, 2, 3], "ys": [["a", "b"]]});
    assert_eq!(canonical, expected);
    assert_eq!(read_value(&output).unwrap(), expected);
}

#[test]
fn test_canonicalize_missing_input() {
    let result = execute_canonicalize(CanonicalizeArgs {
        input: PathBuf::from("/definitely/not/here.json"),
        output: None,
    });
    assert!(result.is_err());
}
