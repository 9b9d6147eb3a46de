//! Builds comparison reports from two documents.

use chrono::Utc;
use serde_json::Value;

use super::schema::{CompareReport, ReportSummary, SourceMetadata};
use crate::structure::{compare_structures, NodeKind};
use crate::utils::config::{REPORT_VERSION, STATUS_FAILED, STATUS_PASSED};

/// Compare two documents and wrap the verdict in a report
///
/// The summary status is `PASSED` when the structure is identical and
/// `FAILED` otherwise; [`check_policy`](super::check_policy) refines it.
///
/// # Example
/// ```
/// use serde_json::json;
/// use structure_match::report::generate_report;
///
/// let baseline = json!({"id": 1, "tags": ["a", "b"]});
/// let target = json!({"id": 2, "tags": ["b", "a"]});
///
/// let report = generate_report(&baseline, &target, "baseline.json", "target.json");
/// assert_eq!(report.summary.status, "PASSED");
/// assert_eq!(report.result.changed_properties(), ["id"]);
/// assert_eq!(report.baseline.root_kind, "object");
/// ```
pub fn generate_report(
    baseline: &Value,
    target: &Value,
    baseline_source: &str,
    target_source: &str,
) -> CompareReport {
    let result = compare_structures(baseline, target);

    let status = if result.structure_is_identical {
        STATUS_PASSED
    } else {
        STATUS_FAILED
    };

    let mut summary = ReportSummary {
        status: status.to_string(),
        violation_count: 0,
        warning: None,
    };

    if baseline == target {
        summary.warning = Some("Baseline and target are identical".to_string());
    }

    CompareReport {
        report_version: REPORT_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        baseline: source_metadata(baseline, baseline_source),
        target: source_metadata(target, target_source),
        result,
        policy_violations: Vec::new(), // Populated by check_policy
        summary,
    }
}

fn source_metadata(value: &Value, source: &str) -> SourceMetadata {
    SourceMetadata {
        source: source.to_string(),
        root_kind: NodeKind::of(value).to_string(),
    }
}
