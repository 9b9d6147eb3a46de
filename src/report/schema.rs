//! Schema definitions for comparison reports.

use serde::{Deserialize, Serialize};

use crate::structure::ComparisonResult;

/// Complete report for one baseline/target comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareReport {
    /// Schema version for the report format
    pub report_version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Where the baseline document came from
    pub baseline: SourceMetadata,

    /// Where the target document came from
    pub target: SourceMetadata,

    /// Structural comparison verdict
    pub result: ComparisonResult,

    /// Policy rules the result broke (if any)
    #[serde(default)]
    pub policy_violations: Vec<PolicyViolation>,

    /// Summary of the report
    pub summary: ReportSummary,
}

/// Metadata about one compared document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceMetadata {
    /// File path or `-` for stdin
    pub source: String,

    /// Kind of the document root (`object`, `array`, ...)
    pub root_kind: String,
}

/// A single broken policy rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyViolation {
    /// Rule identifier, e.g. `properties.protected`
    pub rule: String,

    /// What was observed
    pub detail: String,

    pub severity: Severity,
}

/// Severity of a policy violation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported but does not fail the run
    Warning,
    /// Fails the run
    Error,
}

/// Summary of report results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Overall status: "PASSED", "WARNING", "FAILED"
    pub status: String,

    /// Number of policy violations
    pub violation_count: usize,

    /// Optional warning message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
