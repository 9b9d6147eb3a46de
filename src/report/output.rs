//! Terminal output rendering for comparison reports.

use super::schema::{CompareReport, Severity};
use crate::utils::config::{STATUS_FAILED, STATUS_WARNING, SUMMARY_PROPERTY_LIMIT};
use colored::*;

/// Render a human-readable summary of a report for the terminal
pub fn render_terminal_report(report: &CompareReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_verdict(report));
    out.push_str(&render_violations(report));
    out.push_str(&render_status(report));

    out
}

fn render_header(report: &CompareReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"Structure Comparison Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!(
        "Baseline: {} ({})\n",
        report.baseline.source, report.baseline.root_kind
    ));
    out.push_str(&format!(
        "Target:   {} ({})\n",
        report.target.source, report.target.root_kind
    ));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_verdict(report: &CompareReport) -> String {
    let result = &report.result;
    let mut out = String::new();

    if !result.structure_is_identical {
        let path = result.divergence().unwrap_or_default();
        let location = if path.is_empty() { "<root>" } else { path };
        out.push_str(&format!("Structure differs at: {}\n", location.yellow()));
        return out;
    }

    out.push_str("Structure is identical\n");

    let changed = result.changed_properties();
    if changed.is_empty() {
        out.push_str("No properties changed\n");
        return out;
    }

    out.push_str(&format!("Changed properties ({}):\n", changed.len()));
    for name in changed.iter().take(SUMMARY_PROPERTY_LIMIT) {
        let label = if name.is_empty() { "<root>" } else { name.as_str() };
        out.push_str(&format!("  ~ {}\n", label));
    }
    if changed.len() > SUMMARY_PROPERTY_LIMIT {
        out.push_str(&format!(
            "  ... and {} more\n",
            changed.len() - SUMMARY_PROPERTY_LIMIT
        ));
    }
    out
}

fn render_violations(report: &CompareReport) -> String {
    let mut out = String::new();
    if report.policy_violations.is_empty() {
        return out;
    }

    out.push_str("\nPolicy violations:\n");
    for violation in &report.policy_violations {
        let tag = match violation.severity {
            Severity::Error => "error".red(),
            Severity::Warning => "warning".yellow(),
        };
        out.push_str(&format!("  [{}] {}: {}\n", tag, violation.rule, violation.detail));
    }
    out
}

fn render_status(report: &CompareReport) -> String {
    let mut out = String::new();
    out.push_str("\n---------------------------------------------------\n");
    let status_msg = match report.summary.status.as_str() {
        STATUS_FAILED => format!("STATUS: FAILED ({} violations)", report.summary.violation_count)
            .red()
            .bold(),
        STATUS_WARNING => format!("STATUS: WARNING ({} violations)", report.summary.violation_count)
            .yellow()
            .bold(),
        _ => "STATUS: PASSED".green().bold(),
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    if let Some(warning) = &report.summary.warning {
        out.push_str(&format!("Note: {}\n", warning));
    }
    out
}
