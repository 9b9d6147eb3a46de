//! Compare command implementation.
//!
//! The compare command:
//! 1. Loads both documents
//! 2. Compares their structure
//! 3. Applies the policy
//! 4. Writes the report and prints the summary

use super::models::CompareArgs;
use crate::output::{read_value, write_report};
use crate::report::{
    check_policy, generate_report, load_policy, render_terminal_report, CompareReport,
    PolicyConfig,
};
use crate::utils::config::{STATUS_FAILED, STDIN_MARKER};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The finished report. Err when an input cannot be loaded, the report
/// cannot be written, or the policy verdict is FAILED.
pub fn execute_compare(args: CompareArgs) -> Result<CompareReport> {
    let start_time = Instant::now();

    info!(
        "Comparing {} against {}",
        args.target.display(),
        args.baseline.display()
    );

    // Step 1: Load documents
    let baseline = read_value(&args.baseline).context("Failed to read baseline document")?;
    let target = read_value(&args.target).context("Failed to read target document")?;

    // Step 2: Compare
    let mut report = generate_report(
        &baseline,
        &target,
        &args.baseline.display().to_string(),
        &args.target.display().to_string(),
    );

    debug!(
        "Structure identical: {}",
        report.result.structure_is_identical
    );

    // Step 3: Policy
    let mut policy = if let Some(path) = &args.policy_file {
        load_policy(path).context("Failed to load policy file")?
    } else {
        PolicyConfig::default()
    };

    if let Some(max_changed) = args.max_changed {
        policy.properties.max_changed = Some(max_changed);
    }

    check_policy(&mut report, &policy);

    // Step 4: Outputs
    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("Report written to: {}", path.display());
    }

    if args.summary {
        println!("{}", render_terminal_report(&report));
    }

    info!(
        "Comparison completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    if report.summary.status == STATUS_FAILED {
        anyhow::bail!(
            "Comparison failed with {} policy violation(s)",
            report.summary.violation_count
        );
    }

    Ok(report)
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    validate_input(&args.baseline, "Baseline")?;
    validate_input(&args.target, "Target")?;

    if is_stdin(&args.baseline) && is_stdin(&args.target) {
        anyhow::bail!("Baseline and target cannot both be read from stdin");
    }

    if let Some(path) = &args.policy_file {
        if !path.is_file() {
            anyhow::bail!("Policy file not found: {}", path.display());
        }
    }

    Ok(())
}

pub(crate) fn validate_input(path: &Path, label: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("{} path cannot be empty", label);
    }

    if !is_stdin(path) && !path.is_file() {
        anyhow::bail!("{} file not found: {}", label, path.display());
    }

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}
