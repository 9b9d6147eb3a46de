//! Comparison reports and pass/fail policies.
//!
//! Wraps a [`ComparisonResult`](crate::structure::ComparisonResult) with
//! source metadata, evaluates it against a policy, and renders a terminal
//! summary.
//!
//! # Example
//! ```ignore
//! use structure_match::report::{check_policy, generate_report, load_policy};
//! use structure_match::output::read_value;
//!
//! let baseline = read_value("baseline.json")?;
//! let target = read_value("target.json")?;
//! let mut report = generate_report(&baseline, &target, "baseline.json", "target.json");
//!
//! let policy = load_policy("policy.toml")?;
//! check_policy(&mut report, &policy);
//! ```

mod engine;
mod output;
mod policy;
mod schema;

// Public API exports
pub use engine::generate_report;
pub use output::render_terminal_report;
pub use policy::{
    check_policy, load_policy, validate_policy, PolicyConfig, PropertyPolicy, StructurePolicy,
};
pub use schema::{CompareReport, PolicyViolation, ReportSummary, Severity, SourceMetadata};

// Error type
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid policy configuration: {0}")]
    InvalidPolicy(String),

    #[error("Policy TOML parse error: {0}")]
    PolicyParseFailed(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
