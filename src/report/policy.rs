//! Policy configuration and violation detection.
//!
//! Loads pass/fail policies from TOML and checks comparison reports
//! against them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::schema::{CompareReport, PolicyViolation, ReportSummary, Severity};
use super::ReportError;
use crate::utils::config::{STATUS_FAILED, STATUS_PASSED, STATUS_WARNING};

/// Complete policy configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// Structure rules
    #[serde(default)]
    pub structure: StructurePolicy,

    /// Changed-property rules
    #[serde(default)]
    pub properties: PropertyPolicy,
}

/// Structure-related rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StructurePolicy {
    /// Fail when the structures diverge
    #[serde(default = "default_require_identical")]
    pub require_identical: bool,
}

impl Default for StructurePolicy {
    fn default() -> Self {
        Self {
            require_identical: default_require_identical(),
        }
    }
}

fn default_require_identical() -> bool {
    true
}

/// Rules on which properties may change
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PropertyPolicy {
    /// Maximum number of distinct changed properties
    pub max_changed: Option<usize>,

    /// Properties that must not change
    #[serde(default)]
    pub protected: Vec<String>,

    /// Properties whose change is reported as a warning
    #[serde(default)]
    pub watched: Vec<String>,
}

/// Load a policy from a TOML file
///
/// # Errors
/// * `ReportError::IoError` - If file cannot be read
/// * `ReportError::PolicyParseFailed` - If TOML is invalid
/// * `ReportError::InvalidPolicy` - If the rules contradict each other
///
/// # Example
/// ```ignore
/// let policy = load_policy("policy.toml")?;
/// ```
pub fn load_policy(path: impl AsRef<Path>) -> Result<PolicyConfig, ReportError> {
    let contents = fs::read_to_string(path)?;
    let config: PolicyConfig = toml::from_str(&contents)?;
    validate_policy(&config)?;
    Ok(config)
}

/// Reject policies that list a property as both protected and watched
pub fn validate_policy(config: &PolicyConfig) -> Result<(), ReportError> {
    let properties = &config.properties;
    if let Some(name) = properties
        .protected
        .iter()
        .find(|name| properties.watched.contains(name))
    {
        return Err(ReportError::InvalidPolicy(format!(
            "'{}' is both protected and watched",
            name
        )));
    }
    Ok(())
}

/// Check a report against a policy and update its violations and summary
///
/// # Returns
/// Vector of violations (also stored in `report.policy_violations`)
///
/// # Example
/// ```
/// use serde_json::json;
/// use structure_match::report::{check_policy, generate_report, PolicyConfig};
///
/// let mut report = generate_report(&json!({"id": 1}), &json!({"id": 2}), "a.json", "b.json");
/// let mut policy = PolicyConfig::default();
/// policy.properties.protected.push("id".to_string());
///
/// let violations = check_policy(&mut report, &policy);
/// assert_eq!(violations[0].rule, "properties.protected");
/// assert_eq!(report.summary.status, "FAILED");
/// ```
pub fn check_policy(report: &mut CompareReport, config: &PolicyConfig) -> Vec<PolicyViolation> {
    let mut violations = Vec::new();

    check_structure_policy(report, &config.structure, &mut violations);
    check_property_policy(report.result.changed_properties(), &config.properties, &mut violations);

    report.policy_violations = violations.clone();
    let warning = report.summary.warning.take();
    report.summary = create_summary(&violations);
    report.summary.warning = warning;

    violations
}

fn check_structure_policy(
    report: &CompareReport,
    policy: &StructurePolicy,
    violations: &mut Vec<PolicyViolation>,
) {
    if !policy.require_identical || report.result.structure_is_identical {
        return;
    }

    let path = report.result.divergence().unwrap_or_default();
    let location = if path.is_empty() { "<root>" } else { path };

    violations.push(PolicyViolation {
        rule: "structure.require_identical".to_string(),
        detail: format!("structure differs at {}", location),
        severity: Severity::Error,
    });
}

fn check_property_policy(
    changed: &[String],
    policy: &PropertyPolicy,
    violations: &mut Vec<PolicyViolation>,
) {
    if let Some(max_changed) = policy.max_changed {
        if changed.len() > max_changed {
            violations.push(PolicyViolation {
                rule: "properties.max_changed".to_string(),
                detail: format!("{} properties changed (max {})", changed.len(), max_changed),
                severity: Severity::Error,
            });
        }
    }

    for name in changed {
        if policy.protected.contains(name) {
            violations.push(PolicyViolation {
                rule: "properties.protected".to_string(),
                detail: format!("protected property '{}' changed", name),
                severity: Severity::Error,
            });
        } else if policy.watched.contains(name) {
            violations.push(PolicyViolation {
                rule: "properties.watched".to_string(),
                detail: format!("watched property '{}' changed", name),
                severity: Severity::Warning,
            });
        }
    }
}

/// Create summary based on violations
fn create_summary(violations: &[PolicyViolation]) -> ReportSummary {
    let error_count = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    let warning_count = violations.len() - error_count;

    let status = if error_count > 0 {
        STATUS_FAILED
    } else if warning_count > 0 {
        STATUS_WARNING
    } else {
        STATUS_PASSED
    };

    ReportSummary {
        status: status.to_string(),
        violation_count: violations.len(),
        warning: None,
    }
}
