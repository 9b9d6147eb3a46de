use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Baseline document (`-` for stdin)
    pub baseline: PathBuf,

    /// Target document (`-` for stdin)
    pub target: PathBuf,

    /// Path to write the report JSON
    pub output: Option<PathBuf>,

    /// Policy file (TOML)
    pub policy_file: Option<PathBuf>,

    /// Overrides `properties.max_changed` from the policy
    pub max_changed: Option<usize>,

    /// Print a human-readable summary to the terminal
    pub summary: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            baseline: PathBuf::new(),
            target: PathBuf::new(),
            output: None,
            policy_file: None,
            max_changed: None,
            summary: true,
        }
    }
}

/// Arguments for the canonicalize command
#[derive(Debug, Clone, Default)]
pub struct CanonicalizeArgs {
    /// Document to canonicalize (`-` for stdin)
    pub input: PathBuf,

    /// Where to write the result; stdout when absent
    pub output: Option<PathBuf>,
}
