//! Configuration and constants for the CLI.

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Path value that reads the document from stdin
pub const STDIN_MARKER: &str = "-";

/// Changed property names shown in the terminal summary before truncating
pub const SUMMARY_PROPERTY_LIMIT: usize = 10;

/// Status strings carried in report summaries
pub const STATUS_PASSED: &str = "PASSED";
pub const STATUS_WARNING: &str = "WARNING";
pub const STATUS_FAILED: &str = "FAILED";
