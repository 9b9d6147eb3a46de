use crate::utils::config::REPORT_VERSION;

/// Display report schema information
pub fn display_schema(show_details: bool) {
    println!("Structure Match Report Schema");
    println!("Current Version: {}", REPORT_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  report_version: string         - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string           - ISO 8601 timestamp");
        println!("  baseline: object               - Baseline source");
        println!("    source: string               - File path or '-' for stdin");
        println!("    root_kind: string            - object, array, string, number, boolean, null");
        println!("  target: object                 - Target source (same fields)");
        println!("  result: object                 - Comparison verdict");
        println!("    structureIsIdentical: bool   - Key sets, kinds and array lengths match");
        println!("    pathWhereStructureDiffers: string? - First divergence (when not identical)");
        println!("    propertiesChanged: array?    - Changed field names (when identical)");
        println!("  policy_violations: array       - Broken policy rules");
        println!("    rule: string                 - Rule identifier");
        println!("    detail: string               - What was observed");
        println!("    severity: string             - 'error' or 'warning'");
        println!("  summary: object                - PASSED / WARNING / FAILED");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Structure Match v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Order-insensitive structural comparison of JSON payloads.");
}
