use crate::utils::config::{DEFAULT_ACTION_COUNT, REPORT_VERSION};

/// Display input schema information
pub fn display_schema(show_details: bool) {
    println!("Automation Trace Document Schema");
    println!("Report Version: {}", REPORT_VERSION);
    println!();

    if show_details {
        println!("Document Structure:");
        println!("  trace: object              - Top-level wrapper (required)");
        println!("    run_id: string           - Run identifier");
        println!("    trigger: any             - Trigger descriptor (string or object)");
        println!("    timestamp: object        - Run boundaries");
        println!("      start: string          - ISO 8601 start timestamp");
        println!("      finish: string         - ISO 8601 finish timestamp");
        println!("    trace: object            - Step lists keyed by path");
        println!("      <path>: array          - Ordered step records");
        println!("        timestamp: string?   - ISO 8601 step timestamp");
        println!("        changed_variables?   - Loop context (repeat.item.id)");
        println!("        result?.params?      - Service call (domain, service, target)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Trace Timing v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Format: v{}", REPORT_VERSION);
    println!("Default Action Phases: {}", DEFAULT_ACTION_COUNT);
    println!();
    println!("Timing analysis and bottleneck detection for automation traces.");
}
