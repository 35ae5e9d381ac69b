//! Configuration and constants for the analyzer.

/// Current report format version
pub const REPORT_VERSION: &str = "1.0.0";

/// Number of top-level action phases in the conventional automation layout.
/// Deployments with a different action count pass their own value on the CLI.
pub const DEFAULT_ACTION_COUNT: usize = 5;

// Timeline delta thresholds (seconds)
pub const TIMELINE_GAP_THRESHOLD: f64 = 1.0;
pub const TIMELINE_SOFT_GAP_THRESHOLD: f64 = 0.5;

// Inter-phase gap thresholds (seconds)
// Gaps below REPORT threshold are noise; above BOTTLENECK they get flagged.
pub const PHASE_GAP_REPORT_THRESHOLD: f64 = 0.1;
pub const PHASE_GAP_BOTTLENECK_THRESHOLD: f64 = 1.0;

/// Width of report rule lines
pub const REPORT_WIDTH: usize = 80;
