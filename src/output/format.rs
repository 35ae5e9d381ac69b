//! Human-readable duration formatting.
//!
//! Shared by every report section; all durations anywhere in the output
//! go through `format_duration` so the unit thresholds stay consistent.

/// Format a duration in seconds with adaptive units
///
/// **Public** - cross-cutting formatting utility
///
/// Units: microseconds below 1ms, milliseconds below 1s, seconds below
/// 60s, minutes otherwise. Exactly zero renders as "0s".
pub fn format_duration(seconds: f64) -> String {
    if seconds == 0.0 {
        "0s".to_string()
    } else if seconds < 0.001 {
        // Round half away from zero so 0.5µs reports as 1µs
        format!("{:.0}µs", (seconds * 1_000_000.0).round())
    } else if seconds < 1.0 {
        format!("{:.1}ms", seconds * 1_000.0)
    } else if seconds < 60.0 {
        format!("{:.2}s", seconds)
    } else {
        format!("{:.1}min", seconds / 60.0)
    }
}
