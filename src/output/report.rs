//! Plain-text timing report renderer.
//!
//! Composes the analysis and its phases into the final report: header,
//! timeline, phase breakdown, inter-phase gaps, service-call timing,
//! footer. Section order is fixed; all durations go through
//! `format_duration`.

use super::format::format_duration;
use crate::aggregator::classifier::{classify, collect_service_calls};
use crate::aggregator::phases::Phase;
use crate::parser::automation_trace::Analysis;
use crate::parser::timestamp::seconds_between;
use crate::utils::config::{
    PHASE_GAP_BOTTLENECK_THRESHOLD, PHASE_GAP_REPORT_THRESHOLD, REPORT_WIDTH,
    TIMELINE_GAP_THRESHOLD, TIMELINE_SOFT_GAP_THRESHOLD,
};
use chrono::{DateTime, Utc};

/// Render the full timing report
///
/// **Public** - main entry point for report generation
pub fn render_report(analysis: &Analysis, phases: &[Phase]) -> String {
    let mut lines = Vec::new();

    render_header(&mut lines, analysis);
    render_timeline(&mut lines, analysis);
    render_phase_breakdown(&mut lines, analysis, phases);
    render_phase_gaps(&mut lines, phases);
    render_service_calls(&mut lines, analysis);

    lines.push(String::new());
    lines.push("=".repeat(REPORT_WIDTH));
    lines.push("END OF REPORT".to_string());
    lines.push("=".repeat(REPORT_WIDTH));

    lines.join("\n")
}

fn render_header(lines: &mut Vec<String>, analysis: &Analysis) {
    lines.push("=".repeat(REPORT_WIDTH));
    lines.push("AUTOMATION TRACE ANALYSIS REPORT".to_string());
    lines.push("=".repeat(REPORT_WIDTH));
    lines.push(String::new());
    lines.push(format!("Run ID:         {}", analysis.run_id));
    lines.push(format!("Trigger:        {}", analysis.trigger));
    lines.push(format!("Start:          {}", display_instant(analysis.start)));
    lines.push(format!("Finish:         {}", display_instant(analysis.finish)));
    lines.push(format!(
        "Total Duration: {}",
        format_duration(analysis.total_duration)
    ));
    lines.push(String::new());
}

fn display_instant(instant: Option<DateTime<Utc>>) -> String {
    match instant {
        Some(t) => t.to_rfc3339(),
        None => "unknown".to_string(),
    }
}

fn section_rule(lines: &mut Vec<String>, title: &str) {
    lines.push("-".repeat(REPORT_WIDTH));
    lines.push(title.to_string());
    lines.push("-".repeat(REPORT_WIDTH));
    lines.push(String::new());
}

/// Section 1: per-event timeline with elapsed time, deltas, and gap flags
fn render_timeline(lines: &mut Vec<String>, analysis: &Analysis) {
    section_rule(lines, "TIMELINE");
    lines.push(format!(
        "{:>12} | {:>10} | {:<40} | Notes",
        "Time", "Delta", "Path"
    ));
    lines.push(format!(
        "{} | {} | {} | {}",
        "-".repeat(12),
        "-".repeat(10),
        "-".repeat(40),
        "-".repeat(20)
    ));

    let Some(baseline) = analysis.baseline() else {
        return;
    };

    let mut prev_ts = baseline;
    for event in &analysis.events {
        let elapsed = seconds_between(baseline, event.timestamp);
        let delta = seconds_between(prev_ts, event.timestamp);

        let gap_marker = if delta > TIMELINE_GAP_THRESHOLD {
            format!(" ⚠️ GAP: {}", format_duration(delta))
        } else if delta > TIMELINE_SOFT_GAP_THRESHOLD {
            format!(" (gap: {})", format_duration(delta))
        } else {
            String::new()
        };

        let notes = classify(&event.step);
        lines.push(format!(
            "{:>10.3}s | {:>10} | {:<40} | {}{}",
            elapsed,
            format_duration(delta),
            event.path,
            notes,
            gap_marker
        ));

        prev_ts = event.timestamp;
    }
}

/// Section 2: per-phase duration and share of the total run
fn render_phase_breakdown(lines: &mut Vec<String>, analysis: &Analysis, phases: &[Phase]) {
    lines.push(String::new());
    section_rule(lines, "PHASE BREAKDOWN");

    let total = analysis.total_duration;
    for phase in phases {
        let (Some(start), Some(end)) = (phase.start, phase.end) else {
            continue;
        };
        let duration = seconds_between(start, end);
        let pct = if total > 0.0 {
            duration / total * 100.0
        } else {
            0.0
        };
        lines.push(format!(
            "{:<15} ({:<25}): {:>10} ({:>5.1}%) - {} events",
            phase.prefix,
            phase.name,
            format_duration(duration),
            pct,
            phase.event_count
        ));
    }
}

/// Section 3: gaps between adjacent action phases
fn render_phase_gaps(lines: &mut Vec<String>, phases: &[Phase]) {
    lines.push(String::new());
    section_rule(lines, "INTER-PHASE GAPS (Potential Bottlenecks)");

    let action_phases: Vec<&Phase> = phases.iter().filter(|p| p.is_action()).collect();
    for pair in action_phases.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let (Some(end), Some(start)) = (current.end, next.start) else {
            continue;
        };
        let gap = seconds_between(end, start);
        if gap > PHASE_GAP_REPORT_THRESHOLD {
            lines.push(format!(
                "Gap between {} and {}: {}",
                current.prefix,
                next.prefix,
                format_duration(gap)
            ));
            if gap > PHASE_GAP_BOTTLENECK_THRESHOLD {
                lines.push(format!(
                    "  ⚠️ BOTTLENECK DETECTED: {} delay",
                    format_duration(gap)
                ));
            }
        }
    }
}

/// Section 4: chronological ledger of service invocations
fn render_service_calls(lines: &mut Vec<String>, analysis: &Analysis) {
    lines.push(String::new());
    section_rule(lines, "SERVICE CALL TIMING");

    let calls = collect_service_calls(&analysis.events);
    let Some(baseline) = analysis.baseline() else {
        return;
    };
    let Some(first) = calls.first() else {
        return;
    };

    let mut prev_ts = first.timestamp;
    for call in &calls {
        let elapsed = seconds_between(baseline, call.timestamp);
        let delta = seconds_between(prev_ts, call.timestamp);
        lines.push(format!(
            "{:>8.3}s (+{:>8}): {:<45} → {}",
            elapsed,
            format_duration(delta),
            call.service,
            call.target
        ));
        prev_ts = call.timestamp;
    }
}
