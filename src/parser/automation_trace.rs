//! Main trace parser and flattener for automation trace documents.
//!
//! Takes the raw JSON document the engine wrote, validates its shape,
//! and flattens the nested per-path step collections into a single
//! chronologically ordered event sequence.

use super::schema::{StepRecord, TraceFile};
use super::timestamp::{parse_timestamp, seconds_between};
use crate::utils::error::ParseError;
use chrono::{DateTime, Utc};
use log::{debug, warn};

/// One normalized, timestamped step
///
/// Invariant: every event holds a present, comparable timestamp. Steps
/// whose timestamp is absent or unparseable never become events.
#[derive(Debug, Clone)]
pub struct Event {
    /// Slash-separated path locating the step (e.g. "action/3/sequence/1")
    pub path: String,

    /// Normalized UTC instant
    pub timestamp: DateTime<Utc>,

    /// Raw step payload for downstream classification
    pub step: StepRecord,
}

/// Analysis result for one trace document (internal representation)
#[derive(Debug, Clone)]
pub struct Analysis {
    pub run_id: String,
    pub trigger: String,
    pub start: Option<DateTime<Utc>>,
    pub finish: Option<DateTime<Utc>>,
    /// Finish minus start in seconds; 0 when either boundary is missing
    pub total_duration: f64,
    /// Events sorted ascending by timestamp, ties in input order
    pub events: Vec<Event>,
}

impl Analysis {
    /// Baseline instant for elapsed-time columns
    ///
    /// Falls back to the first event when the document carries no start
    /// timestamp, so a degenerate document still renders a timeline.
    pub fn baseline(&self) -> Option<DateTime<Utc>> {
        self.start.or_else(|| self.events.first().map(|e| e.timestamp))
    }
}

/// Parse a raw JSON value into a validated trace document
///
/// **Public** - entry point for callers holding unparsed JSON
///
/// # Errors
/// * `ParseError::MissingTrace` - no top-level `trace` object
/// * `ParseError::JsonError` - wrapper present but not deserializable
pub fn parse_document(raw: &serde_json::Value) -> Result<TraceFile, ParseError> {
    if raw.get("trace").is_none() {
        return Err(ParseError::MissingTrace);
    }
    Ok(serde_json::from_value(raw.clone())?)
}

/// Analyze a trace document into an ordered event sequence
///
/// **Public** - main entry point for analysis
///
/// Flattens every (path, step) pair into an event when the step carries a
/// parseable timestamp, then sorts by timestamp. Steps without one are
/// dropped here and logged, never retained with a null timestamp.
pub fn analyze(document: &TraceFile) -> Analysis {
    let info = &document.trace;

    let start = parse_timestamp(info.timestamp.start.as_deref());
    let finish = parse_timestamp(info.timestamp.finish.as_deref());
    let run_id = info.run_id.clone().unwrap_or_else(|| "unknown".to_string());
    let trigger = describe_trigger(info.trigger.as_ref());

    let mut events = Vec::new();
    let mut dropped = 0usize;
    for (path, steps) in &info.trace {
        for step in steps {
            match parse_timestamp(step.timestamp.as_deref()) {
                Some(timestamp) => events.push(Event {
                    path: path.clone(),
                    timestamp,
                    step: step.clone(),
                }),
                None => dropped += 1,
            }
        }
    }
    if dropped > 0 {
        warn!("Dropped {} steps without a parseable timestamp", dropped);
    }

    // Stable sort: within-instant ties keep input order
    events.sort_by_key(|e| e.timestamp);

    debug!("Flattened {} events for run {}", events.len(), run_id);

    let total_duration = match (start, finish) {
        (Some(s), Some(f)) => seconds_between(s, f),
        _ => 0.0,
    };

    Analysis {
        run_id,
        trigger,
        start,
        finish,
        total_duration,
        events,
    }
}

/// Render the trigger descriptor as display text
///
/// **Private** - the engine writes either a plain string or an object
fn describe_trigger(trigger: Option<&serde_json::Value>) -> String {
    match trigger {
        None => "unknown".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
