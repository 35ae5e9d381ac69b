//! Phase segmentation: attribute events to logical stages by path prefix.
//!
//! A phase catalog is an ordered list of (prefix, display name) pairs
//! supplied by the caller; the action count varies by deployment, so the
//! conventional catalog takes it as a parameter rather than baking in a
//! constant.

use crate::parser::automation_trace::Event;
use chrono::{DateTime, Utc};
use log::debug;

/// One declared phase: path prefix plus display name
#[derive(Debug, Clone)]
pub struct PhaseSpec {
    pub prefix: String,
    pub name: String,
}

impl PhaseSpec {
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }

    /// Segment-aware prefix match: "action/3/sequence/1" belongs to
    /// "action/3", but "action/10" does not belong to "action/1".
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(&self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Ordered catalog of declared phases
#[derive(Debug, Clone)]
pub struct PhaseCatalog {
    specs: Vec<PhaseSpec>,
}

impl PhaseCatalog {
    /// Catalog from caller-supplied (prefix, name) pairs, in order
    pub fn new(specs: Vec<PhaseSpec>) -> Self {
        Self { specs }
    }

    /// The conventional automation layout: trigger, conditions, then
    /// `action/0`..`action/N-1`.
    pub fn automation(action_count: usize) -> Self {
        let mut specs = vec![
            PhaseSpec::new("trigger", "Trigger"),
            PhaseSpec::new("condition", "Conditions"),
        ];
        for i in 0..action_count {
            specs.push(PhaseSpec::new(format!("action/{}", i), format!("Action {}", i)));
        }
        Self::new(specs)
    }

    pub fn specs(&self) -> &[PhaseSpec] {
        &self.specs
    }

    /// First declared phase matching a path, if any
    fn phase_for(&self, path: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.matches(path))
    }
}

/// A computed phase: declared spec plus observed boundaries
#[derive(Debug, Clone)]
pub struct Phase {
    pub prefix: String,
    pub name: String,

    /// First-seen event timestamp; `None` when no events matched
    pub start: Option<DateTime<Utc>>,

    /// Last-seen event timestamp; `None` when no events matched
    pub end: Option<DateTime<Utc>>,

    pub event_count: usize,
}

impl Phase {
    /// Whether this phase participates in inter-phase gap analysis
    pub fn is_action(&self) -> bool {
        self.prefix.starts_with("action/") || self.prefix == "action"
    }
}

/// Partition an ordered event sequence into catalog phases
///
/// **Public** - main entry point for segmentation
///
/// Events matching no declared prefix are excluded from phase accounting
/// (they stay in the raw timeline). The result keeps catalog order and
/// includes empty phases, whose boundaries are absent.
pub fn segment_phases(events: &[Event], catalog: &PhaseCatalog) -> Vec<Phase> {
    let mut phases: Vec<Phase> = catalog
        .specs()
        .iter()
        .map(|spec| Phase {
            prefix: spec.prefix.clone(),
            name: spec.name.clone(),
            start: None,
            end: None,
            event_count: 0,
        })
        .collect();

    let mut unmatched = 0usize;
    for event in events {
        match catalog.phase_for(&event.path) {
            Some(idx) => {
                let phase = &mut phases[idx];
                if phase.start.is_none() {
                    phase.start = Some(event.timestamp);
                }
                phase.end = Some(event.timestamp);
                phase.event_count += 1;
            }
            None => unmatched += 1,
        }
    }
    if unmatched > 0 {
        debug!("{} events matched no declared phase", unmatched);
    }

    phases
}
