//! Aggregation of flattened events into classified notes and phases.
//!
//! This module transforms the ordered event sequence into:
//! - Per-event display notes (zone context, service calls)
//! - Phase segmentation with first/last boundaries
//! - The chronological service-call ledger

pub mod classifier;
pub mod phases;

// Re-export main types and functions
pub use classifier::{classify, collect_service_calls, ServiceCallRecord};
pub use phases::{segment_phases, Phase, PhaseCatalog, PhaseSpec};
