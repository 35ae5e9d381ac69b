//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Deserializing the engine's JSON trace documents
//! - Normalizing heterogeneous ISO-8601 timestamps
//! - Flattening nested step collections into an ordered event sequence

pub mod automation_trace;
pub mod schema;
pub mod timestamp;

// Re-export main types
pub use automation_trace::{analyze, parse_document, Analysis, Event};
pub use schema::{StepRecord, TraceDocument, TraceFile};
pub use timestamp::{parse_timestamp, seconds_between};
