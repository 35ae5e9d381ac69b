//! Report rendering and output.
//!
//! This module handles:
//! - Adaptive duration formatting (shared by all sections)
//! - Rendering the plain-text timing report
//! - Persisting report text to disk

pub mod format;
pub mod report;
pub mod writer;

// Re-export main functions
pub use format::format_duration;
pub use report::render_report;
pub use writer::write_report;
