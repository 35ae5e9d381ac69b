//! Trace Timing
//!
//! Timing analysis and bottleneck detection for automation engine
//! execution traces.
//!
//! This crate provides the core implementation for the
//! `trace-timing` CLI tool: it flattens a nested trace document into a
//! chronologically ordered event sequence, segments it into phases, and
//! renders a plain-text timing report with gap and bottleneck detection.
//!
//! ## Getting Started
//!
//! Most users should use the CLI:
//!
//! ```bash
//! trace-timing analyze --input 'logs/*.json'
//! ```

pub mod aggregator;
pub mod commands;
pub mod loader;
pub mod output;
pub mod parser;
pub mod utils;
