//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Resolves the input path or glob
//! 2. Loads and validates the trace document
//! 3. Flattens it into an ordered event sequence
//! 4. Segments events into phases
//! 5. Renders the timing report
//! 6. Writes it to a file or prints it to stdout

use crate::aggregator::{segment_phases, PhaseCatalog};
use crate::loader::{load_document, resolve_input};
use crate::output::{render_report, write_report};
use crate::parser::analyze;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Trace file path or glob pattern
    pub input: String,

    /// Output path for the report; None prints to stdout
    pub output: Option<PathBuf>,

    /// Number of top-level action phases in this deployment
    pub action_count: usize,
}

/// Validate analyze arguments before doing any work
///
/// **Public** - called from main.rs
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.trim().is_empty() {
        bail!("Input path or pattern must not be empty");
    }
    if args.action_count == 0 {
        bail!("Action phase count must be at least 1");
    }
    Ok(())
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input resolution or read failures
/// * Structurally invalid trace documents
/// * Report write failures
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    info!("Step 1/4: Resolving input: {}", args.input);
    let path = resolve_input(&args.input).context("Failed to resolve input")?;

    info!("Step 2/4: Loading trace document...");
    let document = load_document(&path)
        .with_context(|| format!("Failed to load trace file {}", path.display()))?;

    info!("Step 3/4: Analyzing trace...");
    let analysis = analyze(&document);
    debug!(
        "Run {}: {} events, total duration {:.3}s",
        analysis.run_id,
        analysis.events.len(),
        analysis.total_duration
    );

    let catalog = PhaseCatalog::automation(args.action_count);
    let phases = segment_phases(&analysis.events, &catalog);

    info!("Step 4/4: Rendering report...");
    let report = render_report(&analysis, &phases);

    match &args.output {
        Some(output_path) => {
            write_report(&report, output_path).context("Failed to write report")?;
            println!("Report written to: {}", output_path.display());
        }
        None => println!("{}", report),
    }

    Ok(())
}
