//! Trace Timing CLI
//!
//! Timing analysis for automation engine execution traces.
//! Produces a timeline, phase breakdown, inter-phase gap detection,
//! and a service-call timing ledger.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use trace_timing::commands::{
    display_schema, display_version, execute_analyze, validate_args, AnalyzeArgs,
};
use trace_timing::utils::config::DEFAULT_ACTION_COUNT;

/// Trace Timing - timing analysis for automation traces
#[derive(Parser, Debug)]
#[command(name = "trace-timing")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a trace file and produce a timing report
    Analyze {
        /// Trace file path or glob pattern (picks the most recent match)
        #[arg(short, long)]
        input: String,

        /// Output path for the report text (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of top-level action phases in this deployment
        #[arg(long, default_value_t = DEFAULT_ACTION_COUNT)]
        actions: usize,
    },

    /// Display trace document schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            input,
            output,
            actions,
        } => {
            let args = AnalyzeArgs {
                input,
                output,
                action_count: actions,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute analysis
            execute_analyze(args)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
