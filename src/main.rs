//! Structure Match CLI
//!
//! Compares the structure of two JSON documents, ignoring array order and
//! primitive values, and reports where they diverge or which fields changed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use structure_match::commands::{
    display_schema, display_version, execute_canonicalize, execute_compare, validate_args,
    CanonicalizeArgs, CompareArgs,
};

/// Structure Match - order-insensitive structural comparison of JSON
#[derive(Parser, Debug)]
#[command(name = "structure-match")]
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
    /// Compare the structure of two JSON documents
    Compare {
        /// Baseline document ("-" for stdin)
        #[arg(short, long)]
        baseline: PathBuf,

        /// Target document ("-" for stdin)
        #[arg(short, long)]
        target: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Policy file (TOML) deciding which outcomes fail
        #[arg(short, long, env = "STRUCTURE_MATCH_POLICY")]
        policy: Option<PathBuf>,

        /// Fail when more than this many properties changed
        #[arg(long)]
        max_changed: Option<usize>,

        /// Skip the terminal summary
        #[arg(long)]
        no_summary: bool,
    },

    /// Print a document with every nested array deep-sorted
    Canonicalize {
        /// Document to canonicalize ("-" for stdin)
        #[arg(short, long)]
        file: PathBuf,

        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display report schema information
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
        Commands::Compare {
            baseline,
            target,
            output,
            policy,
            max_changed,
            no_summary,
        } => {
            let args = CompareArgs {
                baseline,
                target,
                output,
                policy_file: policy,
                max_changed,
                summary: !no_summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_compare(args)?;
        }

        Commands::Canonicalize { file, output } => {
            execute_canonicalize(CanonicalizeArgs {
                input: file,
                output,
            })?;
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
