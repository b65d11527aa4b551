//! Puntuar CLI - benchmark scoring and suite validation
//!
//! # Commands
//!
//! - `score`    - Score a run-input file and emit the report JSON
//! - `validate` - Check a run-input file against the active profile
//! - `info`     - Show version info

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use puntuar::cli::{run_score, run_validate};
use puntuar::error::Result;

/// Puntuar - GPU compute benchmark scoring engine
///
/// Turns raw per-frame execution times captured by the benchmark harness
/// into per-test scores, category scores, an overall score, and a suite
/// validity verdict.
#[derive(Parser)]
#[command(name = "puntuar")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a run-input file and emit the report
    ///
    /// Examples:
    ///   puntuar score run.json
    ///   puntuar score run.json --output report.json --pretty
    Score {
        /// Run-input file (JSON) produced by the benchmark harness
        #[arg(value_name = "RUN_FILE")]
        input: PathBuf,

        /// Output file for the report JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the report JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// Validate suite completeness for a run-input file
    ///
    /// Exits non-zero when the suite is invalid, for use in CI pipelines.
    ///
    /// Examples:
    ///   puntuar validate run.json
    Validate {
        /// Run-input file (JSON) produced by the benchmark harness
        #[arg(value_name = "RUN_FILE")]
        input: PathBuf,
    },
    /// Show version info
    Info,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Score {
            input,
            output,
            pretty,
        } => {
            run_score(&input, output.as_deref(), pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { input } => {
            let valid = run_validate(&input)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Info => {
            println!("puntuar {}", puntuar::VERSION);
            Ok(ExitCode::SUCCESS)
        }
    }
}
