//! Innerlens CLI - score daily records from the command line
//!
//! Commands:
//! - daily: Score all twelve themes for one day
//! - weekly: Build the aggregated weekly report
//!
//! Records are read from NDJSON files (one record per line) into an
//! in-memory store; this is tooling for inspecting scores, not a service.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use innerlens::{
    DailyCheckInRecord, DailyUsageRecord, FixedPromptSelector, MemoryStore, ScoringEngine,
    ALGORITHM_VERSION, ENGINE_VERSION,
};

/// Innerlens - behavioral theme scoring
#[derive(Parser)]
#[command(name = "innerlens")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score self-reported daily behavior into character themes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score all twelve themes for one day
    Daily {
        /// User the records belong to
        #[arg(long, default_value = "local")]
        user: String,

        /// Date to score (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// NDJSON file of daily usage records
        #[arg(long)]
        usage: Option<PathBuf>,

        /// NDJSON file of daily check-in records
        #[arg(long)]
        check_ins: Option<PathBuf>,
    },

    /// Build the weekly report for the week containing a date
    Weekly {
        /// User the records belong to
        #[arg(long, default_value = "local")]
        user: String,

        /// Any date inside the week to report on (YYYY-MM-DD)
        #[arg(long)]
        week_start: NaiveDate,

        /// NDJSON file of daily usage records
        #[arg(long)]
        usage: Option<PathBuf>,

        /// NDJSON file of daily check-in records
        #[arg(long)]
        check_ins: Option<PathBuf>,

        /// Fix prompt selection to a pool index for reproducible output
        #[arg(long)]
        prompt_index: Option<usize>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid record on line {line} of {path}: {source}")]
    Parse {
        path: String,
        line: usize,
        source: serde_json::Error,
    },

    #[error("scoring failed: {0}")]
    Score(#[from] innerlens::ScoreError),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Daily {
            user,
            date,
            usage,
            check_ins,
        } => {
            let store = load_store(&user, usage.as_deref(), check_ins.as_deref())?;
            let engine = ScoringEngine::new(store);
            let scores = engine.calculate_daily_scores(&user, date)?;
            print_json(&serde_json::json!({
                "algorithm_version": ALGORITHM_VERSION,
                "date": date,
                "scores": scores,
            }))
        }
        Commands::Weekly {
            user,
            week_start,
            usage,
            check_ins,
            prompt_index,
        } => {
            let store = load_store(&user, usage.as_deref(), check_ins.as_deref())?;
            let mut engine = ScoringEngine::new(store);
            if let Some(index) = prompt_index {
                engine = engine.with_prompt_selector(Box::new(FixedPromptSelector::new(index)));
            }
            let report = engine.calculate_weekly_report(&user, week_start)?;
            print_json(&serde_json::json!({
                "algorithm_version": ALGORITHM_VERSION,
                "report": report,
            }))
        }
    }
}

/// Load NDJSON record files into an in-memory store for one user.
fn load_store(
    user: &str,
    usage_path: Option<&std::path::Path>,
    check_in_path: Option<&std::path::Path>,
) -> Result<MemoryStore, CliError> {
    let mut store = MemoryStore::new();

    if let Some(path) = usage_path {
        for record in read_ndjson::<DailyUsageRecord>(path)? {
            store.insert_usage(user, record);
        }
    }

    if let Some(path) = check_in_path {
        for record in read_ndjson::<DailyCheckInRecord>(path)? {
            store.insert_check_in(user, record);
        }
    }

    Ok(store)
}

/// Parse an NDJSON file, one record per non-empty line.
fn read_ndjson<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<Vec<T>, CliError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: display.clone(),
        source,
    })?;

    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| CliError::Parse {
            path: display.clone(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Pretty-print on a terminal, compact otherwise.
fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let output = if atty::is(atty::Stream::Stdout) {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
