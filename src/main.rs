//! Jobharvest main entry point
//!
//! Command-line interface for the job-posting extraction pipeline.

use anyhow::Context;
use clap::Parser;
use jobharvest::config::{load_config, Config};
use jobharvest::locale::Locales;
use jobharvest::Harvester;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Jobharvest: a job-posting extraction pipeline
///
/// Fetches a job search results page, parses each listing into a normalized
/// record, and enriches records from their detail pages with a randomized
/// inter-request delay. Postings whose detail fetch fails stay in their
/// listed shape; the run still returns every posting.
#[derive(Parser, Debug)]
#[command(name = "jobharvest")]
#[command(version = "1.0.0")]
#[command(about = "A job-posting extraction pipeline", long_about = None)]
struct Cli {
    /// Search keyword (e.g. "backend engineer")
    #[arg(value_name = "KEYWORD")]
    keyword: String,

    /// Search location (e.g. "Madrid")
    #[arg(value_name = "LOCATION")]
    location: String,

    /// Language code for the target site locale (es, en)
    #[arg(short, long)]
    language: Option<String>,

    /// Path to optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the JSON result to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to defaults when no file is given
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => Config::default(),
    };

    let locales = Locales::load().context("loading locale dictionaries")?;

    let harvester = Harvester::new(config, locales).context("building harvester")?;

    let postings = harvester
        .run(&cli.keyword, &cli.location, cli.language.as_deref())
        .await
        .context("harvest run failed")?;

    let json = serde_json::to_string_pretty(&postings)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing output to {}", path.display()))?;
            tracing::info!("Wrote {} postings to {}", postings.len(), path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("jobharvest=info,warn"),
            1 => EnvFilter::new("jobharvest=debug,info"),
            2 => EnvFilter::new("jobharvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
