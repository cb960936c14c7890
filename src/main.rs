//! tagaudit - audit an MP3 collection for filename/tag disagreements.
//!
//! Usage:
//!   tagaudit scan SOURCE...            Audit every MP3 under the roots
//!   tagaudit scan -p PATTERN SOURCE    Use a custom filename pattern
//!   tagaudit --help                    Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};

use tagaudit_core::{DEFAULT_PATTERN, ScanConfig};
use tagaudit_scan::{AuditReport, AuditScanner};

#[derive(Parser)]
#[command(
    name = "tagaudit",
    version,
    about = "Audit MP3 collections for filename/ID3 tag disagreements",
    long_about = "tagaudit derives one tag set from each file's name (via a pattern \
                  with named capture groups) and one from its embedded ID3 metadata, \
                  merges them with filename precedence, and reports every tag the two \
                  sources disagree on."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan source roots and report tag mismatches
    Scan {
        /// Root directories to scan
        #[arg(required = true)]
        source: Vec<PathBuf>,

        /// Pattern to extract tags from filenames
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// Cache folder to keep the tool's data
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Number of worker threads (0 = auto-detect)
        #[arg(short, long, default_value = "0")]
        threads: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            source,
            pattern,
            cache,
            threads,
            format,
        } => run_scan(source, pattern, cache, threads, format),
    }
}

/// Run an audit and display the report.
fn run_scan(
    source: Vec<PathBuf>,
    pattern: String,
    cache: Option<PathBuf>,
    threads: usize,
    format: OutputFormat,
) -> Result<()> {
    let mut builder = ScanConfig::builder();
    builder.roots(source).pattern(pattern).threads(threads);
    if let Some(cache) = cache {
        builder.cache_dir(Some(cache));
    }
    let config = builder.build().context("Invalid configuration")?;

    let live_output = matches!(format, OutputFormat::Text);
    if live_output {
        eprintln!("Scanning {} root(s)...", config.roots.len());
    }

    let report = AuditScanner::new()
        .with_live_output(live_output)
        .scan(&config)
        .context("Audit failed")?;

    match format {
        OutputFormat::Text => print_summary(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Print the post-run summary block.
fn print_summary(report: &AuditReport) {
    println!();
    println!("{}", "─".repeat(60));
    println!(
        " {} file(s) scanned in {:.2}s",
        report.files_scanned,
        report.scan_duration.as_secs_f64()
    );
    println!(
        " {} mismatch(es), {} file(s) failed",
        report.mismatch_count(),
        report.failures.len()
    );
    println!("{}", "─".repeat(60));
}
