//! bloom-check: membership check of one CSV column against another
//!
//! ```text
//! bloom-check members.csv queries.csv
//! a@example.com,Probably in the DB
//! z@example.com,Not in the DB
//! ```
//!
//! Verdicts go to stdout; logs go to stderr.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bloom_check::{run, CsvColumnSource, LineSink, DEFAULT_HEADERS};
use bloom_filter::domain::DEFAULT_FALSE_POSITIVE_RATE;
use bloom_filter::Metrics;

/// Check which items of CHECK_DB are probably present in INPUT_DB
#[derive(Parser, Debug)]
#[command(name = "bloom-check")]
#[command(about = "Bloom filter membership check between two CSV files")]
struct Args {
    /// CSV file whose items populate the filter
    input_db: PathBuf,

    /// CSV file whose items are checked against the filter
    check_db: PathBuf,

    /// Target false positive rate, strictly between 0 and 1
    #[arg(long, default_value_t = DEFAULT_FALSE_POSITIVE_RATE)]
    fpr: f64,

    /// Zero-based column holding the items
    #[arg(short, long, default_value_t = 0)]
    column: usize,

    /// Header value to skip (repeatable; defaults to Email, E-mail, email, e-mail)
    #[arg(long = "header", value_name = "NAME")]
    headers: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn open_source(args: &Args, path: &Path) -> Result<CsvColumnSource<File>> {
    let headers: Vec<String> = if args.headers.is_empty() {
        DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect()
    } else {
        args.headers.clone()
    };

    let source = CsvColumnSource::open(path)?
        .with_column(args.column)
        .with_headers(headers);
    Ok(source)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut build_source = open_source(&args, &args.input_db)?;
    let mut check_source = open_source(&args, &args.check_db)?;
    let mut sink = LineSink::new(BufWriter::new(io::stdout().lock()));
    let metrics = Metrics::new();

    let summary = run(
        &mut build_source,
        &mut check_source,
        &mut sink,
        args.fpr,
        &metrics,
    )
    .with_context(|| {
        format!(
            "Failed to check {} against {}",
            args.check_db.display(),
            args.input_db.display()
        )
    })?;

    let snapshot = metrics.snapshot();
    info!(
        items_added = summary.items_added,
        items_checked = summary.items_checked,
        probably_present = summary.probably_present,
        size_bits = summary.size_bits,
        hash_count = summary.hash_count,
        avg_insert_ns = snapshot.avg_insert_ns,
        avg_lookup_ns = snapshot.avg_lookup_ns,
        positive_rate = snapshot.positive_rate(),
        "Done"
    );

    Ok(())
}
