//! CLI entry point for the GTFS-Realtime probe.
//!
//! One invocation performs one fetch-evaluate-report cycle: fetch the
//! configured feed, count the entities passing the source filter, classify
//! the count against the thresholds, print one report line to stdout, and
//! exit with the code the monitoring supervisor maps to a severity.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use gtfs_rt_probe::cli::{Cli, ProbeConfig};
use gtfs_rt_probe::count::count_entities;
use gtfs_rt_probe::fetch::{BasicClient, fetch_bytes};
use gtfs_rt_probe::parser::parse_feed;
use gtfs_rt_probe::report::render_report;
use gtfs_rt_probe::status::Status;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code for probe faults (usage, fetch, decode), distinct from the
/// OK/WARNING/CRITICAL verdict codes.
const EXIT_FAULT: i32 = 3;

fn main() {
    dotenvy::dotenv().ok(); // Load .env file

    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            // Help is not an error report; it exits with its own
            // distinguished code without fetching anything.
            let _ = err.print();
            std::process::exit(-1);
        }
        Err(err) => {
            println!("{err}");
            std::process::exit(EXIT_FAULT);
        }
    };

    let config = ProbeConfig::from(cli);

    match run(&config) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            // The diagnostic chain goes to stdout, where the supervisor
            // captures it in place of the report line.
            println!("{err:?}");
            std::process::exit(EXIT_FAULT);
        }
    }
}

/// Logging setup: stderr only, so stdout stays a single report line.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one probe cycle and returns the feed health verdict.
fn run(config: &ProbeConfig) -> Result<Status> {
    let client = BasicClient::new();
    let bytes = fetch_bytes(&client, &config.url)?;
    let feed = parse_feed(&bytes).context("failed to decode feed message")?;

    let count = count_entities(&feed, config.source.as_deref());
    let status = Status::from_count(
        count as i64,
        config.critical_threshold,
        config.warning_threshold,
    );
    debug!(count, %status, "feed classified");

    println!("{}", render_report(status, count, feed.header.timestamp));
    Ok(status)
}
