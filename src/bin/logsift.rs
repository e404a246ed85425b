//! logsift CLI
//!
//! Reads an access log, runs the record pipeline, writes the CSV and
//! optionally publishes it via git.

use std::fs;

use clap::Parser;
use logsift::output::save_csv;
use logsift::publish::{GitPublisher, Publisher};
use logsift::{Config, Pipeline, SiftError};
use tracing_subscriber::{fmt, EnvFilter};

/// logsift
#[derive(Parser, Debug)]
#[command(name = "logsift")]
#[command(about = "Extract, filter and sort nginx access-log records into CSV")]
#[command(version)]
struct Args {
    /// Access log to read
    #[arg(long, default_value = "nginx.log")]
    log: String,

    /// CSV file to write
    #[arg(short, long, default_value = "nginx_logs.csv")]
    output: String,

    /// Filter by HTTP status code (e.g. 200)
    #[arg(short, long)]
    filter: Option<String>,

    /// Sort by field (ip, date, method, url, status, size)
    #[arg(short, long)]
    sort: Option<String>,

    /// Stage, commit and push the CSV via git after writing it
    #[arg(long)]
    push: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,logsift=debug"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    // Build config from args
    let mut builder = Config::builder()
        .log_path(&args.log)
        .csv_path(&args.output)
        .push(args.push);
    if let Some(status) = &args.filter {
        builder = builder.status_filter(status);
    }
    if let Some(key) = &args.sort {
        builder = builder.sort_key(key);
    }
    let config = builder.build();

    if let Err(e) = run(&config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> logsift::Result<()> {
    tracing::info!("logsift v{}", logsift::VERSION);

    // Sort key is validated here, before any file is touched
    let pipeline = Pipeline::from_config(config)?;

    tracing::info!("Reading {}", config.log_path.display());
    let raw = fs::read_to_string(&config.log_path).map_err(|source| SiftError::Source {
        path: config.log_path.clone(),
        source,
    })?;

    let records = pipeline.run(&raw);

    tracing::info!(
        "Writing {} records to {}",
        records.len(),
        config.csv_path.display()
    );
    save_csv(&config.csv_path, &records)?;

    // A failed publish is reported but never fails the run
    if config.push {
        if let Err(e) = GitPublisher::new().publish(&config.csv_path) {
            tracing::error!("{}", e);
        }
    }

    Ok(())
}
