//! triage - fetch GitHub issues by number and bucket them by label.
//!
//! Usage: `triage <path-to-input-file> <auth-token>`
//!
//! Logs go to stderr (filter with `TRIAGE_LOG` or `RUST_LOG`); the report
//! goes to stdout.

mod cli;
mod report;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triage_config::Config;
use triage_github::{GitHubClient, IssueAggregator, RetryPolicy};

use crate::cli::Cli;

/// Environment variable holding the log filter, checked before `RUST_LOG`.
const LOG_ENV: &str = "TRIAGE_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Exits with usage before anything touches the network
    let cli = Cli::parse();

    run(cli).await
}

fn init_tracing() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    let identifiers = triage_protocol::read_identifiers(&cli.input)
        .with_context(|| format!("failed to read issue list from {}", cli.input.display()))?;

    let client = match config.api_url.as_deref() {
        Some(base_uri) => GitHubClient::with_base_uri(cli.token(), base_uri).await,
        None => GitHubClient::new(cli.token()).await,
    }
    .context("failed to create GitHub client")?
    .with_default_retry_after(Duration::from_secs(config.retry.default_retry_after_secs));

    info!(
        repository = %config.repository,
        issues = identifiers.len(),
        "aggregating issues"
    );

    let aggregator = IssueAggregator::new(
        client.repository(config.repository.owner(), config.repository.repo()),
        RetryPolicy::from(&config.retry),
    );
    let buckets = aggregator
        .aggregate(&identifiers)
        .await
        .context("failed to aggregate issues")?;

    report::write_report(&buckets, &mut std::io::stdout().lock())
}
