//! Georank CLI entrypoint.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;

use georank::CancelToken;
use georank::config::Config;
use georank::dataset::{Dataset, parse_csv, write_csv};
use georank::geocode::NominatimClient;
use georank::pipeline::Pipeline;
use georank::progress::{Phase, ProgressSink};
use georank::refine::OsrmClient;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Matches two CSV datasets of addresses by geographic proximity.
#[derive(Debug, Parser)]
#[command(name = "georank", version, about)]
struct Cli {
    /// CSV file of requester records.
    #[arg(long)]
    requesters: PathBuf,

    /// CSV file of provider records.
    #[arg(long)]
    providers: PathBuf,

    /// Address column of the requester file (header name or zero-based index).
    #[arg(long)]
    requester_column: String,

    /// Address column of the provider file (header name or zero-based index).
    #[arg(long)]
    provider_column: String,

    /// Refine the top-ranked pairs with route distances.
    #[arg(long)]
    refine: bool,

    /// Output CSV for the ranked pairs.
    #[arg(long, default_value = "matches.csv")]
    output: PathBuf,

    /// Output CSV for unresolved addresses.
    #[arg(long, default_value = "unresolved.csv")]
    errors: PathBuf,
}

/// Forwards phase transitions and per-record progress to tracing.
struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn phase(&mut self, phase: Phase) {
        tracing::info!(%phase, "phase");
    }

    fn record(&mut self, index: usize, total: usize, address: &str) {
        tracing::info!(row = index + 1, total, address, "resolving");
    }
}

fn load_dataset(path: &PathBuf) -> anyhow::Result<Dataset> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_csv(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    config.validate()?;

    let requesters = load_dataset(&cli.requesters)?;
    let providers = load_dataset(&cli.providers)?;
    let requester_column = requesters.column_index(&cli.requester_column)?;
    let provider_column = providers.column_index(&cli.provider_column)?;

    tracing::info!(
        requesters = requesters.len(),
        providers = providers.len(),
        refine = cli.refine,
        "georank starting"
    );

    let geocoder = NominatimClient::new(&config)?;
    let router = OsrmClient::new(&config)?;
    let pipeline = Pipeline::new(geocoder, router, &config);

    let cancel = CancelToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling run");
            ctrl_c_cancel.cancel();
        }
    });

    let outcome = pipeline
        .run(
            &requesters,
            requester_column,
            &providers,
            provider_column,
            cli.refine,
            &mut TracingProgress,
            &cancel,
        )
        .await?;

    let (headers, rows) = outcome.ranked_table(requesters.headers(), providers.headers(), cli.refine);
    std::fs::write(&cli.output, write_csv(&headers, &rows)?)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    let (error_headers, error_rows) = outcome.error_table();
    std::fs::write(&cli.errors, write_csv(&error_headers, &error_rows)?)
        .with_context(|| format!("failed to write {}", cli.errors.display()))?;

    tracing::info!(
        pairs = outcome.pairs.len(),
        unresolved = outcome.requester_errors.len() + outcome.provider_errors.len(),
        output = %cli.output.display(),
        "done"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_columns_must_be_given_explicitly() {
        let result = Cli::try_parse_from([
            "georank",
            "--requesters",
            "requesters.csv",
            "--providers",
            "providers.csv",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_full_invocation_parses() {
        let cli = Cli::try_parse_from([
            "georank",
            "--requesters",
            "requesters.csv",
            "--providers",
            "providers.csv",
            "--requester-column",
            "Addr",
            "--provider-column",
            "2",
            "--refine",
        ])
        .unwrap();

        assert_eq!(cli.requester_column, "Addr");
        assert_eq!(cli.provider_column, "2");
        assert!(cli.refine);
        assert_eq!(cli.output, PathBuf::from("matches.csv"));
    }
}
