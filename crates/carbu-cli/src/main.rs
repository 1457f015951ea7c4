mod report;

use anyhow::Context;
use carbu_aggregator::{FullScan, LowestPriceStrategy, Targeted};
use carbu_catalog::CatalogClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "carbu")]
#[command(about = "Cheapest fuel station per French region and fuel type")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Download every station record and compute minima locally.
    FullScan {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Ask the catalog for the cheapest station of each region and fuel type.
    Targeted {
        /// INSEE region code to query; repeat to query several. Defaults to
        /// the configured region list.
        #[arg(long = "region", value_name = "CODE")]
        regions: Vec<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = carbu_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = CatalogClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build catalog client")?;

    match cli.command {
        Commands::FullScan { format } => {
            let strategy = FullScan::new(
                &client,
                &config.fuel_types,
                config.page_size,
                config.inter_request_delay_ms,
            );
            run_strategy(&strategy, format).await
        }
        Commands::Targeted { regions, format } => {
            let region_codes = if regions.is_empty() {
                config.region_codes.clone()
            } else {
                regions
            };
            let strategy = Targeted::new(
                &client,
                &region_codes,
                &config.fuel_types,
                config.max_concurrent_regions,
            );
            run_strategy(&strategy, format).await
        }
    }
}

/// Runs `strategy` to completion and prints its report on stdout.
///
/// Nothing is printed when the strategy fails; the error is returned for
/// `main` to report.
async fn run_strategy<S: LowestPriceStrategy>(
    strategy: &S,
    format: OutputFormat,
) -> anyhow::Result<()> {
    tracing::info!(strategy = strategy.name(), "computing lowest fuel prices");

    let results = strategy
        .lowest_prices()
        .await
        .with_context(|| format!("{} run failed", strategy.name()))?;

    let rendered = report::render(&results, format)?;
    print!("{rendered}");
    Ok(())
}
