mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use worldbank_lib::cache::{MemoryCache, DEFAULT_TTL};
use worldbank_lib::CachedClient;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "worldbank")]
#[command(about = "Query country statistics from the World Bank open data API")]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List countries with optional search and paging
    Countries(commands::countries::CountriesArgs),
    /// Show merged population and GDP-per-capita history for one country
    Country(commands::country::CountryArgs),
    /// Fetch one indicator's raw series for a country
    Indicator(commands::indicator::IndicatorArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("worldbank_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let cache = MemoryCache::new(DEFAULT_TTL);
    let client = CachedClient::new(cache);

    match &cli.command {
        Commands::Countries(args) => commands::countries::run(args, &client, &format).await?,
        Commands::Country(args) => commands::country::run(args, &client, &format).await?,
        Commands::Indicator(args) => commands::indicator::run(args, &client, &format).await?,
    }

    Ok(())
}
