use anyhow::Result;
use clap::Args;
use worldbank_lib::{CachedClient, IndicatorQuery};

use crate::output::{print_json, print_points_csv, print_points_table, OutputFormat};

#[derive(Args)]
pub struct IndicatorArgs {
    /// Three-character country code (e.g. DEU)
    #[arg(long)]
    pub code: String,

    /// Indicator code (e.g. SP.POP.TOTL)
    #[arg(long)]
    pub indicator: String,

    /// Years of history to fetch
    #[arg(long, default_value = "10")]
    pub years: i64,
}

pub async fn run(args: &IndicatorArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let query = IndicatorQuery::new(&args.code, &args.indicator)
        .with_years(args.years)
        .validate()?;

    let points = client
        .indicator_series(&query.code, &query.indicator, query.years)
        .await?;

    eprintln!(
        "{} observations of {} for {}",
        points.len(),
        query.indicator,
        query.code
    );

    match format {
        OutputFormat::Table => print_points_table(&points),
        OutputFormat::Json => print_json(&points),
        OutputFormat::Csv => print_points_csv(&points)?,
    }

    Ok(())
}
