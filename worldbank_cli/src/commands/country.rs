use anyhow::Result;
use clap::Args;
use worldbank_lib::validation;
use worldbank_lib::{series, CachedClient, WorldBankError};

use crate::output::{print_json, print_merged_csv, print_merged_table, OutputFormat};

#[derive(Args)]
pub struct CountryArgs {
    /// Three-character country code (e.g. DEU)
    pub code: String,

    /// Years of history to fetch
    #[arg(long, default_value = "10")]
    pub years: i64,
}

pub async fn run(args: &CountryArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let code = validation::validate_country_code(&args.code)?;
    let years = validation::validate_years(args.years)?;

    let merged = match series::merged_series(client, &code, years).await {
        Ok(merged) => merged,
        // Confirmed absence of data is an answer, not a failure.
        Err(WorldBankError::NoData(code)) => {
            eprintln!("No data found for country '{}'", code);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    eprintln!("{}, last {} years", merged.display_name, years);

    match format {
        OutputFormat::Table => print_merged_table(&merged.data),
        OutputFormat::Json => print_json(&merged),
        OutputFormat::Csv => print_merged_csv(&merged.data)?,
    }

    Ok(())
}
