use anyhow::Result;
use clap::Args;
use worldbank_lib::{catalog, CachedClient, CatalogQuery};

use crate::output::{print_countries_csv, print_countries_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CountriesArgs {
    /// Case-insensitive search across country name, ID, and ISO2 code
    #[arg(long)]
    pub search: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub per_page: i64,
}

pub async fn run(args: &CountriesArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut query = CatalogQuery::default()
        .with_page(args.page)
        .with_per_page(args.per_page);

    if let Some(ref search) = args.search {
        query = query.with_search(search);
    }
    let query = query.validate()?;

    let page = catalog::list_countries(client, &query).await?;

    eprintln!("{} countries matched, page {}", page.total, query.page);

    match format {
        OutputFormat::Table => print_countries_table(&page.data),
        OutputFormat::Json => print_json(&page.data),
        OutputFormat::Csv => print_countries_csv(&page.data)?,
    }

    Ok(())
}
