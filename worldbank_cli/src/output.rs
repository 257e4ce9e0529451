use anyhow::Result;
use serde::Serialize;
use tabled::{Table, Tabled};
use worldbank_lib::series::MergedYearRecord;
use worldbank_lib::types::{Country, SeriesPoint};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct CountryRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "ISO2")]
    #[serde(rename = "ISO2")]
    iso2: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Income Level")]
    #[serde(rename = "Income Level")]
    income_level: String,
}

#[derive(Tabled, Serialize)]
struct YearRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Population")]
    #[serde(rename = "Population")]
    population: String,
    #[tabled(rename = "GDP per Capita")]
    #[serde(rename = "GDP per Capita")]
    gdp: String,
}

#[derive(Tabled, Serialize)]
struct PointRow {
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_country_rows(countries: &[Country]) -> Vec<CountryRow> {
    countries
        .iter()
        .map(|c| CountryRow {
            id: c.id.clone(),
            iso2: c.iso2_code.clone(),
            name: c.name.clone(),
            region: c.region.clone(),
            income_level: c.income_level.clone(),
        })
        .collect()
}

fn build_year_rows(records: &[MergedYearRecord]) -> Vec<YearRow> {
    records
        .iter()
        .map(|r| YearRow {
            year: r.year,
            population: format_population(r.population),
            gdp: format_gdp(r.gdp),
        })
        .collect()
}

fn build_point_rows(points: &[SeriesPoint]) -> Vec<PointRow> {
    points
        .iter()
        .map(|p| PointRow {
            country: p.country.name.clone(),
            year: p.date.clone(),
            value: match p.value {
                Some(v) => format!("{}", v),
                None => "-".to_string(),
            },
        })
        .collect()
}

// -- Table output --

pub fn print_countries_table(countries: &[Country]) {
    println!("{}", Table::new(build_country_rows(countries)));
}

pub fn print_merged_table(records: &[MergedYearRecord]) {
    println!("{}", Table::new(build_year_rows(records)));
}

pub fn print_points_table(points: &[SeriesPoint]) {
    println!("{}", Table::new(build_point_rows(points)));
}

// -- CSV output --

pub fn print_countries_csv(countries: &[Country]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_country_rows(countries) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_merged_csv(records: &[MergedYearRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_year_rows(records) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_points_csv(points: &[SeriesPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_point_rows(points) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_population(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 1_000_000_000.0 => format!("{:.2}B", v / 1_000_000_000.0),
        Some(v) if v >= 1_000_000.0 => format!("{:.1}M", v / 1_000_000.0),
        Some(v) if v >= 1_000.0 => format!("{:.1}K", v / 1_000.0),
        Some(v) => format!("{:.0}", v),
        None => "-".to_string(),
    }
}

fn format_gdp(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => "-".to_string(),
    }
}
