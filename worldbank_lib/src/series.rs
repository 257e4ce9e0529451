//! Concurrent dual-indicator retrieval and per-year merge.

use std::collections::HashMap;

use serde::Serialize;
use worldbank_api::types::SeriesPoint;

use crate::client::CachedClient;
use crate::error::WorldBankError;

/// World Bank indicator code for total population.
pub const POPULATION_TOTAL: &str = "SP.POP.TOTL";

/// World Bank indicator code for GDP per capita in current US dollars.
pub const GDP_PER_CAPITA: &str = "NY.GDP.PCAP.CD";

/// Default number of years of history to request.
pub const DEFAULT_YEARS: i64 = 10;

/// One calendar year's aligned values across both indicators. A year present
/// in only one series carries `None` in the other column, never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedYearRecord {
    pub year: i32,
    pub population: Option<f64>,
    pub gdp: Option<f64>,
}

/// Merged view of a country's population and GDP-per-capita history.
#[derive(Serialize)]
pub struct MergedSeries {
    /// Country name as reported by the provider, falling back to the
    /// requested code when neither series produced a data point.
    pub display_name: String,
    /// One record per year present in either series, newest first.
    pub data: Vec<MergedYearRecord>,
}

/// Fetches both indicators concurrently and merges them by year.
///
/// The two fetches run independently: a failure on one indicator degrades
/// that column to absent values instead of failing the whole request. Only
/// when neither indicator has any data is the country reported as not found.
pub async fn merged_series(
    client: &CachedClient,
    country_code: &str,
    years: i64,
) -> Result<MergedSeries, WorldBankError> {
    let (pop_result, gdp_result) = tokio::join!(
        client.indicator_series(country_code, POPULATION_TOTAL, years),
        client.indicator_series(country_code, GDP_PER_CAPITA, years),
    );

    let population = pop_result.unwrap_or_else(|err| {
        tracing::warn!("population fetch failed for {}: {}", country_code, err);
        Vec::new()
    });
    let gdp = gdp_result.unwrap_or_else(|err| {
        tracing::warn!("gdp fetch failed for {}: {}", country_code, err);
        Vec::new()
    });

    if population.is_empty() && gdp.is_empty() {
        return Err(WorldBankError::NoData(country_code.to_string()));
    }

    let display_name = population
        .first()
        .or_else(|| gdp.first())
        .map(|point| point.country.name.clone())
        .unwrap_or_else(|| country_code.to_string());

    Ok(MergedSeries {
        display_name,
        data: merge_series(&population, &gdp),
    })
}

/// Builds one record per year present in either series, sorted by year
/// descending.
///
/// Population points seed the map; GDP points merge into existing years
/// without clobbering population, or open a new year with population absent.
/// Points with an absent value or an unparseable year are skipped and never
/// create placeholder rows.
pub fn merge_series(population: &[SeriesPoint], gdp: &[SeriesPoint]) -> Vec<MergedYearRecord> {
    let mut by_year: HashMap<i32, MergedYearRecord> = HashMap::new();

    for point in population {
        if let (Ok(year), Some(value)) = (point.date.parse::<i32>(), point.value) {
            by_year.insert(
                year,
                MergedYearRecord {
                    year,
                    population: Some(value),
                    gdp: None,
                },
            );
        }
    }

    for point in gdp {
        if let (Ok(year), Some(value)) = (point.date.parse::<i32>(), point.value) {
            by_year
                .entry(year)
                .or_insert(MergedYearRecord {
                    year,
                    population: None,
                    gdp: None,
                })
                .gdp = Some(value);
        }
    }

    let mut records: Vec<MergedYearRecord> = by_year.into_values().collect();
    records.sort_by(|a, b| b.year.cmp(&a.year));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldbank_api::types::CountryRef;

    fn point(date: &str, value: Option<f64>) -> SeriesPoint {
        SeriesPoint {
            country: CountryRef {
                id: "DE".to_string(),
                name: "Germany".to_string(),
            },
            date: date.to_string(),
            value,
        }
    }

    #[test]
    fn merge_covers_years_from_both_series() {
        let population = vec![point("2021", Some(100.0)), point("2022", Some(101.0))];
        let gdp = vec![point("2022", Some(50.0)), point("2023", Some(51.0))];

        let merged = merge_series(&population, &gdp);

        let years: Vec<i32> = merged.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2023, 2022, 2021]);

        assert_eq!(merged[0].population, None);
        assert_eq!(merged[0].gdp, Some(51.0));
        assert_eq!(merged[1].population, Some(101.0));
        assert_eq!(merged[1].gdp, Some(50.0));
        assert_eq!(merged[2].population, Some(100.0));
        assert_eq!(merged[2].gdp, None);
    }

    #[test]
    fn merge_sorts_descending() {
        let population = vec![
            point("2019", Some(1.0)),
            point("2023", Some(2.0)),
            point("2021", Some(3.0)),
        ];
        let merged = merge_series(&population, &[]);
        let years: Vec<i32> = merged.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2023, 2021, 2019]);
    }

    #[test]
    fn merge_skips_absent_values() {
        let population = vec![point("2022", None), point("2021", Some(100.0))];
        let gdp = vec![point("2022", None)];

        let merged = merge_series(&population, &gdp);

        // Absent observations never open a row, so 2022 is missing entirely.
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].year, 2021);
    }

    #[test]
    fn merge_skips_unparseable_years() {
        let population = vec![point("", Some(1.0)), point("20x2", Some(2.0))];
        let gdp = vec![point("2022", Some(3.0))];

        let merged = merge_series(&population, &gdp);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].year, 2022);
        assert_eq!(merged[0].population, None);
    }

    #[test]
    fn merge_preserves_population_when_gdp_merges_in() {
        let population = vec![point("2022", Some(100.0))];
        let gdp = vec![point("2022", Some(50.0))];

        let merged = merge_series(&population, &gdp);
        assert_eq!(
            merged,
            vec![MergedYearRecord {
                year: 2022,
                population: Some(100.0),
                gdp: Some(50.0),
            }]
        );
    }

    #[test]
    fn merge_has_no_duplicate_years() {
        let population = vec![point("2022", Some(1.0)), point("2022", Some(2.0))];
        let gdp = vec![point("2022", Some(3.0)), point("2022", Some(4.0))];

        let merged = merge_series(&population, &gdp);
        assert_eq!(merged.len(), 1);
        // Later points win within a series, matching upstream ordering.
        assert_eq!(merged[0].population, Some(2.0));
        assert_eq!(merged[0].gdp, Some(4.0));
    }

    #[test]
    fn merge_empty_inputs() {
        assert!(merge_series(&[], &[]).is_empty());
    }
}
