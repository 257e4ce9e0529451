//! Query parameter validation for the catalog and indicator operations.
//!
//! All functions are pure and perform no I/O. Violations carry the name of
//! the offending field so callers can report them per parameter. Validation
//! always runs before any service call.

use crate::error::WorldBankError;
use crate::series::DEFAULT_YEARS;

/// Default results-per-page for catalog listings.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Largest allowed page size.
pub const MAX_PER_PAGE: i64 = 100;

/// Largest allowed history lookback in years.
pub const MAX_YEARS: i64 = 50;

fn invalid(field: &str, message: String) -> WorldBankError {
    WorldBankError::InvalidQuery {
        field: field.to_string(),
        message,
    }
}

/// Validate a page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, WorldBankError> {
    if page < 1 {
        return Err(invalid("page", "page must be >= 1".to_string()));
    }
    Ok(page)
}

/// Validate a page size (must be 1..=100).
pub fn validate_per_page(per_page: i64) -> Result<i64, WorldBankError> {
    if !(1..=MAX_PER_PAGE).contains(&per_page) {
        return Err(invalid(
            "per_page",
            format!("per_page must be between 1 and {}", MAX_PER_PAGE),
        ));
    }
    Ok(per_page)
}

/// Validate a country code: exactly three characters after trimming,
/// passed through otherwise unchanged.
pub fn validate_country_code(input: &str) -> Result<String, WorldBankError> {
    let trimmed = input.trim();
    if trimmed.len() == 3 {
        Ok(trimmed.to_string())
    } else {
        Err(invalid(
            "code",
            format!(
                "invalid country code '{}'. Expected exactly 3 characters (e.g. DEU, FRA)",
                input
            ),
        ))
    }
}

/// Validate an indicator code: non-empty after trimming.
pub fn validate_indicator(input: &str) -> Result<String, WorldBankError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(
            "indicator",
            "indicator code must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a history lookback (must be 1..=50 years).
pub fn validate_years(years: i64) -> Result<i64, WorldBankError> {
    if !(1..=MAX_YEARS).contains(&years) {
        return Err(invalid(
            "years",
            format!("years must be between 1 and {}", MAX_YEARS),
        ));
    }
    Ok(years)
}

/// Catalog listing query with 1-indexed paging. Search is free text and
/// intentionally unconstrained.
#[derive(Clone)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub page: i64,
    pub per_page: i64,
}

impl Default for CatalogQuery {
    fn default() -> CatalogQuery {
        CatalogQuery {
            search: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl CatalogQuery {
    /// Sets the search term.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Checks every field, returning the query unchanged on success.
    pub fn validate(self) -> Result<Self, WorldBankError> {
        validate_page(self.page)?;
        validate_per_page(self.per_page)?;
        Ok(self)
    }
}

/// Raw indicator series query for one country.
#[derive(Clone)]
pub struct IndicatorQuery {
    pub code: String,
    pub indicator: String,
    pub years: i64,
}

impl IndicatorQuery {
    /// Creates a query with the default ten-year lookback.
    pub fn new(code: &str, indicator: &str) -> Self {
        Self {
            code: code.to_string(),
            indicator: indicator.to_string(),
            years: DEFAULT_YEARS,
        }
    }

    /// Sets the history lookback in years.
    pub fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    /// Normalizes and checks every field.
    pub fn validate(self) -> Result<Self, WorldBankError> {
        let code = validate_country_code(&self.code)?;
        let indicator = validate_indicator(&self.indicator)?;
        let years = validate_years(self.years)?;
        Ok(Self {
            code,
            indicator,
            years,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: WorldBankError) -> String {
        match err {
            WorldBankError::InvalidQuery { field, .. } => field,
            other => panic!("expected InvalidQuery, got {}", other),
        }
    }

    // -- Page bounds --

    #[test]
    fn page_valid() {
        assert_eq!(validate_page(1).unwrap(), 1);
        assert_eq!(validate_page(1000).unwrap(), 1000);
    }

    #[test]
    fn page_zero_rejected() {
        assert_eq!(field_of(validate_page(0).unwrap_err()), "page");
    }

    #[test]
    fn page_negative_rejected() {
        assert!(validate_page(-1).is_err());
    }

    #[test]
    fn per_page_valid() {
        assert_eq!(validate_per_page(1).unwrap(), 1);
        assert_eq!(validate_per_page(100).unwrap(), 100);
    }

    #[test]
    fn per_page_zero_rejected() {
        assert_eq!(field_of(validate_per_page(0).unwrap_err()), "per_page");
    }

    #[test]
    fn per_page_over_100_rejected() {
        assert!(validate_per_page(101).is_err());
    }

    // -- Country code --

    #[test]
    fn country_code_valid() {
        assert_eq!(validate_country_code("DEU").unwrap(), "DEU");
        assert_eq!(validate_country_code("fra").unwrap(), "fra");
    }

    #[test]
    fn country_code_trimmed() {
        assert_eq!(validate_country_code(" deu ").unwrap(), "deu");
    }

    #[test]
    fn country_code_passes_through_any_three_characters() {
        // Only the length is constrained; the code is forwarded verbatim.
        assert_eq!(validate_country_code("A1B").unwrap(), "A1B");
    }

    #[test]
    fn country_code_wrong_length_rejected() {
        assert_eq!(field_of(validate_country_code("USA1").unwrap_err()), "code");
        assert!(validate_country_code("DE").is_err());
        assert!(validate_country_code("").is_err());
    }

    // -- Indicator --

    #[test]
    fn indicator_valid() {
        assert_eq!(validate_indicator("SP.POP.TOTL").unwrap(), "SP.POP.TOTL");
    }

    #[test]
    fn indicator_trimmed() {
        assert_eq!(validate_indicator(" SP.POP.TOTL ").unwrap(), "SP.POP.TOTL");
    }

    #[test]
    fn indicator_empty_rejected() {
        assert_eq!(field_of(validate_indicator("").unwrap_err()), "indicator");
        assert!(validate_indicator("   ").is_err());
    }

    // -- Years --

    #[test]
    fn years_valid() {
        assert_eq!(validate_years(1).unwrap(), 1);
        assert_eq!(validate_years(10).unwrap(), 10);
        assert_eq!(validate_years(50).unwrap(), 50);
    }

    #[test]
    fn years_zero_rejected() {
        assert_eq!(field_of(validate_years(0).unwrap_err()), "years");
    }

    #[test]
    fn years_over_max_rejected() {
        assert!(validate_years(51).is_err());
    }

    // -- Query structs --

    #[test]
    fn catalog_query_defaults() {
        let query = CatalogQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, DEFAULT_PER_PAGE);
        assert!(query.search.is_none());
    }

    #[test]
    fn catalog_query_validates_fields() {
        assert!(CatalogQuery::default().with_page(-1).validate().is_err());
        assert!(CatalogQuery::default().with_per_page(0).validate().is_err());
        assert!(CatalogQuery::default()
            .with_search("de")
            .with_page(2)
            .with_per_page(50)
            .validate()
            .is_ok());
    }

    #[test]
    fn indicator_query_defaults_and_normalizes() {
        let query = IndicatorQuery::new(" deu ", " SP.POP.TOTL ").validate().unwrap();
        assert_eq!(query.code, "deu");
        assert_eq!(query.indicator, "SP.POP.TOTL");
        assert_eq!(query.years, DEFAULT_YEARS);
    }

    #[test]
    fn indicator_query_rejects_bad_fields() {
        assert!(IndicatorQuery::new("USA1", "SP.POP.TOTL").validate().is_err());
        assert!(IndicatorQuery::new("DEU", "").validate().is_err());
        assert!(IndicatorQuery::new("DEU", "SP.POP.TOTL")
            .with_years(0)
            .validate()
            .is_err());
    }
}
