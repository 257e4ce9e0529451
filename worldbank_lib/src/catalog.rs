//! Country catalog listing: search filter and pagination over the cached
//! snapshot.
//!
//! Filtering and pagination are pure functions of one catalog snapshot, so
//! the returned page and total are always consistent with each other even
//! while other requests repopulate the cache.

use serde::Serialize;
use worldbank_api::types::Country;

use crate::client::CachedClient;
use crate::error::WorldBankError;
use crate::validation::CatalogQuery;

/// One page of catalog results plus the total match count before paging.
#[derive(Serialize)]
pub struct CountryPage {
    pub data: Vec<Country>,
    pub total: usize,
}

/// Lists countries matching the query, reading through the cache.
pub async fn list_countries(
    client: &CachedClient,
    query: &CatalogQuery,
) -> Result<CountryPage, WorldBankError> {
    let all = client.all_countries().await?;
    let filtered = filter_countries(&all, query.search.as_deref());
    let total = filtered.len();
    let data = paginate(filtered, query.page, query.per_page);
    Ok(CountryPage { data, total })
}

/// Case-insensitive substring filter against name, ID, and ISO2 code.
/// A country matches if any of the three fields contains the term; an empty
/// or absent term matches everything.
pub fn filter_countries(countries: &[Country], search: Option<&str>) -> Vec<Country> {
    let term = match search {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return countries.to_vec(),
    };
    countries
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&term)
                || c.id.to_lowercase().contains(&term)
                || c.iso2_code.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Slices one 1-indexed page out of the filtered set. A page past the end
/// yields an empty page rather than an error.
pub fn paginate(countries: Vec<Country>, page: i64, per_page: i64) -> Vec<Country> {
    let start = (page - 1).saturating_mul(per_page).max(0) as usize;
    countries
        .into_iter()
        .skip(start)
        .take(per_page.max(0) as usize)
        .collect()
}
