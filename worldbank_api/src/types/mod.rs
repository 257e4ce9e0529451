mod country;
pub use self::country::{Classification, Country, CountryID, WbCountry};

mod series;
pub use self::series::{CountryRef, IndicatorRef, SeriesPoint, WbSeriesPoint};
