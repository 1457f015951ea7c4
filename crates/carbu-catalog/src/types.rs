//! Response shapes of the records endpoint.
//!
//! ## Observed shape
//!
//! ```json
//! { "total_count": 9876, "results": [ { "region": "Bretagne", "gazole_prix": 1.799, ... } ] }
//! ```
//!
//! `total_count` is the cardinality of the whole filtered set, independent of
//! the `limit` requested. Prices are `null` when a station does not sell the
//! grade. The dataset currently serves prices as JSON numbers, but exports and
//! older snapshots carry them as decimal strings, so [`RawPrice`] accepts both.

use carbu_core::{parse_price, validate_price, FuelType, MalformedPriceError, PriceOffer};
use serde::Deserialize;

/// One page of results.
#[derive(Debug, Deserialize)]
pub struct RecordsPage<T> {
    pub total_count: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Output of a full scan: every retrieved record plus the count the server
/// promised up front.
#[derive(Debug)]
pub struct FetchedRecords<T> {
    pub total_count: u64,
    pub records: Vec<T>,
}

impl<T> FetchedRecords<T> {
    /// Number of records actually retrieved.
    #[must_use]
    pub fn retrieved(&self) -> u64 {
        u64::try_from(self.records.len()).unwrap_or(u64::MAX)
    }

    /// `true` when the retrieved count matches the reported `total_count`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.retrieved() == self.total_count
    }
}

/// A price exactly as the API delivered it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    /// Numeric value of the price.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPriceError`] if the text does not parse or the
    /// value is not finite.
    pub fn value(&self) -> Result<f64, MalformedPriceError> {
        match self {
            RawPrice::Number(n) => validate_price(*n),
            RawPrice::Text(s) => parse_price(s),
        }
    }
}

/// A station row as selected by [`crate::RecordFilter::stations`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub gazole_prix: Option<RawPrice>,
    #[serde(default)]
    pub sp95_prix: Option<RawPrice>,
    #[serde(default)]
    pub sp98_prix: Option<RawPrice>,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub cp: Option<String>,
    #[serde(default)]
    pub ville: Option<String>,
}

impl StationRecord {
    /// The reported price for `fuel`, `None` when the station has no data.
    #[must_use]
    pub fn price(&self, fuel: FuelType) -> Option<&RawPrice> {
        match fuel {
            FuelType::Gazole => self.gazole_prix.as_ref(),
            FuelType::Sp95 => self.sp95_prix.as_ref(),
            FuelType::Sp98 => self.sp98_prix.as_ref(),
        }
    }

    /// Builds the offer this station makes at `price`.
    #[must_use]
    pub fn offer(&self, price: f64) -> PriceOffer {
        PriceOffer {
            price,
            address: self.adresse.clone().unwrap_or_default(),
            postal_code: self.cp.clone().unwrap_or_default(),
            city: self.ville.clone().unwrap_or_default(),
        }
    }
}

/// Row returned by [`crate::RecordFilter::region_name`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegionNameRow {
    #[serde(default)]
    pub region: Option<String>,
}

/// Row returned by [`crate::RecordFilter::cheapest`].
#[derive(Debug, Clone, Deserialize)]
pub struct CheapestRow {
    #[serde(default)]
    pub prix: Option<RawPrice>,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub cp: Option<String>,
    #[serde(default)]
    pub ville: Option<String>,
}

impl CheapestRow {
    #[must_use]
    pub fn into_offer(self, price: f64) -> PriceOffer {
        PriceOffer {
            price,
            address: self.adresse.unwrap_or_default(),
            postal_code: self.cp.unwrap_or_default(),
            city: self.ville.unwrap_or_default(),
        }
    }
}
