use std::collections::BTreeMap;

use serde::Serialize;

use crate::fuel::FuelType;

/// The cheapest station found for one (region, fuel type) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceOffer {
    pub price: f64,
    pub address: String,
    pub postal_code: String,
    pub city: String,
}

/// Lowest offers for one region, keyed by fuel type.
///
/// Every fuel type the run asked about has an entry; `None` means no station
/// in the region reported a usable price for that grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionResult {
    pub region_name: String,
    pub offers: BTreeMap<FuelType, Option<PriceOffer>>,
}

impl RegionResult {
    /// Creates a result with no fuel types recorded yet.
    #[must_use]
    pub fn new(region_name: impl Into<String>) -> Self {
        Self {
            region_name: region_name.into(),
            offers: BTreeMap::new(),
        }
    }

    /// Records the outcome for `fuel`, replacing any previous entry.
    pub fn set_offer(&mut self, fuel: FuelType, offer: Option<PriceOffer>) {
        self.offers.insert(fuel, offer);
    }

    /// Returns the offer for `fuel`, or `None` when it is absent or was not
    /// requested.
    #[must_use]
    pub fn offer(&self, fuel: FuelType) -> Option<&PriceOffer> {
        self.offers.get(&fuel).and_then(Option::as_ref)
    }
}
