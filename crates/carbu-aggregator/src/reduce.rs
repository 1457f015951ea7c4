//! Client-side reduction used by the full-scan strategy.
//!
//! Pure functions over already-fetched [`StationRecord`]s, kept apart from
//! the HTTP code so they can be exercised on synthetic datasets.

use std::collections::BTreeMap;

use carbu_catalog::StationRecord;
use carbu_core::{FuelType, PriceOffer, RegionResult};

/// Partitions records by exact region name.
///
/// Records without a region are dropped with a warning; the catalog filter
/// should already have excluded them.
#[must_use]
pub fn group_by_region(records: Vec<StationRecord>) -> BTreeMap<String, Vec<StationRecord>> {
    let mut groups: BTreeMap<String, Vec<StationRecord>> = BTreeMap::new();
    let mut without_region = 0usize;

    for record in records {
        match record.region.clone() {
            Some(region) => groups.entry(region).or_default().push(record),
            None => without_region += 1,
        }
    }

    if without_region > 0 {
        tracing::warn!(count = without_region, "skipping station records with no region");
    }

    groups
}

/// Finds the cheapest valid `fuel` price among `stations`.
///
/// Null prices are never candidates. Malformed prices are logged and treated
/// as null. The best offer is replaced only by a strictly smaller price, so
/// among equal prices the first station scanned wins. Returns `None` when no
/// station has a usable price.
#[must_use]
pub fn lowest_offer(stations: &[StationRecord], fuel: FuelType) -> Option<PriceOffer> {
    let mut best: Option<PriceOffer> = None;

    for station in stations {
        let Some(raw) = station.price(fuel) else {
            continue;
        };
        let price = match raw.value() {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!(
                    fuel = %fuel,
                    region = station.region.as_deref().unwrap_or(""),
                    address = station.adresse.as_deref().unwrap_or(""),
                    error = %e,
                    "ignoring malformed price"
                );
                continue;
            }
        };

        if best.as_ref().is_none_or(|current| price < current.price) {
            best = Some(station.offer(price));
        }
    }

    best
}

/// Groups `records` by region and reduces each group to one
/// [`RegionResult`] holding an entry for every fuel in `fuel_types`.
#[must_use]
pub fn aggregate(records: Vec<StationRecord>, fuel_types: &[FuelType]) -> Vec<RegionResult> {
    group_by_region(records)
        .into_iter()
        .map(|(region_name, stations)| {
            let mut result = RegionResult::new(region_name);
            for &fuel in fuel_types {
                result.set_offer(fuel, lowest_offer(&stations, fuel));
            }
            result
        })
        .collect()
}
