//! Full-scan strategy: download the whole station set, then reduce locally.
//!
//! Issues `1 + ceil(total_count / page_size)` requests and holds every
//! station in memory until the reduction is done.

use carbu_catalog::{CatalogClient, FetchedRecords, RecordFilter, StationRecord};
use carbu_core::{FuelType, RegionResult};

use crate::error::AggregateError;
use crate::reduce::aggregate;
use crate::strategy::LowestPriceStrategy;

pub struct FullScan<'a> {
    client: &'a CatalogClient,
    fuel_types: &'a [FuelType],
    page_size: u64,
    inter_request_delay_ms: u64,
}

impl<'a> FullScan<'a> {
    #[must_use]
    pub fn new(
        client: &'a CatalogClient,
        fuel_types: &'a [FuelType],
        page_size: u64,
        inter_request_delay_ms: u64,
    ) -> Self {
        Self {
            client,
            fuel_types,
            page_size,
            inter_request_delay_ms,
        }
    }
}

impl LowestPriceStrategy for FullScan<'_> {
    fn name(&self) -> &'static str {
        "full-scan"
    }

    /// # Errors
    ///
    /// - [`AggregateError::Fetch`] if any page request fails.
    /// - [`AggregateError::Consistency`] if fewer (or more) records arrive
    ///   than the catalog reported. No partial result is returned.
    async fn lowest_prices(&self) -> Result<Vec<RegionResult>, AggregateError> {
        let fetched: FetchedRecords<StationRecord> = self
            .client
            .fetch_all(
                &RecordFilter::stations(),
                self.page_size,
                self.inter_request_delay_ms,
            )
            .await?;

        ensure_complete(&fetched)?;

        let results = aggregate(fetched.records, self.fuel_types);
        tracing::info!(
            stations = fetched.total_count,
            regions = results.len(),
            "full scan aggregated"
        );
        Ok(results)
    }
}

/// Checks that a full scan retrieved exactly the promised number of records.
///
/// # Errors
///
/// Returns [`AggregateError::Consistency`] on any mismatch.
pub fn ensure_complete<T>(fetched: &FetchedRecords<T>) -> Result<(), AggregateError> {
    if fetched.is_complete() {
        Ok(())
    } else {
        Err(AggregateError::Consistency {
            expected: fetched.total_count,
            actual: fetched.retrieved(),
        })
    }
}
