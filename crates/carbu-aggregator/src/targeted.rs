//! Targeted strategy: let the catalog sort and return the minimum.
//!
//! For every region code this issues one name lookup plus one
//! `limit = 1` query per fuel type, sorted ascending on that fuel's price
//! column. The server's ordering is trusted as-is.

use carbu_catalog::{
    CatalogClient, CheapestRow, RawPrice, RecordFilter, RecordsPage, RegionNameRow,
};
use carbu_core::{FuelType, PriceOffer, RegionResult};
use futures::stream::{self, StreamExt};

use crate::error::AggregateError;
use crate::strategy::LowestPriceStrategy;

pub struct Targeted<'a> {
    client: &'a CatalogClient,
    region_codes: &'a [u32],
    fuel_types: &'a [FuelType],
    max_concurrent_regions: usize,
}

impl<'a> Targeted<'a> {
    /// `max_concurrent_regions` of 1 keeps requests strictly sequential.
    #[must_use]
    pub fn new(
        client: &'a CatalogClient,
        region_codes: &'a [u32],
        fuel_types: &'a [FuelType],
        max_concurrent_regions: usize,
    ) -> Self {
        Self {
            client,
            region_codes,
            fuel_types,
            max_concurrent_regions: max_concurrent_regions.max(1),
        }
    }

    /// Resolves one region and its cheapest offer per fuel type.
    ///
    /// The name lookup and the fuel queries run one after the other; the
    /// result is only returned once all of them have completed.
    ///
    /// # Errors
    ///
    /// - [`AggregateError::UnknownRegion`] if no record carries `code`.
    /// - [`AggregateError::Fetch`] if any of the region's queries fails.
    pub async fn region_result(&self, code: u32) -> Result<RegionResult, AggregateError> {
        let region_name = self.region_name(code).await?;
        let mut result = RegionResult::new(region_name);

        for &fuel in self.fuel_types {
            let offer = self.cheapest(code, fuel).await?;
            result.set_offer(fuel, offer);
        }

        Ok(result)
    }

    /// Runs [`Self::region_result`] for every configured code.
    ///
    /// Outcomes come back in configured order even when regions are queried
    /// concurrently.
    pub async fn region_outcomes(&self) -> Vec<(u32, Result<RegionResult, AggregateError>)> {
        stream::iter(self.region_codes.iter().copied())
            .map(|code| async move { (code, self.region_result(code).await) })
            .buffered(self.max_concurrent_regions)
            .collect()
            .await
    }

    async fn region_name(&self, code: u32) -> Result<String, AggregateError> {
        let page: RecordsPage<RegionNameRow> = self
            .client
            .fetch_page(&RecordFilter::region_name(code), 1, 0)
            .await?;

        page.results
            .into_iter()
            .next()
            .and_then(|row| row.region)
            .ok_or(AggregateError::UnknownRegion { code })
    }

    /// Cheapest `fuel` offer in region `code`; `None` when no station in the
    /// region reports that grade.
    async fn cheapest(
        &self,
        code: u32,
        fuel: FuelType,
    ) -> Result<Option<PriceOffer>, AggregateError> {
        let page: RecordsPage<CheapestRow> = self
            .client
            .fetch_page(&RecordFilter::cheapest(code, fuel), 1, 0)
            .await?;

        let Some(row) = page.results.into_iter().next() else {
            tracing::debug!(region_code = code, fuel = %fuel, "no station reports this fuel");
            return Ok(None);
        };

        let price = match row.prix.as_ref().map(RawPrice::value) {
            None => return Ok(None),
            Some(Ok(price)) => price,
            Some(Err(e)) => {
                tracing::warn!(region_code = code, fuel = %fuel, error = %e, "ignoring malformed price");
                return Ok(None);
            }
        };

        Ok(Some(row.into_offer(price)))
    }
}

impl LowestPriceStrategy for Targeted<'_> {
    fn name(&self) -> &'static str {
        "targeted"
    }

    /// A failed region is logged and left out of the result. Only when every
    /// region fails is an error returned (the first one encountered).
    ///
    /// # Errors
    ///
    /// Returns the first region's [`AggregateError`] when no region succeeds.
    async fn lowest_prices(&self) -> Result<Vec<RegionResult>, AggregateError> {
        let outcomes = self.region_outcomes().await;
        let region_count = outcomes.len();

        let mut results = Vec::with_capacity(region_count);
        let mut first_error: Option<AggregateError> = None;
        let mut failed_regions = 0usize;

        for (code, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!(
                        region_code = code,
                        error = %e,
                        "targeted region query failed, skipping region"
                    );
                    failed_regions += 1;
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        if failed_regions > 0 && failed_regions == region_count {
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        tracing::info!(
            regions = results.len(),
            failed_regions,
            "targeted queries aggregated"
        );
        Ok(results)
    }
}
