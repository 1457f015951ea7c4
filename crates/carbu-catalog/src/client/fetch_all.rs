//! Offset-paginated full scan for `CatalogClient`.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::filter::RecordFilter;
use crate::types::{FetchedRecords, RecordsPage};

use super::CatalogClient;

impl CatalogClient {
    /// Retrieves every record matching `filter`.
    ///
    /// A first `limit = 1` request reads `total_count`. Pages of
    /// `min(total_count - offset, page_size)` records are then requested,
    /// advancing `offset` by the number of records each page returned, until
    /// `offset` reaches `total_count`. A page with no records ends the scan
    /// early; the shortfall is visible through
    /// [`FetchedRecords::is_complete`], which callers must check.
    ///
    /// `inter_request_delay_ms` is slept before every page request.
    ///
    /// **All-or-nothing semantics**: if any page fails, the records gathered
    /// so far are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`]; the error carries the
    /// failing URL, including its `offset`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        filter: &RecordFilter,
        page_size: u64,
        inter_request_delay_ms: u64,
    ) -> Result<FetchedRecords<T>, CatalogError> {
        let total_count = self.fetch_total_count(filter).await?;
        let page_size = page_size.max(1);
        tracing::info!(total_count, page_size, "starting catalog full scan");

        let mut records: Vec<T> = Vec::new();
        let mut offset = 0u64;

        while offset < total_count {
            if inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let limit = (total_count - offset).min(page_size);
            let page: RecordsPage<T> = self.fetch_page(filter, limit, offset).await?;
            let received = u64::try_from(page.results.len()).unwrap_or(u64::MAX);
            tracing::debug!(offset, limit, received, total_count, "fetched catalog page");

            if received == 0 {
                tracing::warn!(
                    offset,
                    total_count,
                    "catalog returned an empty page before reaching total_count"
                );
                break;
            }

            records.extend(page.results);
            offset = offset.saturating_add(received);
        }

        Ok(FetchedRecords {
            total_count,
            records,
        })
    }
}
