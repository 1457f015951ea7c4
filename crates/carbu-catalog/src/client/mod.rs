//! HTTP client for the Opendatasoft `records` endpoint.

mod fetch_all;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::filter::RecordFilter;
use crate::types::RecordsPage;

/// Client for one dataset's `records` endpoint.
///
/// Use [`CatalogClient::new`] with the production dataset URL, or point it at
/// a wiremock server in tests.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client for the `records` endpoint at `base_url`.
    ///
    /// `timeout_secs` bounds each whole request; an expired request surfaces
    /// as [`CatalogError::Http`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // The endpoint is a path (".../records"), so a trailing slash would
        // address a different resource.
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches one page of records matching `filter`.
    ///
    /// The returned `total_count` is the size of the whole filtered set, not
    /// of this page.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure or timeout.
    /// - [`CatalogError::UnexpectedStatus`] on any non-2xx response.
    /// - [`CatalogError::Deserialize`] if the body does not match
    ///   [`RecordsPage<T>`].
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        filter: &RecordFilter,
        limit: u64,
        offset: u64,
    ) -> Result<RecordsPage<T>, CatalogError> {
        let url = self.build_url(filter, limit, offset);
        tracing::debug!(%url, limit, offset, "requesting catalog page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| CatalogError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|source| CatalogError::Http {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| CatalogError::Deserialize {
            context: url.to_string(),
            source,
        })
    }

    /// Reads the cardinality of `filter` with a single-record request.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`].
    pub async fn fetch_total_count(&self, filter: &RecordFilter) -> Result<u64, CatalogError> {
        let page: RecordsPage<serde_json::Value> = self.fetch_page(filter, 1, 0).await?;
        Ok(page.total_count)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, filter: &RecordFilter, limit: u64, offset: u64) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", filter.select());
            if let Some(clause) = filter.where_clause() {
                pairs.append_pair("where", clause);
            }
            if let Some(order_by) = filter.order_by() {
                pairs.append_pair("order_by", order_by);
            }
            pairs.append_pair("limit", &limit.to_string());
            pairs.append_pair("offset", &offset.to_string());
        }
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
