//! Client for the Opendatasoft records endpoint serving the French
//! instantaneous fuel-price dataset.
//!
//! Exposes single-page queries ([`CatalogClient::fetch_page`]) and an
//! all-or-nothing full scan ([`CatalogClient::fetch_all`]) driven by the
//! `total_count` the server reports.

pub mod client;
pub mod error;
pub mod filter;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use filter::RecordFilter;
pub use types::{CheapestRow, FetchedRecords, RawPrice, RecordsPage, RegionNameRow, StationRecord};
