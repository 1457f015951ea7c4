//! Lowest-price aggregation per region and fuel type.
//!
//! Two interchangeable [`LowestPriceStrategy`] implementations produce the
//! same [`carbu_core::RegionResult`] shape:
//!
//! - [`FullScan`] downloads every station and reduces client-side.
//! - [`Targeted`] asks the catalog for the single cheapest row per region and
//!   fuel type, trusting the server's sort.

pub mod error;
pub mod full_scan;
pub mod reduce;
pub mod strategy;
pub mod targeted;

pub use error::AggregateError;
pub use full_scan::FullScan;
pub use reduce::{aggregate, group_by_region, lowest_offer};
pub use strategy::LowestPriceStrategy;
pub use targeted::Targeted;
