use std::future::Future;

use carbu_core::RegionResult;

use crate::error::AggregateError;

/// A way of producing the lowest offer per region and fuel type.
///
/// Implementations differ in how many requests they issue and how much they
/// hold in memory, never in the shape of what they return, so reporting code
/// can stay strategy-agnostic.
pub trait LowestPriceStrategy {
    /// Short name used in logs and error context.
    fn name(&self) -> &'static str;

    /// Computes one [`RegionResult`] per region.
    fn lowest_prices(&self) -> impl Future<Output = Result<Vec<RegionResult>, AggregateError>>;
}
