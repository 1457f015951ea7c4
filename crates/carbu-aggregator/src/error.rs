use carbu_catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    /// A catalog request failed; the containing unit is aborted.
    #[error("catalog request failed: {0}")]
    Fetch(#[from] CatalogError),

    /// The full scan retrieved a different number of records than the
    /// catalog reported.
    #[error("catalog reported {expected} records but {actual} were retrieved")]
    Consistency { expected: u64, actual: u64 },

    /// A targeted region code matched no record, so it has no display name.
    #[error("no catalog record found for region code {code}")]
    UnknownRegion { code: u32 },
}
