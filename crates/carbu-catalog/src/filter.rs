//! Query descriptions for the records endpoint.
//!
//! A [`RecordFilter`] carries the ODSQL `select`, `where` and `order_by`
//! clauses; paging (`limit`/`offset`) is supplied per request by the client.

use carbu_core::FuelType;

/// Columns needed to aggregate prices client-side.
const STATION_COLUMNS: &str = "region, gazole_prix, sp95_prix, sp98_prix, adresse, cp, ville";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    select: String,
    where_clause: Option<String>,
    order_by: Option<String>,
}

impl RecordFilter {
    #[must_use]
    pub fn new(select: impl Into<String>) -> Self {
        Self {
            select: select.into(),
            where_clause: None,
            order_by: None,
        }
    }

    #[must_use]
    pub fn with_where(mut self, clause: impl Into<String>) -> Self {
        self.where_clause = Some(clause.into());
        self
    }

    #[must_use]
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Every station attached to a region, with its three prices and address.
    #[must_use]
    pub fn stations() -> Self {
        Self::new(STATION_COLUMNS).with_where("code_region is not null")
    }

    /// The display name of the region with INSEE code `code`.
    #[must_use]
    pub fn region_name(code: u32) -> Self {
        Self::new("region").with_where(format!("code_region={code}"))
    }

    /// Stations of region `code` reporting a `fuel` price, cheapest first.
    ///
    /// The price column is aliased to `prix` so every fuel type deserializes
    /// into the same row shape.
    #[must_use]
    pub fn cheapest(code: u32, fuel: FuelType) -> Self {
        let column = fuel.price_field();
        Self::new(format!("adresse, cp, ville, {column} as prix"))
            .with_where(format!("code_region={code} and {column} is not null"))
            .with_order_by(column)
    }

    #[must_use]
    pub fn select(&self) -> &str {
        &self.select
    }

    #[must_use]
    pub fn where_clause(&self) -> Option<&str> {
        self.where_clause.as_deref()
    }

    #[must_use]
    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }
}
