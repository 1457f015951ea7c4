//! Rendering of [`RegionResult`] listings.
//!
//! The text layout is one block per region:
//!
//! ```text
//! Bretagne :
//!   gazole : 1.729 € / ZA de Kerlann, 35170 Bruz
//!   sp95 : no data
//! ------------------------
//! ```

use std::fmt::Write as _;

use carbu_core::{FuelType, PriceOffer, RegionResult};

pub(crate) const SEPARATOR: &str = "------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Renders `results` in the requested format.
pub(crate) fn render(results: &[RegionResult], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(results)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub(crate) fn render_text(results: &[RegionResult]) -> String {
    let mut out = String::new();
    for region in results {
        let _ = writeln!(out, "{} :", region.region_name);
        for (fuel, offer) in &region.offers {
            let _ = writeln!(out, "  {}", offer_line(*fuel, offer.as_ref()));
        }
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}

fn offer_line(fuel: FuelType, offer: Option<&PriceOffer>) -> String {
    match offer {
        Some(o) => format!(
            "{fuel} : {} € / {}, {} {}",
            o.price, o.address, o.postal_code, o.city
        ),
        None => format!("{fuel} : no data"),
    }
}
