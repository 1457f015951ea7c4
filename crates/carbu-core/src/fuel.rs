//! The fuel grades tracked by the instantaneous price dataset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three fuel grades the survey reports on.
///
/// Ordering follows declaration order, so maps keyed by `FuelType` list
/// gazole first, then SP95, then SP98.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gazole,
    Sp95,
    Sp98,
}

impl FuelType {
    /// Every tracked grade, in report order.
    pub const ALL: [FuelType; 3] = [FuelType::Gazole, FuelType::Sp95, FuelType::Sp98];

    /// Lowercase name used on the command line, in config and in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Gazole => "gazole",
            FuelType::Sp95 => "sp95",
            FuelType::Sp98 => "sp98",
        }
    }

    /// Name of the dataset column holding this grade's price.
    #[must_use]
    pub fn price_field(self) -> &'static str {
        match self {
            FuelType::Gazole => "gazole_prix",
            FuelType::Sp95 => "sp95_prix",
            FuelType::Sp98 => "sp98_prix",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a tracked fuel grade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel type \"{0}\" (expected one of: gazole, sp95, sp98)")]
pub struct ParseFuelTypeError(pub String);

impl FromStr for FuelType {
    type Err = ParseFuelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gazole" => Ok(FuelType::Gazole),
            "sp95" => Ok(FuelType::Sp95),
            "sp98" => Ok(FuelType::Sp98),
            _ => Err(ParseFuelTypeError(s.to_owned())),
        }
    }
}
