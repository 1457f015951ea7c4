//! Shared domain types and configuration for the `carbu` workspace.
//!
//! Holds the closed set of tracked fuel grades, the per-region result shape
//! produced by both aggregation strategies, price parsing, and the
//! environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod fuel;
pub mod price;
pub mod region;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use fuel::{FuelType, ParseFuelTypeError};
pub use price::{parse_price, validate_price, MalformedPriceError};
pub use region::{PriceOffer, RegionResult};
