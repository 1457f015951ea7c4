use thiserror::Error;

use crate::app_config::{AppConfig, DEFAULT_API_BASE_URL, DEFAULT_REGION_CODES, MAX_PAGE_SIZE};
use crate::fuel::FuelType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// configuration that surveys all metropolitan regions and all fuel types.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let api_base_url = or_default("CARBU_API_BASE_URL", DEFAULT_API_BASE_URL);
    if api_base_url.trim().is_empty() {
        return Err(invalid("CARBU_API_BASE_URL", "must not be empty".to_string()));
    }

    let region_codes = match lookup("CARBU_REGION_CODES") {
        Ok(raw) => parse_region_codes(&raw).map_err(|reason| invalid("CARBU_REGION_CODES", reason))?,
        Err(_) => DEFAULT_REGION_CODES.to_vec(),
    };

    let fuel_types = match lookup("CARBU_FUEL_TYPES") {
        Ok(raw) => parse_fuel_types(&raw).map_err(|reason| invalid("CARBU_FUEL_TYPES", reason))?,
        Err(_) => FuelType::ALL.to_vec(),
    };

    let page_size = parse_u64("CARBU_PAGE_SIZE", "100")?;
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(invalid(
            "CARBU_PAGE_SIZE",
            format!("must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
        ));
    }

    let request_timeout_secs = parse_u64("CARBU_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "CARBU_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("CARBU_USER_AGENT", "carbu/0.1 (fuel-price-survey)");
    let inter_request_delay_ms = parse_u64("CARBU_INTER_REQUEST_DELAY_MS", "0")?;
    let max_concurrent_regions = parse_usize("CARBU_MAX_CONCURRENT_REGIONS", "1")?.max(1);
    let log_level = or_default("CARBU_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_base_url,
        region_codes,
        fuel_types,
        page_size,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        max_concurrent_regions,
        log_level,
    })
}

/// Parses a comma-separated list of INSEE region codes, e.g. `"11, 53,84"`.
fn parse_region_codes(raw: &str) -> Result<Vec<u32>, String> {
    let mut codes = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let code = part
            .parse::<u32>()
            .map_err(|e| format!("region code \"{part}\": {e}"))?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    if codes.is_empty() {
        return Err("at least one region code is required".to_string());
    }
    Ok(codes)
}

/// Parses a comma-separated fuel type list, dropping duplicates but keeping
/// the first-seen order.
fn parse_fuel_types(raw: &str) -> Result<Vec<FuelType>, String> {
    let mut fuels = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let fuel = part.parse::<FuelType>().map_err(|e| e.to_string())?;
        if !fuels.contains(&fuel) {
            fuels.push(fuel);
        }
    }
    if fuels.is_empty() {
        return Err("at least one fuel type is required".to_string());
    }
    Ok(fuels)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
