use crate::fuel::FuelType;

/// Dataset endpoint of the instantaneous French fuel-price feed.
pub const DEFAULT_API_BASE_URL: &str = "https://data.economie.gouv.fr/api/explore/v2.1/catalog/datasets/prix-des-carburants-en-france-flux-instantane-v2/records";

/// INSEE codes of the metropolitan regions.
pub const DEFAULT_REGION_CODES: [u32; 13] = [11, 24, 27, 28, 32, 44, 52, 53, 75, 76, 84, 93, 94];

/// Largest `limit` the records endpoint accepts per request.
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub region_codes: Vec<u32>,
    pub fuel_types: Vec<FuelType>,
    pub page_size: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub inter_request_delay_ms: u64,
    pub max_concurrent_regions: usize,
    pub log_level: String,
}
