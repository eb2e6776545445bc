//! Configuration and constants for the CLI.

use chrono::NaiveDate;
use std::time::Duration;

/// Default timeout for explorer API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Etherscan-compatible endpoint for the Chiliz Spicy testnet
pub const DEFAULT_API_URL: &str =
    "https://api.routescan.io/v2/network/testnet/evm/88882/etherscan/api";

/// Betting-pool contract watched by default
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x6160C6e7c21a97d17323397598Aca532Aa8939C3";

// CHZ uses 18 decimals, same base-unit scheme as wei
pub const TOKEN_DECIMALS: u32 = 18;

/// Protocol cut taken from each resolved pool
pub const FEE_RATE: f64 = 0.05;

/// Relative band around the expected fee inside which a payout leg counts as the fee leg
pub const FEE_MATCH_TOLERANCE: f64 = 0.20;

/// Per-group fees below this fraction of the flat estimate trigger the lifetime fallback
pub const FEE_FALLBACK_RATIO: f64 = 0.5;

/// Records per explorer page (the API caps offset at 1000)
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Pause between page fetches to stay under the explorer rate limit
pub const PAGE_THROTTLE: Duration = Duration::from_millis(200);

/// Parameters shared by the aggregator and the time-series builder.
///
/// Defaults describe the watched CHZ betting-pool contract; tests and
/// multi-contract callers construct their own.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Contract whose in/out flows are classified
    pub contract_address: String,

    /// Base-unit decimals of the chain's native token
    pub token_decimals: u32,

    /// Theoretical fee fraction of a settled pool
    pub fee_rate: f64,

    /// Acceptance band for the fee-leg match
    pub fee_match_tolerance: f64,

    /// Threshold ratio for the lifetime flat-fee fallback
    pub fee_fallback_ratio: f64,

    /// First day of the time series (contract creation, UTC)
    pub series_start: NaiveDate,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            token_decimals: TOKEN_DECIMALS,
            fee_rate: FEE_RATE,
            fee_match_tolerance: FEE_MATCH_TOLERANCE,
            fee_fallback_ratio: FEE_FALLBACK_RATIO,
            series_start: default_series_start(),
        }
    }
}

impl StatsConfig {
    /// Contract address folded to the form used in comparisons
    pub fn contract_key(&self) -> String {
        self.contract_address.to_lowercase()
    }
}

/// Creation date of the default contract
fn default_series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 27).expect("valid constant date")
}
