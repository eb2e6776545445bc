//! Report schema written to disk.
//!
//! This module defines the structure of the JSON file we write.
//! Schema is versioned to allow future evolution.

use crate::stats::{Stats, TimeSeriesPoint};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Contract the statistics describe
    pub contract_address: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Lifetime aggregate statistics
    pub stats: Stats,

    /// Cumulative daily series, oldest first
    pub time_series: Vec<TimeSeriesPoint>,
}

impl Report {
    /// Assemble a report under the current schema version
    pub fn new(
        contract_address: impl Into<String>,
        stats: Stats,
        time_series: Vec<TimeSeriesPoint>,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            contract_address: contract_address.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            stats,
            time_series,
        }
    }
}
