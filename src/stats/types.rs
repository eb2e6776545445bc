//! Output records consumed by the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifetime statistics for the watched contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Distinct addresses seen on either side of any transaction
    pub unique_wallets: u64,

    /// External plus internal transaction count
    pub total_transactions: u64,

    /// Gas spent across all external transactions, in CHZ
    pub total_gas_used_chz: f64,

    /// Value moved through the contract in either direction, in CHZ
    pub total_chz_transferred: f64,

    /// Value received by the contract (stakes placed)
    pub bets_received: f64,

    /// Outflows minus the attributed fee cut, never negative
    pub winnings_redistributed: f64,

    /// Attributed fee portion of the outflows
    pub fees_generated: f64,
}

/// One day of the series.
///
/// Every metric is a running total from the series start through `date`,
/// not an isolated daily figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// UTC calendar day
    pub date: NaiveDate,

    /// Distinct addresses seen up to and including this day
    pub unique_wallets: u64,

    /// External transactions so far
    pub transactions: u64,

    /// Gas spent so far, in CHZ
    pub gas_cost: f64,

    /// Value moved so far, in CHZ
    pub volume: f64,

    /// Value received by the contract so far
    pub volume_received: f64,

    /// Winnings paid back out so far, net of attributed fees
    pub volume_redistributed: f64,

    /// Attributed fees so far
    pub fees: f64,
}
