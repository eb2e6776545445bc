//! Cumulative daily time series.
//!
//! The series covers every UTC calendar day from the contract creation
//! date through "today", one point per day, each metric a running total.
//! Records without a usable timestamp are dropped here but still count in
//! the lifetime aggregates; the two passes may disagree at the margins by
//! design.

use super::fee_split::attribute_fee;
use super::normalize::{parse_units, record_wallets, to_token_units, wei_to_token, Flow};
use super::types::TimeSeriesPoint;
use crate::explorer::types::{InternalTransaction, Transaction};
use crate::utils::config::StatsConfig;
use chrono::{DateTime, NaiveDate};
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Accumulator for a single calendar day
#[derive(Debug, Default)]
struct DayBucket {
    wallets: HashSet<String>,
    transactions: u64,
    gas_wei: u128,
    volume: f64,
    volume_received: f64,
    volume_redistributed: f64,
    fees: f64,
}

/// One outgoing internal transfer, remembered with its own day
struct SettlementLeg {
    amount: f64,
    day: NaiveDate,
}

/// Build the cumulative daily series over `[start, end]` inclusive.
///
/// Fee attribution here keeps whatever per-group matches succeed; unlike
/// the lifetime aggregate there is no flat fallback at day granularity.
/// The accepted fee and the remaining winnings are credited to the day of
/// the matched leg.
pub fn build_time_series(
    transactions: &[Transaction],
    internal_transactions: &[InternalTransaction],
    start: NaiveDate,
    end: NaiveDate,
    config: &StatsConfig,
) -> Vec<TimeSeriesPoint> {
    let contract_key = config.contract_key();

    // One zeroed bucket per day, even for days with no activity
    let mut days: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
    let mut day = start;
    while day <= end {
        days.insert(day, DayBucket::default());
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    for tx in transactions {
        let Some(day) = day_key(tx.time_stamp.as_deref()) else {
            continue;
        };
        let Some(bucket) = days.get_mut(&day) else {
            continue;
        };

        record_wallets(&mut bucket.wallets, tx.from.as_deref(), tx.to.as_deref());
        bucket.transactions += 1;

        if let (Some(gas_used), Some(gas_price)) = (
            parse_units(tx.gas_used.as_deref()),
            parse_units(tx.gas_price.as_deref()),
        ) {
            bucket.gas_wei = bucket.gas_wei.saturating_add(gas_used.saturating_mul(gas_price));
        }

        if let Some(amount) = to_token_units(tx.value.as_deref(), config.token_decimals) {
            bucket.volume += amount;
            if Flow::classify(tx.from.as_deref(), tx.to.as_deref(), &contract_key) == Flow::Inbound
            {
                bucket.volume_received += amount;
            }
        }
    }

    // Settlement batches keyed by parent hash; each leg keeps its own day
    let mut groups: BTreeMap<String, Vec<SettlementLeg>> = BTreeMap::new();

    for tx in internal_transactions {
        let Some(day) = day_key(tx.time_stamp.as_deref()) else {
            continue;
        };
        let Some(bucket) = days.get_mut(&day) else {
            continue;
        };

        record_wallets(&mut bucket.wallets, tx.from.as_deref(), tx.to.as_deref());

        let Some(amount) = to_token_units(tx.value.as_deref(), config.token_decimals) else {
            continue;
        };
        match Flow::classify(tx.from.as_deref(), tx.to.as_deref(), &contract_key) {
            Flow::Inbound => bucket.volume_received += amount,
            Flow::Outbound => {
                bucket.volume += amount;
                if let Some(parent) = tx.hash.as_deref().filter(|h| !h.is_empty()) {
                    groups
                        .entry(parent.to_string())
                        .or_default()
                        .push(SettlementLeg { amount, day });
                }
            }
            Flow::Unrelated => {}
        }
    }

    debug!(
        "{} day buckets, {} settlement batches",
        days.len(),
        groups.len()
    );

    // Credit each accepted fee to the day of its matched leg
    for legs in groups.values() {
        let amounts: Vec<f64> = legs.iter().map(|leg| leg.amount).collect();
        let Some(split) = attribute_fee(&amounts, config.fee_rate, config.fee_match_tolerance)
        else {
            continue;
        };
        if let Some(bucket) = days.get_mut(&legs[split.leg].day) {
            bucket.fees += split.fee;
            bucket.volume_redistributed += split.redistributed;
        }
    }

    // Ascending scan turning day buckets into running totals
    let mut cumulative_wallets: HashSet<String> = HashSet::new();
    let mut transactions_total = 0u64;
    let mut gas_wei_total = 0u128;
    let mut volume_total = 0.0;
    let mut received_total = 0.0;
    let mut redistributed_total = 0.0;
    let mut fees_total = 0.0;

    days.into_iter()
        .map(|(date, bucket)| {
            cumulative_wallets.extend(bucket.wallets);
            transactions_total += bucket.transactions;
            gas_wei_total = gas_wei_total.saturating_add(bucket.gas_wei);
            volume_total += bucket.volume;
            received_total += bucket.volume_received;
            redistributed_total += bucket.volume_redistributed;
            fees_total += bucket.fees;

            TimeSeriesPoint {
                date,
                unique_wallets: cumulative_wallets.len() as u64,
                transactions: transactions_total,
                gas_cost: wei_to_token(gas_wei_total, config.token_decimals),
                volume: volume_total,
                volume_received: received_total,
                volume_redistributed: redistributed_total,
                fees: fees_total,
            }
        })
        .collect()
}

/// UTC calendar day of a unix-seconds timestamp string
fn day_key(time_stamp: Option<&str>) -> Option<NaiveDate> {
    let secs: i64 = time_stamp?.trim().parse().ok()?;
    Some(DateTime::from_timestamp(secs, 0)?.date_naive())
}
