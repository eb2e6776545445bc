//! Lifetime aggregate statistics.

use super::fee_split::{attribute_fee, resolve_total_fees};
use super::normalize::{parse_units, record_wallets, to_token_units, wei_to_token, Flow};
use super::types::Stats;
use crate::explorer::types::{InternalTransaction, Transaction};
use crate::utils::config::StatsConfig;
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Derive lifetime statistics from the full transaction history.
///
/// One pass over each collection. Malformed or missing numeric fields
/// contribute nothing; the function never fails and an empty history
/// yields all-zero stats.
pub fn calculate_stats(
    transactions: &[Transaction],
    internal_transactions: &[InternalTransaction],
    config: &StatsConfig,
) -> Stats {
    let contract_key = config.contract_key();

    let mut wallets: HashSet<String> = HashSet::new();
    let mut total_gas_wei: u128 = 0;
    let mut total_transferred = 0.0;
    let mut bets_received = 0.0;
    let mut winnings_paid = 0.0;

    // Settlement batches keyed by parent transaction hash
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for tx in transactions {
        record_wallets(&mut wallets, tx.from.as_deref(), tx.to.as_deref());

        if let (Some(gas_used), Some(gas_price)) = (
            parse_units(tx.gas_used.as_deref()),
            parse_units(tx.gas_price.as_deref()),
        ) {
            total_gas_wei = total_gas_wei.saturating_add(gas_used.saturating_mul(gas_price));
        }

        let Some(amount) = to_token_units(tx.value.as_deref(), config.token_decimals) else {
            continue;
        };
        match Flow::classify(tx.from.as_deref(), tx.to.as_deref(), &contract_key) {
            Flow::Inbound => {
                total_transferred += amount;
                bets_received += amount;
            }
            Flow::Outbound => {
                total_transferred += amount;
            }
            Flow::Unrelated => {}
        }
    }

    for tx in internal_transactions {
        record_wallets(&mut wallets, tx.from.as_deref(), tx.to.as_deref());

        let Some(amount) = to_token_units(tx.value.as_deref(), config.token_decimals) else {
            continue;
        };
        match Flow::classify(tx.from.as_deref(), tx.to.as_deref(), &contract_key) {
            Flow::Inbound => {
                total_transferred += amount;
                bets_received += amount;
            }
            Flow::Outbound => {
                total_transferred += amount;
                winnings_paid += amount;
                if let Some(parent) = tx.hash.as_deref().filter(|h| !h.is_empty()) {
                    groups.entry(parent.to_string()).or_default().push(amount);
                }
            }
            Flow::Unrelated => {}
        }
    }

    let per_group_fees: f64 = groups
        .values()
        .filter_map(|amounts| attribute_fee(amounts, config.fee_rate, config.fee_match_tolerance))
        .map(|split| split.fee)
        .sum();

    debug!(
        "{} settlement batches, {:.6} attributed per-group",
        groups.len(),
        per_group_fees
    );

    let fees_generated = resolve_total_fees(
        per_group_fees,
        bets_received,
        config.fee_rate,
        config.fee_fallback_ratio,
    );

    Stats {
        unique_wallets: wallets.len() as u64,
        total_transactions: (transactions.len() + internal_transactions.len()) as u64,
        total_gas_used_chz: wei_to_token(total_gas_wei, config.token_decimals),
        total_chz_transferred: total_transferred,
        bets_received,
        winnings_redistributed: (winnings_paid - fees_generated).max(0.0),
        fees_generated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "0x6160C6e7c21a97d17323397598Aca532Aa8939C3";

    fn config() -> StatsConfig {
        StatsConfig::default()
    }

    fn chz(tokens: u64) -> Option<String> {
        Some(format!("{}000000000000000000", tokens))
    }

    fn external(from: &str, to: &str, value: Option<String>) -> Transaction {
        Transaction {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            value,
            ..Default::default()
        }
    }

    fn internal(from: &str, to: &str, value: Option<String>, hash: &str) -> InternalTransaction {
        InternalTransaction {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            value,
            hash: Some(hash.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_inbound_bet() {
        let txs = vec![external("0xAAA", CONTRACT, chz(1))];
        let stats = calculate_stats(&txs, &[], &config());

        assert_eq!(stats.bets_received, 1.0);
        assert_eq!(stats.total_chz_transferred, 1.0);
        assert_eq!(stats.unique_wallets, 2);
        assert_eq!(stats.total_transactions, 1);
    }

    #[test]
    fn test_gas_cost_needs_both_fields() {
        let mut tx = external("0xAAA", "0xBBB", None);
        tx.gas_used = Some("21000".to_string());
        // no gas price: cost contribution must stay zero
        let stats = calculate_stats(&[tx], &[], &config());
        assert_eq!(stats.total_gas_used_chz, 0.0);

        let mut tx = external("0xAAA", "0xBBB", None);
        tx.gas_used = Some("21000".to_string());
        tx.gas_price = Some("1000000000000".to_string());
        let stats = calculate_stats(&[tx], &[], &config());
        assert!((stats.total_gas_used_chz - 0.021).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_fields_contribute_nothing() {
        let tx = Transaction {
            from: Some("0xAAA".to_string()),
            to: Some(CONTRACT.to_string()),
            value: Some("not-a-number".to_string()),
            gas_used: Some("??".to_string()),
            gas_price: Some("1".to_string()),
            ..Default::default()
        };
        let stats = calculate_stats(&[tx], &[], &config());

        assert_eq!(stats.bets_received, 0.0);
        assert_eq!(stats.total_gas_used_chz, 0.0);
        // endpoints still count toward the wallet set
        assert_eq!(stats.unique_wallets, 2);
    }

    #[test]
    fn test_self_transfer_counts_inbound_once() {
        let txs = vec![external(CONTRACT, CONTRACT, chz(2))];
        let stats = calculate_stats(&txs, &[], &config());

        assert_eq!(stats.bets_received, 2.0);
        assert_eq!(stats.total_chz_transferred, 2.0);
        assert_eq!(stats.unique_wallets, 1);
    }

    #[test]
    fn test_settlement_batch_splits_fee_and_winnings() {
        let itxs = vec![
            internal(CONTRACT, "0xWIN", chz(19), "0xabc"),
            internal(CONTRACT, "0xFEE", chz(1), "0xabc"),
        ];
        let stats = calculate_stats(&[], &itxs, &config());

        assert_eq!(stats.fees_generated, 1.0);
        assert_eq!(stats.winnings_redistributed, 19.0);
        assert_eq!(stats.total_transactions, 2);
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        let stats = calculate_stats(&[], &[], &config());
        assert_eq!(stats, Stats::default());
    }
}
