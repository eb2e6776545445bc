//! Fee-leg attribution inside a settlement batch.
//!
//! A settled pool pays its winners plus the protocol cut in one batch of
//! internal transfers sharing a parent transaction hash. Nothing in the
//! data marks which leg is the cut, so the leg closest to the theoretical
//! fee (within a relative tolerance band) is inferred to be it. False
//! negatives and false positives are both possible; callers treat an
//! unmatched group as carrying no fee and no redistributed winnings.

use log::debug;

/// Outcome of matching one settlement batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSplit {
    /// Index of the matched fee leg within the input slice
    pub leg: usize,

    /// Amount of the matched leg
    pub fee: f64,

    /// Everything else in the batch: winnings paid out
    pub redistributed: f64,
}

/// Match the fee leg of one group of payout amounts.
///
/// Returns `None` when no leg falls strictly inside the tolerance band
/// around `group_total * fee_rate`. Ties on the distance go to the
/// earliest leg in the input order.
pub fn attribute_fee(amounts: &[f64], fee_rate: f64, tolerance: f64) -> Option<FeeSplit> {
    let group_total: f64 = amounts.iter().sum();
    let expected_fee = group_total * fee_rate;

    let mut best: Option<(usize, f64)> = None;
    for (leg, &amount) in amounts.iter().enumerate() {
        let diff = (amount - expected_fee).abs();
        // Strict comparison keeps the earliest leg on a tie
        if best.map_or(true, |(_, best_diff)| diff < best_diff) {
            best = Some((leg, diff));
        }
    }

    let (leg, diff) = best?;
    if diff < expected_fee * tolerance {
        let fee = amounts[leg];
        Some(FeeSplit {
            leg,
            fee,
            redistributed: group_total - fee,
        })
    } else {
        debug!(
            "no fee leg within {:.0}% of expected {:.6} (closest diff {:.6})",
            tolerance * 100.0,
            expected_fee,
            diff
        );
        None
    }
}

/// Lifetime-scope fallback for fee attribution.
///
/// When the per-group matches sum to nothing, or to less than
/// `fallback_ratio` of the flat estimate, the flat estimate
/// (`bets_received * fee_rate`) replaces them wholesale. Daily series
/// keep their per-group results; only the lifetime total falls back.
pub fn resolve_total_fees(
    per_group_fees: f64,
    bets_received: f64,
    fee_rate: f64,
    fallback_ratio: f64,
) -> f64 {
    let flat_estimate = bets_received * fee_rate;
    if per_group_fees == 0.0 || per_group_fees < flat_estimate * fallback_ratio {
        debug!(
            "per-group fees {:.6} below threshold, using flat estimate {:.6}",
            per_group_fees, flat_estimate
        );
        flat_estimate
    } else {
        per_group_fees
    }
}
