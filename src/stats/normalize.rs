//! Value and address normalization shared by both computation passes.

use std::collections::HashSet;

/// Convert a base-unit decimal string into a token amount.
///
/// Absent, empty, `"0"`, and non-numeric values all mean "no transfer"
/// and return `None`; callers skip balance and classification work for
/// such records entirely.
pub fn to_token_units(raw: Option<&str>, decimals: u32) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() || raw == "0" {
        return None;
    }
    let units: u128 = raw.parse().ok()?;
    Some(wei_to_token(units, decimals))
}

/// Convert an already-parsed base-unit amount into a token amount
pub fn wei_to_token(units: u128, decimals: u32) -> f64 {
    units as f64 / 10f64.powi(decimals as i32)
}

/// Parse an optional decimal-string field, treating anything malformed as absent
pub fn parse_units(raw: Option<&str>) -> Option<u128> {
    raw?.trim().parse().ok()
}

/// Addresses compare case-insensitively; fold before any equality check
pub fn normalize_address(address: &str) -> String {
    address.to_lowercase()
}

/// Track both endpoints of a record in a wallet set
pub fn record_wallets(wallets: &mut HashSet<String>, from: Option<&str>, to: Option<&str>) {
    if let Some(from) = from.filter(|s| !s.is_empty()) {
        wallets.insert(normalize_address(from));
    }
    if let Some(to) = to.filter(|s| !s.is_empty()) {
        wallets.insert(normalize_address(to));
    }
}

/// Direction of a transfer relative to the watched contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Value flowing into the contract (a bet)
    Inbound,
    /// Value flowing out of the contract (a payout leg)
    Outbound,
    /// Neither endpoint is the contract
    Unrelated,
}

impl Flow {
    /// Classify a transfer against the (already lowercased) contract key.
    ///
    /// The checks are ordered: a transfer from the contract to itself
    /// counts as inbound only, never both.
    pub fn classify(from: Option<&str>, to: Option<&str>, contract_key: &str) -> Self {
        let to_key = to.map(normalize_address).unwrap_or_default();
        let from_key = from.map(normalize_address).unwrap_or_default();

        if to_key == contract_key {
            Flow::Inbound
        } else if from_key == contract_key {
            Flow::Outbound
        } else {
            Flow::Unrelated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_TOKEN: &str = "1000000000000000000";

    #[test]
    fn test_to_token_units_whole_token() {
        assert_eq!(to_token_units(Some(ONE_TOKEN), 18), Some(1.0));
    }

    #[test]
    fn test_to_token_units_skips_no_transfer() {
        assert_eq!(to_token_units(None, 18), None);
        assert_eq!(to_token_units(Some(""), 18), None);
        assert_eq!(to_token_units(Some("0"), 18), None);
    }

    #[test]
    fn test_to_token_units_skips_malformed() {
        assert_eq!(to_token_units(Some("abc"), 18), None);
        assert_eq!(to_token_units(Some("-5"), 18), None);
        assert_eq!(to_token_units(Some("1.5"), 18), None);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units(Some("21000")), Some(21000));
        assert_eq!(parse_units(Some("garbage")), None);
        assert_eq!(parse_units(None), None);
    }

    #[test]
    fn test_classify_directions() {
        let contract = "0xcontract";
        assert_eq!(
            Flow::classify(Some("0xAA"), Some("0xCONTRACT"), contract),
            Flow::Inbound
        );
        assert_eq!(
            Flow::classify(Some("0xContract"), Some("0xBB"), contract),
            Flow::Outbound
        );
        assert_eq!(
            Flow::classify(Some("0xAA"), Some("0xBB"), contract),
            Flow::Unrelated
        );
    }

    #[test]
    fn test_classify_self_transfer_is_inbound_only() {
        let contract = "0xcontract";
        assert_eq!(
            Flow::classify(Some("0xcontract"), Some("0xcontract"), contract),
            Flow::Inbound
        );
    }

    #[test]
    fn test_classify_missing_endpoints() {
        assert_eq!(Flow::classify(None, None, "0xcontract"), Flow::Unrelated);
    }

    #[test]
    fn test_record_wallets_dedups_case_insensitively() {
        let mut wallets = HashSet::new();
        record_wallets(&mut wallets, Some("0xAA"), Some("0xBB"));
        record_wallets(&mut wallets, Some("0xaa"), None);
        record_wallets(&mut wallets, Some(""), None);
        assert_eq!(wallets.len(), 2);
    }
}
