//! Record and envelope types for the Etherscan-compatible explorer API.
//!
//! The explorer returns every numeric field as a decimal string and may
//! omit any of them. Records are therefore all-optional; the stats layer
//! decides what a missing field means.

use crate::utils::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// An external (top-level) transaction touching the watched address
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    /// Transfer amount as a base-unit decimal string
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub gas_used: Option<String>,

    #[serde(default)]
    pub gas_price: Option<String>,

    /// Unix seconds, as text
    #[serde(default)]
    pub time_stamp: Option<String>,

    #[serde(default)]
    pub hash: Option<String>,
}

/// An internal transfer triggered by an external call.
///
/// `hash` is the hash of the parent external transaction; the batch of
/// internal transfers sharing it is one settled pool. Internal transfers
/// are never charged gas on their own, so the gas fields of
/// [`Transaction`] have no counterpart here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTransaction {
    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub time_stamp: Option<String>,

    /// Parent-transaction key
    #[serde(default)]
    pub hash: Option<String>,
}

/// Response envelope wrapping every explorer answer
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// Message the explorer uses for an empty-but-valid result set
const NO_TRANSACTIONS: &str = "No transactions found";

impl Envelope {
    /// Triage the envelope into records, an empty page, or an upstream error.
    pub fn into_records<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        if self.status == "1" {
            serde_json::from_value(self.result)
                .map_err(|e| ApiError::InvalidResponse(format!("result field: {}", e)))
        } else if self.status == "0" && self.message == NO_TRANSACTIONS {
            Ok(Vec::new())
        } else {
            Err(ApiError::Upstream(format!(
                "{} (status {})",
                self.message, self.status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "1",
            "message": "OK",
            "result": [
                {"from": "0xAA", "to": "0xBB", "value": "10", "timeStamp": "1758931200"}
            ]
        }))
        .unwrap();

        let records: Vec<Transaction> = envelope.into_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].from.as_deref(), Some("0xAA"));
        assert_eq!(records[0].time_stamp.as_deref(), Some("1758931200"));
    }

    #[test]
    fn test_envelope_empty_but_valid() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "0",
            "message": "No transactions found",
            "result": []
        }))
        .unwrap();

        let records: Vec<Transaction> = envelope.into_records().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_envelope_upstream_error() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "0",
            "message": "Max rate limit reached",
            "result": serde_json::Value::Null
        }))
        .unwrap();

        let result: Result<Vec<Transaction>, _> = envelope.into_records();
        assert!(matches!(result, Err(ApiError::Upstream(_))));
    }

    #[test]
    fn test_envelope_success_with_bad_result_shape() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "1",
            "message": "OK",
            "result": "not an array"
        }))
        .unwrap();

        let result: Result<Vec<Transaction>, _> = envelope.into_records();
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[test]
    fn test_record_fields_all_optional() {
        let tx: Transaction = serde_json::from_value(json!({})).unwrap();
        assert!(tx.from.is_none());
        assert!(tx.value.is_none());
        assert!(tx.gas_used.is_none());
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let tx: InternalTransaction = serde_json::from_value(json!({
            "from": "0xAA",
            "hash": "0xparent",
            "blockNumber": "123",
            "traceId": "0_1"
        }))
        .unwrap();
        assert_eq!(tx.hash.as_deref(), Some("0xparent"));
    }
}
