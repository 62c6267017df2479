//! Wire types for the node's account and transaction endpoints.

use crate::shared::serde_util;
use serde::{Deserialize, Serialize};

/// `GET /accounts/{address}`
#[derive(Deserialize, Debug, Clone)]
pub struct AccountView {
    #[serde(with = "serde_util::u64_str")]
    pub sequence_number: u64,
    pub authentication_key: String,
}

/// `GET /` on the node API.
#[derive(Deserialize, Debug, Clone)]
pub struct LedgerInfoView {
    #[serde(with = "serde_util::u8_any")]
    pub chain_id: u8,
    #[serde(with = "serde_util::u64_str")]
    pub ledger_version: u64,
}

/// Body of `POST /transactions/encode_submission` (unsigned) and
/// `POST /transactions` (signed). Integers are decimal strings.
#[derive(Serialize, Debug, Clone)]
pub struct UserTransactionRequest {
    pub sender: String,
    pub sequence_number: String,
    pub max_gas_amount: String,
    pub gas_unit_price: String,
    pub expiration_timestamp_secs: String,
    pub payload: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureView>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SignatureView {
    #[serde(rename = "type")]
    pub kind: String,
    pub public_key: String,
    pub signature: String,
}

impl SignatureView {
    pub fn ed25519(public_key: &[u8], signature: &[u8]) -> Self {
        Self {
            kind: "ed25519_signature".to_string(),
            public_key: format!("0x{}", hex::encode(public_key)),
            signature: format!("0x{}", hex::encode(signature)),
        }
    }
}

/// Response of `POST /transactions`.
#[derive(Deserialize, Debug, Clone)]
pub struct PendingTransactionView {
    pub hash: String,
}

/// `GET /transactions/by_hash/{hash}`
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionView {
    PendingTransaction {
        hash: String,
    },
    UserTransaction {
        hash: String,
        #[serde(with = "serde_util::u64_str")]
        version: u64,
        success: bool,
        vm_status: String,
    },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_view_variants() {
        let pending: TransactionView = serde_json::from_str(
            r#"{"type": "pending_transaction", "hash": "0xab", "sender": "0x1"}"#,
        )
        .unwrap();
        assert!(matches!(pending, TransactionView::PendingTransaction { .. }));

        let committed: TransactionView = serde_json::from_str(
            r#"{"type": "user_transaction", "hash": "0xab", "version": "99",
                "success": false, "vm_status": "Move abort: E_NOT_ENOUGH"}"#,
        )
        .unwrap();
        match committed {
            TransactionView::UserTransaction {
                version, success, ..
            } => {
                assert_eq!(version, 99);
                assert!(!success);
            }
            other => panic!("unexpected {other:?}"),
        }

        let other: TransactionView =
            serde_json::from_str(r#"{"type": "block_metadata_transaction"}"#).unwrap();
        assert!(matches!(other, TransactionView::Other));
    }

    #[test]
    fn test_ledger_info() {
        let info: LedgerInfoView = serde_json::from_str(
            r#"{"chain_id": 4, "epoch": "2", "ledger_version": "1200",
                "node_role": "validator"}"#,
        )
        .unwrap();
        assert_eq!(info.chain_id, 4);
        assert_eq!(info.ledger_version, 1200);
    }

    #[test]
    fn test_signed_request_shape() {
        let request = UserTransactionRequest {
            sender: "0x1".to_string(),
            sequence_number: "0".to_string(),
            max_gas_amount: "200000".to_string(),
            gas_unit_price: "100".to_string(),
            expiration_timestamp_secs: "1700000000".to_string(),
            payload: serde_json::json!({}),
            signature: Some(SignatureView::ed25519(&[1, 2], &[3])),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["signature"]["type"], "ed25519_signature");
        assert_eq!(json["signature"]["public_key"], "0x0102");

        let unsigned = UserTransactionRequest {
            signature: None,
            ..request
        };
        let json = serde_json::to_value(&unsigned).unwrap();
        assert!(json.get("signature").is_none());
    }
}
