//! Transaction submission boundary.
//!
//! Builders in [`crate::program`] produce an [`EntryFunctionPayload`]; a
//! [`TransactionSubmitter`] signs it, sends it, and waits for the chain's
//! verdict. The native implementation lives in [`native`].

#[cfg(all(feature = "http", feature = "native-auth"))]
pub mod native;
pub mod wire;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

use crate::error::{DecodeError, SdkError};
use crate::program::EntryFunctionPayload;
use crate::shared::AccountAddress;
use wire::TransactionView;

/// Hash of a submitted transaction, `0x`-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxnHash(String);

impl TxnHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxnHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sign, submit and wait for one entry-function call.
///
/// Implementations report a committed-but-aborted transaction as
/// [`TxnError::Rejected`](crate::error::TxnError::Rejected) and a missed
/// deadline as [`TxnError::TimedOut`](crate::error::TxnError::TimedOut).
/// Neither is retried.
#[allow(async_fn_in_trait)]
pub trait TransactionSubmitter {
    async fn submit_and_wait(&self, payload: &EntryFunctionPayload) -> Result<TxnHash, SdkError>;
}

/// Where a transaction stands, as seen from `GET /transactions/by_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxnStatus {
    Pending,
    Committed { version: u64 },
    Failed { version: u64, vm_status: String },
}

impl TxnStatus {
    pub fn from_view(view: TransactionView) -> Result<Self, DecodeError> {
        match view {
            TransactionView::PendingTransaction { .. } => Ok(TxnStatus::Pending),
            TransactionView::UserTransaction {
                version,
                success: true,
                ..
            } => Ok(TxnStatus::Committed { version }),
            TransactionView::UserTransaction {
                version,
                success: false,
                vm_status,
                ..
            } => Ok(TxnStatus::Failed { version, vm_status }),
            TransactionView::Other => Err(DecodeError::MalformedResponse(
                "hash resolved to a non-user transaction".to_string(),
            )),
        }
    }
}

/// Poll `GET /transactions/by_hash` until the transaction commits, fails,
/// or `timeout` passes. Returns the ledger version on success.
#[cfg(feature = "http")]
pub async fn wait_for_transaction(
    http: &crate::http::NodeHttp,
    hash: &TxnHash,
    poll_interval: std::time::Duration,
    timeout: std::time::Duration,
) -> Result<u64, SdkError> {
    use crate::error::{HttpError, TxnError};

    let deadline = std::time::Instant::now() + timeout;
    loop {
        let status = match http.get_transaction_by_hash(hash.as_str()).await {
            Ok(view) => TxnStatus::from_view(view)?,
            // Not yet visible to this node.
            Err(HttpError::NotFound(_)) => TxnStatus::Pending,
            Err(e) => return Err(e.into()),
        };

        match status {
            TxnStatus::Committed { version } => {
                tracing::debug!(%hash, version, "transaction committed");
                return Ok(version);
            }
            TxnStatus::Failed { vm_status, .. } => {
                tracing::warn!(%hash, %vm_status, "transaction rejected");
                return Err(TxnError::Rejected {
                    hash: hash.to_string(),
                    vm_status,
                }
                .into());
            }
            TxnStatus::Pending => {}
        }

        if std::time::Instant::now() >= deadline {
            return Err(TxnError::TimedOut {
                hash: hash.to_string(),
            }
            .into());
        }
        futures_timer::Delay::new(poll_interval).await;
    }
}

/// Account address for a single-signer ed25519 key:
/// `sha3-256(public_key || 0x00)`.
pub fn derive_address(public_key: &[u8; 32]) -> AccountAddress {
    const ED25519_SCHEME: u8 = 0x00;
    let mut hasher = Sha3_256::new();
    hasher.update(public_key);
    hasher.update([ED25519_SCHEME]);
    AccountAddress::new(hasher.finalize().into())
}
