//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Transaction error: {0}")]
    Txn(#[from] TxnError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Account {account} is not registered for coin {coin}")]
    NotRegisteredForCoin {
        account: crate::shared::AccountAddress,
        coin: crate::shared::TypeTag,
    },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("BCS encoding error: {0}")]
    Bcs(#[from] bincode::Error),

    #[error("Scaling error: {0}")]
    Scaling(#[from] crate::shared::scaling::ScalingError),

    #[error("{0}")]
    Other(String),
}

/// Failures while turning raw view results into typed records.
///
/// Numeric parse failures are reported as `MalformedResponse`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::MalformedResponse(e.to_string())
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Transaction submission errors. Never retried by the SDK.
#[derive(Error, Debug)]
pub enum TxnError {
    #[error("Transaction {hash} rejected: {vm_status}")]
    Rejected { hash: String, vm_status: String },

    #[error("Timed out waiting for transaction {hash}")]
    TimedOut { hash: String },

    #[error("Signing failed: {0}")]
    Signing(String),
}
