//! Native submission: local ed25519 keys and a node-backed submitter.
//!
//! Only available with the `http` and `native-auth` features.

use std::time::Duration;

use async_lock::Mutex;
use solana_keypair::Keypair;
use solana_signer::Signer;

use crate::error::{SdkError, TxnError};
use crate::http::NodeHttp;
use crate::program::EntryFunctionPayload;
use crate::shared::AccountAddress;
use crate::transaction::wire::{SignatureView, UserTransactionRequest};
use crate::transaction::{
    derive_address, wait_for_transaction, TransactionSubmitter, TxnHash,
};

// ─── LocalAccount ────────────────────────────────────────────────────────────

/// An ed25519 key pair and the account address it controls.
pub struct LocalAccount {
    keypair: Keypair,
    address: AccountAddress,
}

impl LocalAccount {
    /// Fresh random key. The account does not exist on chain until funded.
    pub fn generate() -> Self {
        Self::from_secret(rand::random::<[u8; 32]>())
    }

    pub fn from_secret(secret: [u8; 32]) -> Self {
        let keypair = Keypair::new_from_array(secret);
        let address = derive_address(&keypair.pubkey().to_bytes());
        Self { keypair, address }
    }

    /// 32-byte private key as hex, `0x` prefix optional.
    pub fn from_private_key_hex(raw: &str) -> Result<Self, SdkError> {
        let digits = raw.trim().trim_start_matches("0x");
        let mut secret = [0u8; 32];
        hex::decode_to_slice(digits, &mut secret)
            .map_err(|e| TxnError::Signing(format!("private key: {e}")))?;
        Ok(Self::from_secret(secret))
    }

    pub fn address(&self) -> &AccountAddress {
        &self.address
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.keypair.pubkey().to_bytes()
    }

    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.keypair.sign_message(message).as_ref().to_vec()
    }
}

impl std::fmt::Debug for LocalAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalAccount")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

// ─── SubmitOptions ───────────────────────────────────────────────────────────

/// Gas and polling settings for [`NodeSubmitter`].
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    pub max_gas_amount: u64,
    /// Octas per gas unit
    pub gas_unit_price: u64,
    /// Seconds from now until the transaction expires
    pub expiration_secs: i64,
    pub poll_interval: Duration,
    /// How long to wait for a verdict before giving up
    pub wait_timeout: Duration,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            max_gas_amount: 100_000,
            gas_unit_price: 100,
            expiration_secs: 600,
            poll_interval: Duration::from_millis(500),
            wait_timeout: Duration::from_secs(60),
        }
    }
}

// ─── NodeSubmitter ───────────────────────────────────────────────────────────

/// Submits transactions signed by one [`LocalAccount`] through a node.
///
/// Submissions from the same submitter are serialized so each one reads a
/// fresh sequence number.
pub struct NodeSubmitter {
    http: NodeHttp,
    account: LocalAccount,
    options: SubmitOptions,
    in_flight: Mutex<()>,
}

impl NodeSubmitter {
    pub fn new(http: NodeHttp, account: LocalAccount) -> Self {
        Self {
            http,
            account,
            options: SubmitOptions::default(),
            in_flight: Mutex::new(()),
        }
    }

    pub fn with_options(mut self, options: SubmitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn account(&self) -> &LocalAccount {
        &self.account
    }

    /// The account's next sequence number as the node sees it.
    pub async fn sequence_number(&self) -> Result<u64, SdkError> {
        Ok(self
            .http
            .get_account(self.account.address())
            .await?
            .sequence_number)
    }

    /// Chain ID of the network the node serves. Read fresh on every call;
    /// the node folds it into the signing message itself.
    pub async fn chain_id(&self) -> Result<u8, SdkError> {
        Ok(self.http.get_ledger_info().await?.chain_id)
    }

    /// Sign and send without waiting.
    pub async fn submit(&self, payload: &EntryFunctionPayload) -> Result<TxnHash, SdkError> {
        let sequence_number = self.sequence_number().await?;
        let expiration = chrono::Utc::now().timestamp() + self.options.expiration_secs;

        let mut request = UserTransactionRequest {
            sender: self.account.address().to_hex_literal(),
            sequence_number: sequence_number.to_string(),
            max_gas_amount: self.options.max_gas_amount.to_string(),
            gas_unit_price: self.options.gas_unit_price.to_string(),
            expiration_timestamp_secs: expiration.to_string(),
            payload: payload.to_json(),
            signature: None,
        };

        let signing_message = self.http.encode_submission(&request).await?;
        let message = hex::decode(signing_message.trim_start_matches("0x"))
            .map_err(|e| TxnError::Signing(format!("signing message: {e}")))?;
        request.signature = Some(SignatureView::ed25519(
            &self.account.public_key(),
            &self.account.sign(&message),
        ));

        let pending = self.http.submit_transaction(&request).await?;
        tracing::info!(
            hash = %pending.hash,
            sender = %self.account.address(),
            sequence_number,
            function = %payload.function_id(),
            "submitted transaction"
        );
        Ok(TxnHash::new(pending.hash))
    }

    /// Poll until the transaction commits. Returns its ledger version.
    pub async fn wait_for(&self, hash: &TxnHash) -> Result<u64, SdkError> {
        wait_for_transaction(
            &self.http,
            hash,
            self.options.poll_interval,
            self.options.wait_timeout,
        )
        .await
    }
}

impl TransactionSubmitter for NodeSubmitter {
    async fn submit_and_wait(&self, payload: &EntryFunctionPayload) -> Result<TxnHash, SdkError> {
        let _guard = self.in_flight.lock().await;
        let hash = self.submit(payload).await?;
        self.wait_for(&hash).await?;
        Ok(hash)
    }
}
