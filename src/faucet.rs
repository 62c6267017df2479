//! Faucet client: funds fresh accounts with the chain's native coin.
//!
//! Example-coin minting goes through the `faucet::mint` entry function
//! instead; see [`crate::program::build_faucet_mint`].

use std::time::Duration;

use crate::error::SdkError;
use crate::http::NodeHttp;
use crate::shared::AccountAddress;
use crate::transaction::{wait_for_transaction, TxnHash};

/// Talks to a faucet service and waits on the node for its transactions.
#[derive(Clone)]
pub struct FaucetClient {
    faucet: NodeHttp,
    node: NodeHttp,
    wait_timeout: Duration,
}

impl FaucetClient {
    pub fn new(faucet_url: &str, node: NodeHttp) -> Self {
        Self {
            faucet: NodeHttp::new(faucet_url),
            node,
            wait_timeout: Duration::from_secs(60),
        }
    }

    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Mint `amount` octas to `address`, creating the account if needed.
    /// Returns once every funding transaction has committed.
    pub async fn fund_account(
        &self,
        address: &AccountAddress,
        amount: u64,
    ) -> Result<Vec<TxnHash>, SdkError> {
        let hashes: Vec<TxnHash> = self
            .faucet
            .mint(address, amount)
            .await?
            .into_iter()
            .map(|h| TxnHash::new(normalize_hash(&h)))
            .collect();
        tracing::debug!(%address, amount, count = hashes.len(), "faucet funded");

        for hash in &hashes {
            wait_for_transaction(&self.node, hash, Duration::from_millis(500), self.wait_timeout)
                .await?;
        }
        Ok(hashes)
    }
}

/// Some faucets return hashes without the `0x` prefix the node expects.
fn normalize_hash(raw: &str) -> String {
    if raw.starts_with("0x") {
        raw.to_string()
    } else {
        format!("0x{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hash() {
        assert_eq!(normalize_hash("abcd"), "0xabcd");
        assert_eq!(normalize_hash("0xabcd"), "0xabcd");
    }
}
