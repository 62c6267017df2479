//! Building blocks for scripted trading sessions.
//!
//! A session threads a [`TxnLog`] through its steps instead of keeping a
//! global transaction buffer. Steps are generic over [`ViewClient`] and
//! [`TransactionSubmitter`] so they run against a node or a test double
//! alike. The `trade` demo is the main consumer.

pub mod report;

use crate::client::EconiaClient;
use crate::error::SdkError;
use crate::program::{
    build_place_limit_order_user_entry, build_place_market_order_user_entry, EntryFunctionPayload,
    MarketCoins, PlaceLimitOrderParams, PlaceMarketOrderParams, Restriction, SelfMatchBehavior,
};
use crate::shared::{AccountAddress, Side};
use crate::transaction::{TransactionSubmitter, TxnHash};
use crate::view::ViewClient;

// ─── TxnLog ──────────────────────────────────────────────────────────────────

/// A transaction executed during a session, with the reason it was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedTxn {
    pub hash: TxnHash,
    pub reason: String,
}

/// Transactions executed since the last flush, first to last.
#[derive(Debug, Default)]
pub struct TxnLog {
    entries: Vec<LoggedTxn>,
}

impl TxnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, hash: TxnHash, reason: impl Into<String>) {
        self.entries.push(LoggedTxn {
            hash,
            reason: reason.into(),
        });
    }

    /// Hand back everything recorded so far and start over empty.
    pub fn flush(&mut self) -> Vec<LoggedTxn> {
        std::mem::take(&mut self.entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Submit `payload`, wait for it to commit and record it under `reason`.
///
/// Nothing is recorded when the submission fails.
pub async fn exec<S: TransactionSubmitter>(
    submitter: &S,
    payload: &EntryFunctionPayload,
    reason: impl Into<String>,
    log: &mut TxnLog,
) -> Result<TxnHash, SdkError> {
    let reason = reason.into();
    let hash = submitter.submit_and_wait(payload).await?;
    tracing::debug!(%hash, reason = %reason, "executed");
    log.record(hash.clone(), reason);
    Ok(hash)
}

// ─── WorkflowConfig ──────────────────────────────────────────────────────────

/// Minimum order size in lots when `MIN_SIZE` is unset.
pub const DEFAULT_MIN_SIZE: u64 = 500;

/// Where a session runs and which market parameters it (re-)uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub node_url: String,
    pub faucet_url: String,
    pub econia_address: AccountAddress,
    /// Package that publishes the example coins and their `mint` entry.
    pub faucet_address: AccountAddress,
    /// Deployer key, needed only to mark the market as recognized.
    pub econia_key: Option<String>,
    /// Lots
    pub min_size: u64,
}

impl WorkflowConfig {
    /// Read `APTOS_NODE_URL`, `APTOS_FAUCET_URL`, `ECONIA_ADDR`,
    /// `FAUCET_ADDR`, `ECONIA_KEY` and `MIN_SIZE` from the process
    /// environment.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`WorkflowConfig::from_env`] with an arbitrary source. Unset
    /// or blank values fall back to the local deployment. `ECONIA_KEY=.`
    /// selects the local deployer key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let econia_address = AccountAddress::from_hex(
            &get("ECONIA_ADDR").unwrap_or_else(|| crate::network::LOCAL_ECONIA_ADDRESS.into()),
        )?;
        let faucet_address = AccountAddress::from_hex(
            &get("FAUCET_ADDR").unwrap_or_else(|| crate::network::LOCAL_FAUCET_ADDRESS.into()),
        )?;
        let econia_key = get("ECONIA_KEY").map(|key| {
            if key == "." {
                crate::network::LOCAL_ECONIA_KEY.to_string()
            } else {
                key
            }
        });
        let min_size = match get("MIN_SIZE") {
            Some(raw) => parse_min_size(&raw)?,
            None => DEFAULT_MIN_SIZE,
        };

        Ok(Self {
            node_url: get("APTOS_NODE_URL")
                .unwrap_or_else(|| crate::network::DEFAULT_NODE_URL.into()),
            faucet_url: get("APTOS_FAUCET_URL")
                .unwrap_or_else(|| crate::network::DEFAULT_FAUCET_URL.into()),
            econia_address,
            faucet_address,
            econia_key,
            min_size,
        })
    }
}

/// Parse a minimum order size. Zero lots is rejected.
pub fn parse_min_size(raw: &str) -> Result<u64, SdkError> {
    let size: u64 = raw
        .trim()
        .parse()
        .map_err(|_| SdkError::Validation(format!("minimum size must be an integer: {raw}")))?;
    if size == 0 {
        return Err(SdkError::Validation(
            "minimum size must be at least 1 lot".to_string(),
        ));
    }
    Ok(size)
}

// ─── Order steps ─────────────────────────────────────────────────────────────

/// One trader on one market: who signs, which coins and which integrator.
pub struct Trader<'a, S> {
    pub econia: &'a AccountAddress,
    pub coins: &'a MarketCoins,
    pub submitter: &'a S,
    pub market_id: u64,
}

impl<'a, S: TransactionSubmitter> Trader<'a, S> {
    /// Place a plain limit order. Self matches cancel the resting maker.
    pub async fn place_limit_order(
        &self,
        side: Side,
        size: u64,
        price: u64,
        log: &mut TxnLog,
    ) -> Result<TxnHash, SdkError> {
        let payload = build_place_limit_order_user_entry(
            self.econia,
            self.coins,
            &PlaceLimitOrderParams {
                market_id: self.market_id,
                integrator: *self.econia,
                side,
                size,
                price,
                restriction: Restriction::NoRestriction,
                self_match_behavior: SelfMatchBehavior::CancelMaker,
            },
        );
        let reason = format!(
            "Place limit {} order ({size} lots) ({price} ticks/lot)",
            side_note(side)
        );
        exec(self.submitter, &payload, reason, log).await
    }

    pub async fn place_market_order(
        &self,
        direction: Side,
        size: u64,
        log: &mut TxnLog,
    ) -> Result<TxnHash, SdkError> {
        let payload = build_place_market_order_user_entry(
            self.econia,
            self.coins,
            &PlaceMarketOrderParams {
                market_id: self.market_id,
                integrator: *self.econia,
                direction,
                size,
                self_match_behavior: SelfMatchBehavior::CancelMaker,
            },
        );
        let reason = format!("Place market {} order ({size} lots)", side_note(direction));
        exec(self.submitter, &payload, reason, log).await
    }

    /// Quote both sides `narrowing` ticks inside the current best prices.
    ///
    /// An empty side is quoted at its fallback price instead. Returns the
    /// best prices after both orders are placed.
    pub async fn place_limit_orders_at_market<V: ViewClient>(
        &self,
        client: &EconiaClient<V>,
        size: u64,
        fallback: (u64, u64),
        narrowing: u64,
        log: &mut TxnLog,
    ) -> Result<(Option<u64>, Option<u64>), SdkError> {
        let best = client.orderbooks().best_prices(self.market_id).await?;
        let (bid_price, ask_price) = narrowed_prices(best, fallback, narrowing);
        self.place_limit_order(Side::Bid, size, bid_price, log).await?;
        self.place_limit_order(Side::Ask, size, ask_price, log).await?;
        client.orderbooks().best_prices(self.market_id).await
    }
}

/// Prices that improve on `best` by `narrowing` ticks on each side.
///
/// `best` and `fallback` are `(bid, ask)`. Narrowing saturates, so an ask
/// never drops below zero and a bid never wraps.
pub fn narrowed_prices(
    best: (Option<u64>, Option<u64>),
    fallback: (u64, u64),
    narrowing: u64,
) -> (u64, u64) {
    let bid = best
        .0
        .map_or(fallback.0, |price| price.saturating_add(narrowing));
    let ask = best
        .1
        .map_or(fallback.1, |price| price.saturating_sub(narrowing));
    (bid, ask)
}

fn side_note(side: Side) -> &'static str {
    match side {
        Side::Bid => "BID/BUY",
        Side::Ask => "ASK/SELL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::TypeTag;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Hands out sequential hashes and remembers what it was given.
    #[derive(Default)]
    struct Recording {
        sent: RefCell<Vec<EntryFunctionPayload>>,
        fail: bool,
    }

    impl TransactionSubmitter for Recording {
        async fn submit_and_wait(
            &self,
            payload: &EntryFunctionPayload,
        ) -> Result<TxnHash, SdkError> {
            if self.fail {
                return Err(crate::error::TxnError::Rejected {
                    hash: "0xdead".to_string(),
                    vm_status: "ABORTED".to_string(),
                }
                .into());
            }
            let mut sent = self.sent.borrow_mut();
            sent.push(payload.clone());
            Ok(TxnHash::new(format!("0x{:02x}", sent.len())))
        }
    }

    fn coins() -> MarketCoins {
        let faucet = AccountAddress::from_hex("0xf").unwrap();
        MarketCoins::new(
            TypeTag::struct_tag(&faucet, "example_rocket", "ExampleRocket"),
            TypeTag::struct_tag(&faucet, "example_poop", "ExamplePoop"),
        )
    }

    #[test]
    fn test_txn_log_flush_drains() {
        let mut log = TxnLog::new();
        assert!(log.is_empty());
        log.record(TxnHash::new("0x1"), "first");
        log.record(TxnHash::new("0x2"), "second");
        assert_eq!(log.len(), 2);

        let flushed = log.flush();
        assert_eq!(flushed.len(), 2);
        assert_eq!(flushed[0].reason, "first");
        assert_eq!(flushed[1].hash.as_str(), "0x2");
        assert!(log.is_empty());
        assert!(log.flush().is_empty());
    }

    #[test]
    fn test_exec_records_on_success_only() {
        let mut log = TxnLog::new();
        let payload = crate::program::build_cancel_all_orders_user(
            &AccountAddress::default(),
            1,
            Side::Ask,
        );

        let ok = Recording::default();
        let hash = tokio_test::block_on(exec(&ok, &payload, "Cancel all ASKS", &mut log)).unwrap();
        assert_eq!(hash.as_str(), "0x01");

        let failing = Recording {
            fail: true,
            ..Default::default()
        };
        assert!(tokio_test::block_on(exec(&failing, &payload, "again", &mut log)).is_err());

        let flushed = log.flush();
        assert_eq!(flushed.len(), 1);
        assert_eq!(flushed[0].reason, "Cancel all ASKS");
    }

    #[test]
    fn test_trader_reasons() {
        let econia = AccountAddress::from_hex("0xe").unwrap();
        let coins = coins();
        let submitter = Recording::default();
        let trader = Trader {
            econia: &econia,
            coins: &coins,
            submitter: &submitter,
            market_id: 3,
        };
        let mut log = TxnLog::new();
        tokio_test::block_on(trader.place_limit_order(Side::Bid, 1000, 1000, &mut log)).unwrap();
        tokio_test::block_on(trader.place_market_order(Side::Ask, 500, &mut log)).unwrap();

        let reasons: Vec<String> = log.flush().into_iter().map(|t| t.reason).collect();
        assert_eq!(
            reasons,
            vec![
                "Place limit BID/BUY order (1000 lots) (1000 ticks/lot)",
                "Place market ASK/SELL order (500 lots)",
            ]
        );
        let sent = submitter.sent.borrow();
        assert_eq!(sent[0].function, "place_limit_order_user_entry");
        assert_eq!(sent[1].function, "place_market_order_user_entry");
    }

    #[test]
    fn test_narrowed_prices() {
        assert_eq!(narrowed_prices((None, None), (1000, 2000), 1), (1000, 2000));
        assert_eq!(
            narrowed_prices((Some(1000), Some(2000)), (1, 9), 1),
            (1001, 1999)
        );
        assert_eq!(narrowed_prices((Some(5), None), (1, 9), 2), (7, 9));
        assert_eq!(narrowed_prices((None, Some(0)), (1, 9), 1), (1, 0));
        assert_eq!(narrowed_prices((Some(u64::MAX), None), (1, 9), 1).0, u64::MAX);
    }

    #[test]
    fn test_config_defaults() {
        let config = WorkflowConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.node_url, crate::network::DEFAULT_NODE_URL);
        assert_eq!(config.faucet_url, crate::network::DEFAULT_FAUCET_URL);
        assert_eq!(
            config.econia_address,
            AccountAddress::from_hex(crate::network::LOCAL_ECONIA_ADDRESS).unwrap()
        );
        assert_eq!(config.econia_key, None);
        assert_eq!(config.min_size, DEFAULT_MIN_SIZE);
    }

    #[test]
    fn test_config_overrides() {
        let vars: HashMap<&str, &str> = [
            ("APTOS_NODE_URL", "https://node/v1"),
            ("ECONIA_ADDR", "0xc0de"),
            ("ECONIA_KEY", "."),
            ("MIN_SIZE", " 250 "),
            ("APTOS_FAUCET_URL", "  "),
        ]
        .into_iter()
        .collect();
        let config =
            WorkflowConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.node_url, "https://node/v1");
        assert_eq!(config.faucet_url, crate::network::DEFAULT_FAUCET_URL);
        assert_eq!(config.econia_address.as_bytes()[31], 0xde);
        assert_eq!(
            config.econia_key.as_deref(),
            Some(crate::network::LOCAL_ECONIA_KEY)
        );
        assert_eq!(config.min_size, 250);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(WorkflowConfig::from_lookup(|k| (k == "MIN_SIZE").then(|| "0".into())).is_err());
        assert!(WorkflowConfig::from_lookup(|k| (k == "MIN_SIZE").then(|| "-5".into())).is_err());
        assert!(
            WorkflowConfig::from_lookup(|k| (k == "ECONIA_ADDR").then(|| "0xzz".into())).is_err()
        );
    }
}
