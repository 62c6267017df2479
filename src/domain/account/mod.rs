//! Market account domain: per-user balances and order references.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{MarketAccountId, MarketOrderId, Side};
use serde::{Deserialize, Serialize};

/// A user's order as referenced from their market account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRef {
    pub market_order_id: MarketOrderId,
    /// Lots of base.
    pub size: u64,
}

/// A user's market account on one market, under one custodian.
///
/// Balances are raw subunits of the respective coin. On chain
/// `available <= ceiling` and both are bounded by `total`; the SDK surfaces
/// the values without checking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketAccount {
    pub market_id: u64,
    pub custodian_id: u64,
    pub base_available: u64,
    pub base_ceiling: u64,
    pub base_total: u64,
    pub quote_available: u64,
    pub quote_ceiling: u64,
    pub quote_total: u64,
    pub asks: Vec<OrderRef>,
    pub bids: Vec<OrderRef>,
}

impl MarketAccount {
    pub fn market_account_id(&self) -> MarketAccountId {
        MarketAccountId::new(self.market_id, self.custodian_id)
    }

    pub fn orders(&self, side: Side) -> &[OrderRef] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }
}

/// Creation numbers of the event handles a market account emits to.
///
/// Only present once the user has registered a market account for the
/// market/custodian pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventHandleCreationNumbers {
    pub cancel_order_events: u64,
    pub change_order_size_events: u64,
    pub fill_events: u64,
    pub place_limit_order_events: u64,
    pub place_market_order_events: u64,
}
