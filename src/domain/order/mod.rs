//! Order domain: open orders resting on a market's book.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{AccountAddress, MarketOrderId, Side};
use serde::{Deserialize, Serialize};

// ─── Order ───────────────────────────────────────────────────────────────────

/// An open order as reported by the `market::get_open_order(s)` views.
///
/// `price` is in ticks per lot and `size` in lots of the base asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub custodian_id: u64,
    pub market_id: u64,
    pub market_order_id: MarketOrderId,
    pub price: u64,
    pub side: Side,
    pub size: u64,
    pub user: AccountAddress,
}

// ─── OpenOrders ──────────────────────────────────────────────────────────────

/// Open orders on both sides of a market, in the order the view returned
/// them (best price first, then time priority).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenOrders {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
}

impl OpenOrders {
    pub fn side(&self, side: Side) -> &[Order] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// Asks first, then bids.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.asks.iter().chain(self.bids.iter())
    }

    pub fn find(&self, market_order_id: MarketOrderId) -> Option<&Order> {
        self.iter().find(|o| o.market_order_id == market_order_id)
    }

    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
