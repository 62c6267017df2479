//! Orderbook domain: aggregated price levels.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Aggregate resting volume at one price.
///
/// `price` is in ticks per lot, `size` in lots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: u64,
    pub size: u64,
}

/// Price levels for one market.
///
/// Bids are descending and asks ascending, exactly as the view returned
/// them; the SDK never re-sorts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceLevels {
    pub market_id: u64,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

impl PriceLevels {
    /// Highest bid level.
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Lowest ask level.
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// `(best bid price, best ask price)`.
    pub fn best_prices(&self) -> (Option<u64>, Option<u64>) {
        (
            self.best_bid().map(|l| l.price),
            self.best_ask().map(|l| l.price),
        )
    }

    /// Spread in ticks, if both sides are populated.
    pub fn spread(&self) -> Option<u64> {
        match self.best_prices() {
            (Some(bid), Some(ask)) => ask.checked_sub(bid),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
