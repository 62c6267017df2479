//! Event domain: market-account events read from the user's event handles.
//!
//! Econia emits five event streams per market account. Their handle
//! creation numbers come from `user::get_market_event_handle_creation_numbers`;
//! the events themselves are read from the node's account event endpoint.

pub mod client;
mod convert;
pub mod wire;

use crate::program::types::{Restriction, SelfMatchBehavior};
use crate::shared::{AccountAddress, MarketOrderId, Side};
use serde::{Deserialize, Serialize};

/// An event with its position in the handle's stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord<T> {
    pub sequence_number: u64,
    pub version: u64,
    pub data: T,
}

/// Paging for event reads. Defaults to the node's own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventPage {
    pub start: Option<u64>,
    pub limit: Option<u16>,
}

/// Largest page the node serves for one event read.
pub const MAX_EVENT_PAGE: u16 = 100;

/// One fill between a maker and a taker. Emitted to both parties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FillEvent {
    pub market_id: u64,
    pub size: u64,
    pub price: u64,
    pub maker_side: Side,
    pub maker: AccountAddress,
    pub maker_custodian_id: u64,
    pub maker_order_id: MarketOrderId,
    pub taker: AccountAddress,
    pub taker_custodian_id: u64,
    pub taker_order_id: MarketOrderId,
    /// Quote subunits.
    pub taker_quote_fees_paid: u64,
    pub sequence_number_for_trade: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceLimitOrderEvent {
    pub market_id: u64,
    pub user: AccountAddress,
    pub custodian_id: u64,
    pub integrator: AccountAddress,
    pub side: Side,
    pub size: u64,
    pub price: u64,
    pub restriction: Restriction,
    pub self_match_behavior: SelfMatchBehavior,
    /// Size left on the book after matching, in lots.
    pub remaining_size: u64,
    pub order_id: MarketOrderId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceMarketOrderEvent {
    pub market_id: u64,
    pub user: AccountAddress,
    pub custodian_id: u64,
    pub integrator: AccountAddress,
    pub direction: Side,
    pub size: u64,
    pub self_match_behavior: SelfMatchBehavior,
    pub order_id: MarketOrderId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeOrderSizeEvent {
    pub market_id: u64,
    pub order_id: MarketOrderId,
    pub user: AccountAddress,
    pub custodian_id: u64,
    pub side: Side,
    pub new_size: u64,
}

/// `reason` is one of the `user::CANCEL_REASON_*` constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelOrderEvent {
    pub market_id: u64,
    pub order_id: MarketOrderId,
    pub user: AccountAddress,
    pub custodian_id: u64,
    pub reason: u8,
}

/// All fills that share the taker order ID of the last fill, oldest first.
pub fn fills_for_last_taker(fills: &[FillEvent]) -> Vec<&FillEvent> {
    match fills.last() {
        Some(last) => fills
            .iter()
            .filter(|f| f.taker_order_id == last.taker_order_id)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(taker_order_id: u128, price: u64) -> FillEvent {
        FillEvent {
            market_id: 1,
            size: 1,
            price,
            maker_side: Side::Ask,
            maker: AccountAddress::default(),
            maker_custodian_id: 0,
            maker_order_id: MarketOrderId::new(1),
            taker: AccountAddress::default(),
            taker_custodian_id: 0,
            taker_order_id: MarketOrderId::new(taker_order_id),
            taker_quote_fees_paid: 0,
            sequence_number_for_trade: 0,
        }
    }

    #[test]
    fn test_fills_for_last_taker_includes_first_event() {
        let fills = vec![fill(9, 100), fill(8, 101), fill(9, 102)];
        let last: Vec<u64> = fills_for_last_taker(&fills).iter().map(|f| f.price).collect();
        assert_eq!(last, vec![100, 102]);
    }

    #[test]
    fn test_fills_for_last_taker_empty() {
        assert!(fills_for_last_taker(&[]).is_empty());
    }
}
