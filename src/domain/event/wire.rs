//! Wire types for events returned by `GET /accounts/{address}/events/{creation_number}`.

use crate::shared::serde_util;
use serde::Deserialize;

/// Envelope the node wraps around every event.
#[derive(Deserialize, Debug, Clone)]
pub struct EventView<T> {
    #[serde(with = "serde_util::u64_str")]
    pub sequence_number: u64,
    #[serde(with = "serde_util::u64_str")]
    pub version: u64,
    pub data: T,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FillEventView {
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    #[serde(with = "serde_util::u64_str")]
    pub size: u64,
    #[serde(with = "serde_util::u64_str")]
    pub price: u64,
    pub maker_side: bool,
    pub maker: String,
    #[serde(with = "serde_util::u64_str")]
    pub maker_custodian_id: u64,
    #[serde(with = "serde_util::u128_str")]
    pub maker_order_id: u128,
    pub taker: String,
    #[serde(with = "serde_util::u64_str")]
    pub taker_custodian_id: u64,
    #[serde(with = "serde_util::u128_str")]
    pub taker_order_id: u128,
    #[serde(with = "serde_util::u64_str")]
    pub taker_quote_fees_paid: u64,
    #[serde(with = "serde_util::u64_str")]
    pub sequence_number_for_trade: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlaceLimitOrderEventView {
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    pub user: String,
    #[serde(with = "serde_util::u64_str")]
    pub custodian_id: u64,
    pub integrator: String,
    pub side: bool,
    #[serde(with = "serde_util::u64_str")]
    pub size: u64,
    #[serde(with = "serde_util::u64_str")]
    pub price: u64,
    #[serde(with = "serde_util::u8_any")]
    pub restriction: u8,
    #[serde(with = "serde_util::u8_any")]
    pub self_match_behavior: u8,
    #[serde(with = "serde_util::u64_str")]
    pub remaining_size: u64,
    #[serde(with = "serde_util::u128_str")]
    pub order_id: u128,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlaceMarketOrderEventView {
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    pub user: String,
    #[serde(with = "serde_util::u64_str")]
    pub custodian_id: u64,
    pub integrator: String,
    pub direction: bool,
    #[serde(with = "serde_util::u64_str")]
    pub size: u64,
    #[serde(with = "serde_util::u8_any")]
    pub self_match_behavior: u8,
    #[serde(with = "serde_util::u128_str")]
    pub order_id: u128,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChangeOrderSizeEventView {
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    #[serde(with = "serde_util::u128_str")]
    pub order_id: u128,
    pub user: String,
    #[serde(with = "serde_util::u64_str")]
    pub custodian_id: u64,
    pub side: bool,
    #[serde(with = "serde_util::u64_str")]
    pub new_size: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CancelOrderEventView {
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    #[serde(with = "serde_util::u128_str")]
    pub order_id: u128,
    pub user: String,
    #[serde(with = "serde_util::u64_str")]
    pub custodian_id: u64,
    #[serde(with = "serde_util::u8_any")]
    pub reason: u8,
}
