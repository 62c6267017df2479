//! Wire types for the `user` module's market account views.

use crate::shared::serde_util;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct OrderRefView {
    #[serde(with = "serde_util::u128_str")]
    pub market_order_id: u128,
    #[serde(with = "serde_util::u64_str")]
    pub size: u64,
}

/// Return of `user::get_market_account` (and each element of
/// `user::get_market_accounts`).
#[derive(Deserialize, Debug, Clone)]
pub struct MarketAccountView {
    pub asks: Vec<OrderRefView>,
    pub bids: Vec<OrderRefView>,
    #[serde(with = "serde_util::u64_str")]
    pub base_available: u64,
    #[serde(with = "serde_util::u64_str")]
    pub base_ceiling: u64,
    #[serde(with = "serde_util::u64_str")]
    pub base_total: u64,
    #[serde(with = "serde_util::u64_str")]
    pub custodian_id: u64,
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    #[serde(with = "serde_util::u64_str")]
    pub quote_available: u64,
    #[serde(with = "serde_util::u64_str")]
    pub quote_ceiling: u64,
    #[serde(with = "serde_util::u64_str")]
    pub quote_total: u64,
}

/// Inner value of `user::get_market_event_handle_creation_numbers`.
#[derive(Deserialize, Debug, Clone)]
pub struct HandleCreationNumbersView {
    #[serde(with = "serde_util::u64_str")]
    pub cancel_order_events_handle_creation_num: u64,
    #[serde(with = "serde_util::u64_str")]
    pub change_order_size_events_handle_creation_num: u64,
    #[serde(with = "serde_util::u64_str")]
    pub fill_events_handle_creation_num: u64,
    #[serde(with = "serde_util::u64_str")]
    pub place_limit_order_events_handle_creation_num: u64,
    #[serde(with = "serde_util::u64_str")]
    pub place_market_order_events_handle_creation_num: u64,
}
