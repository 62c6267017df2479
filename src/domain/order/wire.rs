//! Wire types for the `market::get_open_order(s)` view returns.

use crate::shared::serde_util;
use serde::Deserialize;

/// One open order as rendered by the node.
#[derive(Deserialize, Debug, Clone)]
pub struct OpenOrderView {
    #[serde(with = "serde_util::u64_str")]
    pub custodian_id: u64,
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    #[serde(with = "serde_util::u128_str")]
    pub market_order_id: u128,
    #[serde(with = "serde_util::u64_str")]
    pub price: u64,
    /// `true` for asks.
    pub side: bool,
    #[serde(with = "serde_util::u64_str")]
    pub size: u64,
    pub user: String,
}

/// Return of `market::get_open_orders` / `get_open_orders_all`.
#[derive(Deserialize, Debug, Clone)]
pub struct OpenOrdersView {
    pub asks: Vec<OpenOrderView>,
    pub bids: Vec<OpenOrderView>,
}
