//! Wire types for the `market::get_price_levels(_all)` view returns.

use crate::shared::serde_util;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct PriceLevelView {
    #[serde(with = "serde_util::u64_str")]
    pub price: u64,
    #[serde(with = "serde_util::u64_str")]
    pub size: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PriceLevelsView {
    pub asks: Vec<PriceLevelView>,
    pub bids: Vec<PriceLevelView>,
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
}
