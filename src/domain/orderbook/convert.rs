//! Conversion: price-level wire types → PriceLevels.

use super::wire;
use super::{PriceLevel, PriceLevels};

impl From<wire::PriceLevelView> for PriceLevel {
    fn from(raw: wire::PriceLevelView) -> Self {
        PriceLevel {
            price: raw.price,
            size: raw.size,
        }
    }
}

impl From<wire::PriceLevelsView> for PriceLevels {
    fn from(raw: wire::PriceLevelsView) -> Self {
        PriceLevels {
            market_id: raw.market_id,
            bids: raw.bids.into_iter().map(PriceLevel::from).collect(),
            asks: raw.asks.into_iter().map(PriceLevel::from).collect(),
        }
    }
}
