//! Orderbooks sub-client: price levels and best prices.

use crate::client::EconiaClient;
use crate::decode;
use crate::domain::orderbook::PriceLevels;
use crate::error::SdkError;
use crate::program::constants::MARKET_MODULE;
use crate::shared::Limit;
use crate::view::ViewClient;

/// Sub-client for price-level views on the `market` module.
pub struct Orderbooks<'a, V> {
    pub(crate) client: &'a EconiaClient<V>,
}

impl<'a, V: ViewClient> Orderbooks<'a, V> {
    /// Up to `n_ask_levels_max` ask levels and `n_bid_levels_max` bid levels.
    pub async fn get_price_levels(
        &self,
        market_id: u64,
        n_ask_levels_max: Limit,
        n_bid_levels_max: Limit,
    ) -> Result<PriceLevels, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_price_levels",
                &[],
                &[
                    market_id.to_string(),
                    n_ask_levels_max.to_arg(),
                    n_bid_levels_max.to_arg(),
                ],
            )
            .await?;
        Ok(decode::decode_price_levels(&value)?)
    }

    pub async fn get_price_levels_all(&self, market_id: u64) -> Result<PriceLevels, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_price_levels_all",
                &[],
                &[market_id.to_string()],
            )
            .await?;
        Ok(decode::decode_price_levels(&value)?)
    }

    /// `(best bid, best ask)` in ticks per lot; only the top level of each
    /// side is requested.
    pub async fn best_prices(&self, market_id: u64) -> Result<(Option<u64>, Option<u64>), SdkError> {
        let levels = self
            .get_price_levels(market_id, Limit::AtMost(1), Limit::AtMost(1))
            .await?;
        Ok(levels.best_prices())
    }
}
