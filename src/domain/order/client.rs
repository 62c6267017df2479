//! Orders sub-client: open orders and market order ID views.

use crate::client::EconiaClient;
use crate::decode;
use crate::domain::order::{OpenOrders, Order};
use crate::error::SdkError;
use crate::program::constants::MARKET_MODULE;
use crate::shared::{Limit, MarketOrderId, Side};
use crate::view::ViewClient;

/// Sub-client for open-order views on the `market` module.
pub struct Orders<'a, V> {
    pub(crate) client: &'a EconiaClient<V>,
}

impl<'a, V: ViewClient> Orders<'a, V> {
    /// A single open order. The view aborts on chain if the order is not on
    /// the book; check with [`Orders::has_open_order`] first.
    pub async fn get_open_order(
        &self,
        market_id: u64,
        market_order_id: MarketOrderId,
    ) -> Result<Order, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_open_order",
                &[],
                &[market_id.to_string(), market_order_id.to_string()],
            )
            .await?;
        Ok(decode::decode_order(&value)?)
    }

    /// Up to `n_asks_max` asks and `n_bids_max` bids, best price first.
    pub async fn get_open_orders(
        &self,
        market_id: u64,
        n_asks_max: Limit,
        n_bids_max: Limit,
    ) -> Result<OpenOrders, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_open_orders",
                &[],
                &[market_id.to_string(), n_asks_max.to_arg(), n_bids_max.to_arg()],
            )
            .await?;
        Ok(decode::decode_orders_collection(&value)?)
    }

    pub async fn get_open_orders_all(&self, market_id: u64) -> Result<OpenOrders, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_open_orders_all",
                &[],
                &[market_id.to_string()],
            )
            .await?;
        Ok(decode::decode_orders_collection(&value)?)
    }

    pub async fn has_open_order(
        &self,
        market_id: u64,
        market_order_id: MarketOrderId,
    ) -> Result<bool, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "has_open_order",
                &[],
                &[market_id.to_string(), market_order_id.to_string()],
            )
            .await?;
        Ok(decode::decode_bool(&value)?)
    }

    // ── Market order ID accessors (on-chain) ─────────────────────────────
    //
    // `MarketOrderId::counter` / `price` compute the same values locally.

    pub async fn market_order_id_counter(
        &self,
        market_order_id: MarketOrderId,
    ) -> Result<u64, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_market_order_id_counter",
                &[],
                &[market_order_id.to_string()],
            )
            .await?;
        Ok(decode::decode_u64(&value)?)
    }

    pub async fn market_order_id_price(
        &self,
        market_order_id: MarketOrderId,
    ) -> Result<u64, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_market_order_id_price",
                &[],
                &[market_order_id.to_string()],
            )
            .await?;
        Ok(decode::decode_u64(&value)?)
    }

    pub async fn market_order_id_side(
        &self,
        market_order_id: MarketOrderId,
    ) -> Result<Side, SdkError> {
        let value = self
            .client
            .view_one(
                MARKET_MODULE,
                "get_market_order_id_side",
                &[],
                &[market_order_id.to_string()],
            )
            .await?;
        Ok(Side::from_ask_flag(decode::decode_bool(&value)?))
    }
}
