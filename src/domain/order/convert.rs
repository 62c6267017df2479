//! Conversions: open-order wire types → Order domain types.

use super::wire;
use super::{OpenOrders, Order};
use crate::error::DecodeError;
use crate::shared::{AccountAddress, MarketOrderId, Side};

impl TryFrom<wire::OpenOrderView> for Order {
    type Error = DecodeError;

    fn try_from(raw: wire::OpenOrderView) -> Result<Self, Self::Error> {
        Ok(Order {
            custodian_id: raw.custodian_id,
            market_id: raw.market_id,
            market_order_id: MarketOrderId::new(raw.market_order_id),
            price: raw.price,
            side: Side::from_ask_flag(raw.side),
            size: raw.size,
            user: AccountAddress::from_hex(&raw.user)?,
        })
    }
}

impl TryFrom<wire::OpenOrdersView> for OpenOrders {
    type Error = DecodeError;

    fn try_from(raw: wire::OpenOrdersView) -> Result<Self, Self::Error> {
        Ok(OpenOrders {
            bids: raw
                .bids
                .into_iter()
                .map(Order::try_from)
                .collect::<Result<_, _>>()?,
            asks: raw
                .asks
                .into_iter()
                .map(Order::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}
