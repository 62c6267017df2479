//! Conversions: market account wire types → domain types.

use super::wire;
use super::{EventHandleCreationNumbers, MarketAccount, OrderRef};
use crate::shared::MarketOrderId;

impl From<wire::OrderRefView> for OrderRef {
    fn from(raw: wire::OrderRefView) -> Self {
        OrderRef {
            market_order_id: MarketOrderId::new(raw.market_order_id),
            size: raw.size,
        }
    }
}

impl From<wire::MarketAccountView> for MarketAccount {
    fn from(raw: wire::MarketAccountView) -> Self {
        MarketAccount {
            market_id: raw.market_id,
            custodian_id: raw.custodian_id,
            base_available: raw.base_available,
            base_ceiling: raw.base_ceiling,
            base_total: raw.base_total,
            quote_available: raw.quote_available,
            quote_ceiling: raw.quote_ceiling,
            quote_total: raw.quote_total,
            asks: raw.asks.into_iter().map(OrderRef::from).collect(),
            bids: raw.bids.into_iter().map(OrderRef::from).collect(),
        }
    }
}

impl From<wire::HandleCreationNumbersView> for EventHandleCreationNumbers {
    fn from(raw: wire::HandleCreationNumbersView) -> Self {
        EventHandleCreationNumbers {
            cancel_order_events: raw.cancel_order_events_handle_creation_num,
            change_order_size_events: raw.change_order_size_events_handle_creation_num,
            fill_events: raw.fill_events_handle_creation_num,
            place_limit_order_events: raw.place_limit_order_events_handle_creation_num,
            place_market_order_events: raw.place_market_order_events_handle_creation_num,
        }
    }
}
