//! Conversions: event wire types → domain events.

use super::wire;
use super::{
    CancelOrderEvent, ChangeOrderSizeEvent, EventRecord, FillEvent, PlaceLimitOrderEvent,
    PlaceMarketOrderEvent,
};
use crate::error::DecodeError;
use crate::program::types::{Restriction, SelfMatchBehavior};
use crate::shared::{AccountAddress, MarketOrderId, Side};

impl<W, T> TryFrom<wire::EventView<W>> for EventRecord<T>
where
    T: TryFrom<W, Error = DecodeError>,
{
    type Error = DecodeError;

    fn try_from(raw: wire::EventView<W>) -> Result<Self, Self::Error> {
        Ok(EventRecord {
            sequence_number: raw.sequence_number,
            version: raw.version,
            data: T::try_from(raw.data)?,
        })
    }
}

impl TryFrom<wire::FillEventView> for FillEvent {
    type Error = DecodeError;

    fn try_from(raw: wire::FillEventView) -> Result<Self, Self::Error> {
        Ok(FillEvent {
            market_id: raw.market_id,
            size: raw.size,
            price: raw.price,
            maker_side: Side::from_ask_flag(raw.maker_side),
            maker: AccountAddress::from_hex(&raw.maker)?,
            maker_custodian_id: raw.maker_custodian_id,
            maker_order_id: MarketOrderId::new(raw.maker_order_id),
            taker: AccountAddress::from_hex(&raw.taker)?,
            taker_custodian_id: raw.taker_custodian_id,
            taker_order_id: MarketOrderId::new(raw.taker_order_id),
            taker_quote_fees_paid: raw.taker_quote_fees_paid,
            sequence_number_for_trade: raw.sequence_number_for_trade,
        })
    }
}

impl TryFrom<wire::PlaceLimitOrderEventView> for PlaceLimitOrderEvent {
    type Error = DecodeError;

    fn try_from(raw: wire::PlaceLimitOrderEventView) -> Result<Self, Self::Error> {
        Ok(PlaceLimitOrderEvent {
            market_id: raw.market_id,
            user: AccountAddress::from_hex(&raw.user)?,
            custodian_id: raw.custodian_id,
            integrator: AccountAddress::from_hex(&raw.integrator)?,
            side: Side::from_ask_flag(raw.side),
            size: raw.size,
            price: raw.price,
            restriction: Restriction::try_from(raw.restriction)?,
            self_match_behavior: SelfMatchBehavior::try_from(raw.self_match_behavior)?,
            remaining_size: raw.remaining_size,
            order_id: MarketOrderId::new(raw.order_id),
        })
    }
}

impl TryFrom<wire::PlaceMarketOrderEventView> for PlaceMarketOrderEvent {
    type Error = DecodeError;

    fn try_from(raw: wire::PlaceMarketOrderEventView) -> Result<Self, Self::Error> {
        Ok(PlaceMarketOrderEvent {
            market_id: raw.market_id,
            user: AccountAddress::from_hex(&raw.user)?,
            custodian_id: raw.custodian_id,
            integrator: AccountAddress::from_hex(&raw.integrator)?,
            direction: Side::from_ask_flag(raw.direction),
            size: raw.size,
            self_match_behavior: SelfMatchBehavior::try_from(raw.self_match_behavior)?,
            order_id: MarketOrderId::new(raw.order_id),
        })
    }
}

impl TryFrom<wire::ChangeOrderSizeEventView> for ChangeOrderSizeEvent {
    type Error = DecodeError;

    fn try_from(raw: wire::ChangeOrderSizeEventView) -> Result<Self, Self::Error> {
        Ok(ChangeOrderSizeEvent {
            market_id: raw.market_id,
            order_id: MarketOrderId::new(raw.order_id),
            user: AccountAddress::from_hex(&raw.user)?,
            custodian_id: raw.custodian_id,
            side: Side::from_ask_flag(raw.side),
            new_size: raw.new_size,
        })
    }
}

impl TryFrom<wire::CancelOrderEventView> for CancelOrderEvent {
    type Error = DecodeError;

    fn try_from(raw: wire::CancelOrderEventView) -> Result<Self, Self::Error> {
        Ok(CancelOrderEvent {
            market_id: raw.market_id,
            order_id: MarketOrderId::new(raw.order_id),
            user: AccountAddress::from_hex(&raw.user)?,
            custodian_id: raw.custodian_id,
            reason: raw.reason,
        })
    }
}
