//! Events sub-client: the five per-market-account event streams.

use crate::client::EconiaClient;
use crate::decode;
use crate::domain::event::{
    wire, CancelOrderEvent, ChangeOrderSizeEvent, EventPage, EventRecord, FillEvent,
    PlaceLimitOrderEvent, PlaceMarketOrderEvent, MAX_EVENT_PAGE,
};
use crate::domain::account::EventHandleCreationNumbers;
use crate::error::{DecodeError, SdkError};
use crate::shared::AccountAddress;
use crate::view::{EventSource, ViewClient};
use serde::de::DeserializeOwned;

/// Sub-client for market-account events.
///
/// Every read first resolves the handle creation numbers for
/// `(user, market_id, custodian_id)`. A user without a market account has
/// no events, so each method returns an empty list in that case.
pub struct Events<'a, V> {
    pub(crate) client: &'a EconiaClient<V>,
}

impl<'a, V: ViewClient + EventSource> Events<'a, V> {
    pub async fn fill_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
        page: EventPage,
    ) -> Result<Vec<EventRecord<FillEvent>>, SdkError> {
        self.read::<wire::FillEventView, FillEvent>(user, market_id, custodian_id, page, |h| {
            h.fill_events
        })
        .await
    }

    pub async fn place_limit_order_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
        page: EventPage,
    ) -> Result<Vec<EventRecord<PlaceLimitOrderEvent>>, SdkError> {
        self.read::<wire::PlaceLimitOrderEventView, PlaceLimitOrderEvent>(
            user,
            market_id,
            custodian_id,
            page,
            |h| h.place_limit_order_events,
        )
        .await
    }

    pub async fn place_market_order_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
        page: EventPage,
    ) -> Result<Vec<EventRecord<PlaceMarketOrderEvent>>, SdkError> {
        self.read::<wire::PlaceMarketOrderEventView, PlaceMarketOrderEvent>(
            user,
            market_id,
            custodian_id,
            page,
            |h| h.place_market_order_events,
        )
        .await
    }

    pub async fn change_order_size_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
        page: EventPage,
    ) -> Result<Vec<EventRecord<ChangeOrderSizeEvent>>, SdkError> {
        self.read::<wire::ChangeOrderSizeEventView, ChangeOrderSizeEvent>(
            user,
            market_id,
            custodian_id,
            page,
            |h| h.change_order_size_events,
        )
        .await
    }

    pub async fn cancel_order_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
        page: EventPage,
    ) -> Result<Vec<EventRecord<CancelOrderEvent>>, SdkError> {
        self.read::<wire::CancelOrderEventView, CancelOrderEvent>(
            user,
            market_id,
            custodian_id,
            page,
            |h| h.cancel_order_events,
        )
        .await
    }

    /// Every fill on the market account, paging through the handle until
    /// the node returns a short page.
    pub async fn all_fill_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<Vec<EventRecord<FillEvent>>, SdkError> {
        self.read_all::<wire::FillEventView, FillEvent>(user, market_id, custodian_id, |h| {
            h.fill_events
        })
        .await
    }

    /// Every limit order placement on the market account, oldest first.
    pub async fn all_place_limit_order_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<Vec<EventRecord<PlaceLimitOrderEvent>>, SdkError> {
        self.read_all::<wire::PlaceLimitOrderEventView, PlaceLimitOrderEvent>(
            user,
            market_id,
            custodian_id,
            |h| h.place_limit_order_events,
        )
        .await
    }

    /// Every cancellation on the market account. See [`Self::all_fill_events`].
    pub async fn all_cancel_order_events(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<Vec<EventRecord<CancelOrderEvent>>, SdkError> {
        self.read_all::<wire::CancelOrderEventView, CancelOrderEvent>(
            user,
            market_id,
            custodian_id,
            |h| h.cancel_order_events,
        )
        .await
    }

    async fn handles(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<Option<EventHandleCreationNumbers>, SdkError> {
        let handles = self
            .client
            .accounts()
            .get_market_event_handle_creation_numbers(user, market_id, custodian_id)
            .await?;
        if handles.is_none() {
            tracing::debug!(%user, market_id, custodian_id, "no market account, no events");
        }
        Ok(handles)
    }

    async fn read<W, T>(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
        page: EventPage,
        pick: impl FnOnce(&EventHandleCreationNumbers) -> u64,
    ) -> Result<Vec<EventRecord<T>>, SdkError>
    where
        W: DeserializeOwned,
        T: TryFrom<W, Error = DecodeError>,
    {
        let Some(handles) = self.handles(user, market_id, custodian_id).await? else {
            return Ok(Vec::new());
        };

        let raw = self
            .client
            .viewer
            .events_by_creation_number(user, pick(&handles), page.start, page.limit)
            .await?;
        Ok(decode::decode_event_records::<W, T>(&raw)?)
    }

    async fn read_all<W, T>(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
        pick: impl FnOnce(&EventHandleCreationNumbers) -> u64,
    ) -> Result<Vec<EventRecord<T>>, SdkError>
    where
        W: DeserializeOwned,
        T: TryFrom<W, Error = DecodeError>,
    {
        let Some(handles) = self.handles(user, market_id, custodian_id).await? else {
            return Ok(Vec::new());
        };
        let creation_number = pick(&handles);

        let mut records = Vec::new();
        let mut start = 0u64;
        loop {
            let raw = self
                .client
                .viewer
                .events_by_creation_number(user, creation_number, Some(start), Some(MAX_EVENT_PAGE))
                .await?;
            let fetched = raw.len();
            records.extend(decode::decode_event_records::<W, T>(&raw)?);
            if fetched < usize::from(MAX_EVENT_PAGE) {
                return Ok(records);
            }
            start += fetched as u64;
        }
    }
}
