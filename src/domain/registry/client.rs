//! Registry sub-client: market lookup by coin types and parameters.

use crate::client::EconiaClient;
use crate::decode;
use crate::domain::event::{EventPage, EventRecord};
use crate::domain::registry::{wire, MarketRegistrationEvent};
use crate::error::SdkError;
use crate::program::constants::REGISTRY_MODULE;
use crate::program::types::{MarketCoins, MarketParams};
use crate::shared::TypeTag;
use crate::view::{EventSource, ViewClient};

/// Sub-client for the `registry` module.
pub struct Registry<'a, V> {
    pub(crate) client: &'a EconiaClient<V>,
}

impl<'a, V: ViewClient> Registry<'a, V> {
    /// ID of the pure coin market trading `coins` with exactly these
    /// parameters, or `None` if no such market is registered.
    pub async fn get_market_id_base_coin(
        &self,
        coins: &MarketCoins,
        params: &MarketParams,
    ) -> Result<Option<u64>, SdkError> {
        let type_args: Vec<String> = [&coins.base, &coins.quote]
            .into_iter()
            .map(TypeTag::to_string)
            .collect();
        let value = self
            .client
            .view_one(
                REGISTRY_MODULE,
                "get_market_id_base_coin",
                &type_args,
                &[
                    params.lot_size.to_string(),
                    params.tick_size.to_string(),
                    params.min_size.to_string(),
                ],
            )
            .await?;
        Ok(decode::decode_optional_u64(&value)?)
    }
}

impl<'a, V: ViewClient + EventSource> Registry<'a, V> {
    /// Events from the `market_registration_events` handle on the Econia
    /// account's `registry::Registry` resource.
    pub async fn market_registration_events(
        &self,
        page: EventPage,
    ) -> Result<Vec<EventRecord<MarketRegistrationEvent>>, SdkError> {
        let econia = self.client.econia_address();
        let handle = format!("{}::{}::Registry", econia.to_hex_literal(), REGISTRY_MODULE);
        let raw = self
            .client
            .viewer
            .events_by_handle(econia, &handle, "market_registration_events", page.start, page.limit)
            .await?;
        Ok(decode::decode_event_records::<
            wire::MarketRegistrationEventView,
            MarketRegistrationEvent,
        >(&raw)?)
    }
}
