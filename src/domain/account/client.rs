//! Accounts sub-client: market accounts, IDs, event handle numbers.

use crate::client::EconiaClient;
use crate::decode;
use crate::domain::account::{EventHandleCreationNumbers, MarketAccount};
use crate::error::SdkError;
use crate::program::constants::USER_MODULE;
use crate::shared::{AccountAddress, MarketAccountId};
use crate::view::ViewClient;

/// Sub-client for market-account views on the `user` module.
pub struct Accounts<'a, V> {
    pub(crate) client: &'a EconiaClient<V>,
}

impl<'a, V: ViewClient> Accounts<'a, V> {
    pub async fn get_market_account(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<MarketAccount, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "get_market_account",
                &[],
                &[user.to_hex(), market_id.to_string(), custodian_id.to_string()],
            )
            .await?;
        Ok(decode::decode_market_account(&value)?)
    }

    /// Every market account the user holds, across markets and custodians.
    pub async fn get_market_accounts(
        &self,
        user: &AccountAddress,
    ) -> Result<Vec<MarketAccount>, SdkError> {
        let value = self
            .client
            .view_one(USER_MODULE, "get_market_accounts", &[], &[user.to_hex()])
            .await?;
        Ok(decode::decode_market_accounts(&value)?)
    }

    pub async fn has_market_account(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<bool, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "has_market_account",
                &[],
                &[user.to_hex(), market_id.to_string(), custodian_id.to_string()],
            )
            .await?;
        Ok(decode::decode_bool(&value)?)
    }

    pub async fn has_market_account_by_market_id(
        &self,
        user: &AccountAddress,
        market_id: u64,
    ) -> Result<bool, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "has_market_account_by_market_id",
                &[],
                &[user.to_hex(), market_id.to_string()],
            )
            .await?;
        Ok(decode::decode_bool(&value)?)
    }

    pub async fn has_market_account_by_market_account_id(
        &self,
        user: &AccountAddress,
        market_account_id: MarketAccountId,
    ) -> Result<bool, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "has_market_account_by_market_account_id",
                &[],
                &[user.to_hex(), market_account_id.to_string()],
            )
            .await?;
        Ok(decode::decode_bool(&value)?)
    }

    pub async fn get_market_account_id(
        &self,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<MarketAccountId, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "get_market_account_id",
                &[],
                &[market_id.to_string(), custodian_id.to_string()],
            )
            .await?;
        Ok(MarketAccountId::from_raw(decode::decode_u128(&value)?))
    }

    pub async fn get_all_market_account_ids_for_market_id(
        &self,
        user: &AccountAddress,
        market_id: u64,
    ) -> Result<Vec<MarketAccountId>, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "get_all_market_account_ids_for_market_id",
                &[],
                &[user.to_hex(), market_id.to_string()],
            )
            .await?;
        Ok(decode::decode_u128_list(&value)?
            .into_iter()
            .map(MarketAccountId::from_raw)
            .collect())
    }

    pub async fn get_all_market_account_ids_for_user(
        &self,
        user: &AccountAddress,
    ) -> Result<Vec<MarketAccountId>, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "get_all_market_account_ids_for_user",
                &[],
                &[user.to_hex()],
            )
            .await?;
        Ok(decode::decode_u128_list(&value)?
            .into_iter()
            .map(MarketAccountId::from_raw)
            .collect())
    }

    pub async fn get_custodian_id(
        &self,
        market_account_id: MarketAccountId,
    ) -> Result<u64, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "get_custodian_id",
                &[],
                &[market_account_id.to_string()],
            )
            .await?;
        Ok(decode::decode_u64(&value)?)
    }

    pub async fn get_market_id(&self, market_account_id: MarketAccountId) -> Result<u64, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "get_market_id",
                &[],
                &[market_account_id.to_string()],
            )
            .await?;
        Ok(decode::decode_u64(&value)?)
    }

    /// `None` until the user registers a market account for the pair.
    pub async fn get_market_event_handle_creation_numbers(
        &self,
        user: &AccountAddress,
        market_id: u64,
        custodian_id: u64,
    ) -> Result<Option<EventHandleCreationNumbers>, SdkError> {
        let value = self
            .client
            .view_one(
                USER_MODULE,
                "get_market_event_handle_creation_numbers",
                &[],
                &[user.to_hex(), market_id.to_string(), custodian_id.to_string()],
            )
            .await?;
        Ok(decode::decode_optional_handle_numbers(&value)?)
    }
}
