//! Coins sub-client: coin existence, registration and wallet balances.

use crate::client::EconiaClient;
use crate::decode;
use crate::domain::coin::{coin_info_type, coin_store_type, CoinInfo, CoinStore};
use crate::error::SdkError;
use crate::shared::{AccountAddress, TypeTag};
use crate::view::ResourceSource;

/// Sub-client for the framework coin resources of arbitrary coin types.
pub struct Coins<'a, V> {
    pub(crate) client: &'a EconiaClient<V>,
}

impl<'a, V: ResourceSource> Coins<'a, V> {
    /// Whether `coin` has been initialized by the account declaring it.
    pub async fn does_coin_exist(&self, coin: &TypeTag) -> Result<bool, SdkError> {
        let issuer = coin.address()?;
        let raw = self
            .client
            .viewer
            .account_resource(&issuer, &coin_info_type(coin))
            .await?;
        Ok(raw.is_some())
    }

    /// `None` when the coin has not been initialized.
    pub async fn coin_info(&self, coin: &TypeTag) -> Result<Option<CoinInfo>, SdkError> {
        let issuer = coin.address()?;
        let raw = self
            .client
            .viewer
            .account_resource(&issuer, &coin_info_type(coin))
            .await?;
        Ok(raw.as_ref().map(decode::decode_coin_info).transpose()?)
    }

    pub async fn is_registered_for_coin(
        &self,
        account: &AccountAddress,
        coin: &TypeTag,
    ) -> Result<bool, SdkError> {
        let raw = self
            .client
            .viewer
            .account_resource(account, &coin_store_type(coin))
            .await?;
        Ok(raw.is_some())
    }

    /// `None` when `account` has not registered for `coin`.
    pub async fn coin_store(
        &self,
        account: &AccountAddress,
        coin: &TypeTag,
    ) -> Result<Option<CoinStore>, SdkError> {
        let raw = self
            .client
            .viewer
            .account_resource(account, &coin_store_type(coin))
            .await?;
        Ok(raw.as_ref().map(decode::decode_coin_store).transpose()?)
    }

    /// Wallet balance in subunits. Fails with
    /// [`SdkError::NotRegisteredForCoin`] when there is no coin store.
    pub async fn coin_balance(
        &self,
        account: &AccountAddress,
        coin: &TypeTag,
    ) -> Result<u64, SdkError> {
        match self.coin_store(account, coin).await? {
            Some(store) => Ok(store.balance),
            None => Err(SdkError::NotRegisteredForCoin {
                account: *account,
                coin: coin.clone(),
            }),
        }
    }
}
