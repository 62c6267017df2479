//! Coin domain: the framework's `0x1::coin` resources for one coin type.
//!
//! `CoinInfo<T>` lives under the account that declares `T` and exists once
//! the coin is initialized. `CoinStore<T>` lives under every account that
//! registered for `T` and holds its wallet balance.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::TypeTag;
use serde::{Deserialize, Serialize};

/// Metadata published when a coin type is initialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoinInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// An account's wallet-side holding of one coin type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoinStore {
    /// Subunits of the coin.
    pub balance: u64,
    pub frozen: bool,
}

pub(crate) fn coin_info_type(coin: &TypeTag) -> String {
    format!("0x1::coin::CoinInfo<{coin}>")
}

pub(crate) fn coin_store_type(coin: &TypeTag) -> String {
    format!("0x1::coin::CoinStore<{coin}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_types_wrap_coin() {
        let coin: TypeTag = "0x1::aptos_coin::AptosCoin".parse().unwrap();
        assert_eq!(
            coin_store_type(&coin),
            "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>"
        );
        assert_eq!(
            coin_info_type(&coin),
            "0x1::coin::CoinInfo<0x1::aptos_coin::AptosCoin>"
        );
    }
}
