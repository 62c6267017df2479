//! Conversions: coin resource wire types → domain types.

use super::wire;
use super::{CoinInfo, CoinStore};

impl From<wire::CoinStoreView> for CoinStore {
    fn from(raw: wire::CoinStoreView) -> Self {
        CoinStore {
            balance: raw.coin.value,
            frozen: raw.frozen,
        }
    }
}

impl From<wire::CoinInfoView> for CoinInfo {
    fn from(raw: wire::CoinInfoView) -> Self {
        CoinInfo {
            name: raw.name,
            symbol: raw.symbol,
            decimals: raw.decimals,
        }
    }
}
