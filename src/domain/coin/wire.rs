//! Wire types for `GET /accounts/{address}/resource/{type}`.

use crate::shared::serde_util;
use serde::Deserialize;

/// A resource as the node renders it.
#[derive(Deserialize, Debug, Clone)]
pub struct ResourceView<T> {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub data: T,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CoinValueView {
    #[serde(with = "serde_util::u64_str")]
    pub value: u64,
}

/// `0x1::coin::CoinStore<T>`. Event handles are not read.
#[derive(Deserialize, Debug, Clone)]
pub struct CoinStoreView {
    pub coin: CoinValueView,
    pub frozen: bool,
}

/// `0x1::coin::CoinInfo<T>`. Supply is not read.
#[derive(Deserialize, Debug, Clone)]
pub struct CoinInfoView {
    pub name: String,
    pub symbol: String,
    #[serde(with = "serde_util::u8_any")]
    pub decimals: u8,
}
