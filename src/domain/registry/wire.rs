//! Wire types for registry events.

use crate::shared::serde_util;
use serde::Deserialize;

/// `module_name` and `struct_name` are `vector<u8>`, rendered as hex.
#[derive(Deserialize, Debug, Clone)]
pub struct TypeInfoView {
    pub account_address: String,
    pub module_name: String,
    pub struct_name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MarketRegistrationEventView {
    #[serde(with = "serde_util::u64_str")]
    pub market_id: u64,
    pub base_type: TypeInfoView,
    pub base_name_generic: String,
    pub quote_type: TypeInfoView,
    #[serde(with = "serde_util::u64_str")]
    pub lot_size: u64,
    #[serde(with = "serde_util::u64_str")]
    pub tick_size: u64,
    #[serde(with = "serde_util::u64_str")]
    pub min_size: u64,
    #[serde(with = "serde_util::u64_str")]
    pub underwriter_id: u64,
}
