//! Registry domain: market lookup and market registration events.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::shared::AccountAddress;

/// A Move `TypeInfo`: where a type is declared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeInfo {
    pub account_address: AccountAddress,
    pub module_name: String,
    pub struct_name: String,
}

impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.account_address, self.module_name, self.struct_name
        )
    }
}

/// Emitted once per registered market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketRegistrationEvent {
    pub market_id: u64,
    pub base_type: TypeInfo,
    /// Empty for pure coin markets.
    pub base_name_generic: String,
    pub quote_type: TypeInfo,
    pub lot_size: u64,
    pub tick_size: u64,
    pub min_size: u64,
    pub underwriter_id: u64,
}
