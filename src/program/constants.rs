//! Constants for the Econia Move package.
//!
//! Module names, entry function names, and the sentinel values the
//! package uses on chain.

use crate::shared::{AccountAddress, TypeTag};

// ============================================================================
// Modules
// ============================================================================

pub const MARKET_MODULE: &str = "market";
pub const USER_MODULE: &str = "user";
pub const REGISTRY_MODULE: &str = "registry";
/// Lives under the faucet package, not Econia's.
pub const FAUCET_MODULE: &str = "faucet";

// ============================================================================
// Entry functions
// ============================================================================

/// Entry function names, grouped by module.
pub mod entry {
    pub mod market {
        pub const PLACE_LIMIT_ORDER_USER_ENTRY: &str = "place_limit_order_user_entry";
        pub const PLACE_MARKET_ORDER_USER_ENTRY: &str = "place_market_order_user_entry";
        pub const SWAP_BETWEEN_COINSTORES_ENTRY: &str = "swap_between_coinstores_entry";
        pub const CANCEL_ORDER_USER: &str = "cancel_order_user";
        pub const CANCEL_ALL_ORDERS_USER: &str = "cancel_all_orders_user";
        pub const CHANGE_ORDER_SIZE_USER: &str = "change_order_size_user";
        pub const REGISTER_MARKET_BASE_COIN_FROM_COINSTORE: &str =
            "register_market_base_coin_from_coinstore";
    }

    pub mod user {
        pub const REGISTER_MARKET_ACCOUNT: &str = "register_market_account";
        pub const DEPOSIT_FROM_COINSTORE: &str = "deposit_from_coinstore";
        pub const WITHDRAW_TO_COINSTORE: &str = "withdraw_to_coinstore";
    }

    pub mod registry {
        pub const SET_RECOGNIZED_MARKET: &str = "set_recognized_market";
    }

    pub mod faucet {
        pub const MINT: &str = "mint";
    }
}

// ============================================================================
// Sentinels
// ============================================================================

/// Custodian ID meaning "the user acts for themself".
pub const NO_CUSTODIAN: u64 = 0;

/// Underwriter ID meaning "no underwriter" (pure coin markets).
pub const NO_UNDERWRITER: u64 = 0;

/// Highest price a limit order may carry, in ticks per lot.
pub const HI_PRICE: u64 = 0xffff_ffff;

// ============================================================================
// Well-known types
// ============================================================================

const CORE_FRAMEWORK: AccountAddress = AccountAddress::new({
    let mut bytes = [0u8; 32];
    bytes[31] = 1;
    bytes
});

lazy_static::lazy_static! {
    /// `0x1::aptos_coin::AptosCoin`, the default utility coin for market
    /// registration fees.
    pub static ref APTOS_COIN: TypeTag =
        TypeTag::struct_tag(&CORE_FRAMEWORK, "aptos_coin", "AptosCoin");
}
