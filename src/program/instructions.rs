//! Payload builders for Econia entry functions.
//!
//! Each builder fixes the argument count, order and Move type of one entry
//! function. Nothing here checks balances, market existence or order
//! validity; the chain does that and a violation comes back as a rejected
//! transaction.

use crate::program::constants::{
    entry, APTOS_COIN, FAUCET_MODULE, MARKET_MODULE, REGISTRY_MODULE, USER_MODULE,
};
use crate::program::payload::{EntryFunctionPayload, ModuleId, MoveValue};
use crate::program::types::{
    MarketCoins, MarketParams, PlaceLimitOrderParams, PlaceMarketOrderParams, SwapParams,
};
use crate::shared::{AccountAddress, MarketOrderId, Side, TypeTag};

// ============================================================================
// Helper Functions
// ============================================================================

fn market(econia: &AccountAddress) -> ModuleId {
    ModuleId::new(*econia, MARKET_MODULE)
}

fn user(econia: &AccountAddress) -> ModuleId {
    ModuleId::new(*econia, USER_MODULE)
}

fn side(side: Side) -> MoveValue {
    MoveValue::Bool(side.ask_flag())
}

// ============================================================================
// market
// ============================================================================

/// `market::place_limit_order_user_entry<Base, Quote>`
///
/// Arguments: market_id, integrator, side, size, price, restriction,
/// self_match_behavior.
pub fn build_place_limit_order_user_entry(
    econia: &AccountAddress,
    coins: &MarketCoins,
    params: &PlaceLimitOrderParams,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        market(econia),
        entry::market::PLACE_LIMIT_ORDER_USER_ENTRY,
        coins.type_args(),
        vec![
            MoveValue::U64(params.market_id),
            MoveValue::Address(params.integrator),
            side(params.side),
            MoveValue::U64(params.size),
            MoveValue::U64(params.price),
            MoveValue::U8(params.restriction as u8),
            MoveValue::U8(params.self_match_behavior as u8),
        ],
    )
}

/// `market::place_market_order_user_entry<Base, Quote>`
pub fn build_place_market_order_user_entry(
    econia: &AccountAddress,
    coins: &MarketCoins,
    params: &PlaceMarketOrderParams,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        market(econia),
        entry::market::PLACE_MARKET_ORDER_USER_ENTRY,
        coins.type_args(),
        vec![
            MoveValue::U64(params.market_id),
            MoveValue::Address(params.integrator),
            side(params.direction),
            MoveValue::U64(params.size),
            MoveValue::U8(params.self_match_behavior as u8),
        ],
    )
}

/// `market::swap_between_coinstores_entry<Base, Quote>`
///
/// Arguments: market_id, integrator, direction, min_base, max_base,
/// min_quote, max_quote, limit_price.
pub fn build_swap_between_coinstores_entry(
    econia: &AccountAddress,
    coins: &MarketCoins,
    params: &SwapParams,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        market(econia),
        entry::market::SWAP_BETWEEN_COINSTORES_ENTRY,
        coins.type_args(),
        vec![
            MoveValue::U64(params.market_id),
            MoveValue::Address(params.integrator),
            side(params.direction),
            MoveValue::U64(params.min_base),
            MoveValue::U64(params.max_base.to_wire()),
            MoveValue::U64(params.min_quote),
            MoveValue::U64(params.max_quote.to_wire()),
            MoveValue::U64(params.wire_limit_price()),
        ],
    )
}

/// `market::cancel_order_user`
pub fn build_cancel_order_user(
    econia: &AccountAddress,
    market_id: u64,
    order_side: Side,
    market_order_id: MarketOrderId,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        market(econia),
        entry::market::CANCEL_ORDER_USER,
        vec![],
        vec![
            MoveValue::U64(market_id),
            side(order_side),
            MoveValue::U128(market_order_id.get()),
        ],
    )
}

/// `market::cancel_all_orders_user`
pub fn build_cancel_all_orders_user(
    econia: &AccountAddress,
    market_id: u64,
    order_side: Side,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        market(econia),
        entry::market::CANCEL_ALL_ORDERS_USER,
        vec![],
        vec![MoveValue::U64(market_id), side(order_side)],
    )
}

/// `market::change_order_size_user`
pub fn build_change_order_size_user(
    econia: &AccountAddress,
    market_id: u64,
    order_side: Side,
    market_order_id: MarketOrderId,
    new_size: u64,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        market(econia),
        entry::market::CHANGE_ORDER_SIZE_USER,
        vec![],
        vec![
            MoveValue::U64(market_id),
            side(order_side),
            MoveValue::U128(market_order_id.get()),
            MoveValue::U64(new_size),
        ],
    )
}

/// `market::register_market_base_coin_from_coinstore<Base, Quote, UtilityCoin>`
///
/// The registration fee is paid in `utility_coin`; pass `None` for
/// `0x1::aptos_coin::AptosCoin`.
pub fn build_register_market_base_coin_from_coinstore(
    econia: &AccountAddress,
    coins: &MarketCoins,
    utility_coin: Option<&TypeTag>,
    params: &MarketParams,
) -> EntryFunctionPayload {
    let mut type_args = coins.type_args();
    type_args.push(utility_coin.unwrap_or(&APTOS_COIN).clone());
    EntryFunctionPayload::new(
        market(econia),
        entry::market::REGISTER_MARKET_BASE_COIN_FROM_COINSTORE,
        type_args,
        vec![
            MoveValue::U64(params.lot_size),
            MoveValue::U64(params.tick_size),
            MoveValue::U64(params.min_size),
        ],
    )
}

// ============================================================================
// user
// ============================================================================

/// `user::register_market_account<Base, Quote>`
pub fn build_register_market_account(
    econia: &AccountAddress,
    coins: &MarketCoins,
    market_id: u64,
    custodian_id: u64,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        user(econia),
        entry::user::REGISTER_MARKET_ACCOUNT,
        coins.type_args(),
        vec![MoveValue::U64(market_id), MoveValue::U64(custodian_id)],
    )
}

/// `user::deposit_from_coinstore<CoinType>`. `amount` is in subunits.
pub fn build_deposit_from_coinstore(
    econia: &AccountAddress,
    coin: &TypeTag,
    market_id: u64,
    custodian_id: u64,
    amount: u64,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        user(econia),
        entry::user::DEPOSIT_FROM_COINSTORE,
        vec![coin.clone()],
        vec![
            MoveValue::U64(market_id),
            MoveValue::U64(custodian_id),
            MoveValue::U64(amount),
        ],
    )
}

/// `user::withdraw_to_coinstore<CoinType>`. Only for accounts without a
/// custodian.
pub fn build_withdraw_to_coinstore(
    econia: &AccountAddress,
    coin: &TypeTag,
    market_id: u64,
    amount: u64,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        user(econia),
        entry::user::WITHDRAW_TO_COINSTORE,
        vec![coin.clone()],
        vec![MoveValue::U64(market_id), MoveValue::U64(amount)],
    )
}

// ============================================================================
// registry
// ============================================================================

/// `registry::set_recognized_market`. Must be signed by the Econia account.
pub fn build_set_recognized_market(econia: &AccountAddress, market_id: u64) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        ModuleId::new(*econia, REGISTRY_MODULE),
        entry::registry::SET_RECOGNIZED_MARKET,
        vec![],
        vec![MoveValue::U64(market_id)],
    )
}

// ============================================================================
// faucet
// ============================================================================

/// `faucet::mint<CoinType>` on the example-coin faucet package. `amount`
/// is in subunits.
pub fn build_faucet_mint(
    faucet: &AccountAddress,
    coin: &TypeTag,
    amount: u64,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        ModuleId::new(*faucet, FAUCET_MODULE),
        entry::faucet::MINT,
        vec![coin.clone()],
        vec![MoveValue::U64(amount)],
    )
}
