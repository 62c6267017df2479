//! Plain-text summaries of order-book state for scripted sessions.
//!
//! Every renderer returns a `String`; printing is left to the caller.

use std::fmt::Write;

use crate::domain::account::MarketAccount;
use crate::domain::event::{fills_for_last_taker, FillEvent, PlaceLimitOrderEvent};
use crate::domain::order::OpenOrders;
use crate::domain::orderbook::PriceLevels;
use crate::domain::registry::MarketRegistrationEvent;
use crate::error::SdkError;
use crate::shared::scaling::subunits_to_decimal;
use crate::shared::Side;
use crate::workflow::LoggedTxn;

/// Decimals of the coins a report talks about, for human-scaled balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinDecimals {
    pub base: u32,
    pub quote: u32,
}

pub fn render_txns(txns: &[LoggedTxn]) -> String {
    let mut out = String::from("TRANSACTIONS EXECUTED (first-to-last):\n");
    if txns.is_empty() {
        out.push_str("  * No transactions were executed.\n");
    }
    for txn in txns {
        let _ = writeln!(out, "  * {}: {}", txn.reason, txn.hash);
    }
    out
}

/// Best level on each side of the book.
pub fn render_price_levels(levels: &PriceLevels) -> String {
    let mut out = String::from("CURRENT BEST PRICE LEVELS:\n");
    if levels.is_empty() {
        out.push_str("  * Nothing is being bought or sold right now\n");
        return out;
    }
    match levels.best_bid() {
        Some(level) => {
            let _ = writeln!(
                out,
                "  * Highest BID/BUY @ {} ticks/lot, {} lots",
                level.price, level.size
            );
        }
        None => out.push_str("  * No open bids\n"),
    }
    match levels.best_ask() {
        Some(level) => {
            let _ = writeln!(
                out,
                "  * Lowest ASK/SELL @ {} ticks/lot, {} lots",
                level.price, level.size
            );
        }
        None => out.push_str("  * No open asks\n"),
    }
    out
}

pub fn render_registration_event(event: &MarketRegistrationEvent) -> String {
    let mut out = String::from("EVENT SUMMARY: MarketRegistrationEvent\n");
    let _ = writeln!(out, "  * Market ID: {}", event.market_id);
    let _ = writeln!(
        out,
        "  * Base Type (unit of lots): 0x...::{}::{}",
        event.base_type.module_name, event.base_type.struct_name
    );
    let _ = writeln!(
        out,
        "  * Quote Type (unit of ticks): 0x...::{}::{}",
        event.quote_type.module_name, event.quote_type.struct_name
    );
    let _ = writeln!(
        out,
        "  * Lot size {} / tick size {} / min size {} lots",
        event.lot_size, event.tick_size, event.min_size
    );
    out
}

pub fn render_place_limit_order_event(event: &PlaceLimitOrderEvent) -> String {
    let (positioning, tip) = match event.side {
        Side::Ask => ("ASK", "(Selling)"),
        Side::Bid => ("BID", "(Buying)"),
    };
    let mut out = String::from("EVENT SUMMARY: PlaceLimitOrderEvent\n");
    let _ = writeln!(out, "  * User address: {}", event.user);
    let _ = writeln!(out, "  * Order ID: {}", event.order_id);
    let _ = writeln!(out, "  * Side: {positioning} {tip}");
    let _ = writeln!(out, "  * Price: {} ticks per lot", event.price);
    let _ = writeln!(
        out,
        "  * Size: {} available lots / {}",
        event.remaining_size, event.size
    );
    out
}

/// How the most recent taker order executed.
///
/// Only fills that share the last fill's taker order ID are counted.
pub fn render_fill_breakdown(fills: &[FillEvent]) -> String {
    let mut out = String::from("LAST ORDER EXECUTION BREAKDOWN: FillEvent(s)\n");
    let last = fills_for_last_taker(fills);
    let Some(first) = last.first() else {
        out.push_str("  * There were no order fills for the queried account\n");
        return out;
    };

    let count = last.len();
    match first.maker_side {
        Side::Ask => {
            let _ = writeln!(
                out,
                "  * There were {count} ASK orders filled by the BID order placement."
            );
        }
        Side::Bid => {
            let _ = writeln!(
                out,
                "  * There were {count} BID orders filled by the ASK order placement."
            );
        }
    }
    let prices = join(last.iter().map(|f| f.price), " -> ");
    let sizes = join(last.iter().map(|f| f.size), " +> ");
    let fees = join(last.iter().map(|f| f.taker_quote_fees_paid), " +> ");
    let _ = writeln!(out, "  * Execution prices (ticks/lot): {prices}");
    let _ = writeln!(out, "  * Execution sizes (lots): {sizes}");
    let _ = writeln!(out, "  * Execution fees (quote subunits): {fees}");
    out
}

/// Whether the taker order behind the last fill still rests on the book.
///
/// `None` when there are no fills.
pub fn last_taker_order_open(fills: &[FillEvent], open: &OpenOrders) -> Option<bool> {
    let last = fills.last()?;
    Some(open.find(last.taker_order_id).is_some())
}

pub fn render_last_order_status(fills: &[FillEvent], open: &OpenOrders) -> String {
    match last_taker_order_open(fills, open) {
        Some(true) => "  * The order WAS NOT fully satisfied by initial execution\n".to_string(),
        Some(false) => "  * The order WAS fully satisfied by initial execution\n".to_string(),
        None => "  * There is no last order to inspect\n".to_string(),
    }
}

/// Available balances before and after, scaled to whole coins.
pub fn render_balance_change(
    before: &MarketAccount,
    after: &MarketAccount,
    decimals: CoinDecimals,
) -> Result<String, SdkError> {
    let mut out = String::from("Market account after deposit:\n");
    let _ = writeln!(
        out,
        "  * base: {} -> {}",
        subunits_to_decimal(before.base_available, decimals.base)?,
        subunits_to_decimal(after.base_available, decimals.base)?
    );
    let _ = writeln!(
        out,
        "  * quote: {} -> {}",
        subunits_to_decimal(before.quote_available, decimals.quote)?,
        subunits_to_decimal(after.quote_available, decimals.quote)?
    );
    Ok(out)
}

/// Coin store balances for a market's two coins, in subunits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletBalances {
    pub base: u64,
    pub quote: u64,
}

/// Wallet side of a deposit: what left the coin stores.
pub fn render_wallet_change(
    before: WalletBalances,
    after: WalletBalances,
    decimals: CoinDecimals,
) -> Result<String, SdkError> {
    let mut out = String::from("Wallet after deposit:\n");
    let _ = writeln!(
        out,
        "  * base: {} -> {}",
        subunits_to_decimal(before.base, decimals.base)?,
        subunits_to_decimal(after.base, decimals.base)?
    );
    let _ = writeln!(
        out,
        "  * quote: {} -> {}",
        subunits_to_decimal(before.quote, decimals.quote)?,
        subunits_to_decimal(after.quote, decimals.quote)?
    );
    Ok(out)
}

fn join(values: impl Iterator<Item = u64>, sep: &str) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(sep)
}
