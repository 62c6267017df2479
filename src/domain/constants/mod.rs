//! Constants domain: the `get_<NAME>` views the Econia modules expose
//! for their on-chain constants.
//!
//! Integer and boolean constants are separate enums so each is decoded by
//! its real return type. `PERCENT`, `SELL` and `TICKS` are booleans.

pub mod client;

use crate::program::constants::{MARKET_MODULE, USER_MODULE};

/// A constant whose view returns an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerConstant {
    Abort,
    CancelBoth,
    CancelMaker,
    CancelTaker,
    FillOrAbort,
    HiPrice,
    ImmediateOrCancel,
    MaxPossible,
    NoCustodian,
    NoRestriction,
    NoUnderwriter,
    PostOrAbort,
    CancelReasonEviction,
    CancelReasonImmediateOrCancel,
    CancelReasonManualCancel,
    CancelReasonMaxQuoteTraded,
    CancelReasonNotEnoughLiquidity,
    CancelReasonSelfMatchTaker,
    CancelReasonTooSmallAfterMatching,
}

impl IntegerConstant {
    pub const ALL: [IntegerConstant; 19] = [
        IntegerConstant::Abort,
        IntegerConstant::CancelBoth,
        IntegerConstant::CancelMaker,
        IntegerConstant::CancelTaker,
        IntegerConstant::FillOrAbort,
        IntegerConstant::HiPrice,
        IntegerConstant::ImmediateOrCancel,
        IntegerConstant::MaxPossible,
        IntegerConstant::NoCustodian,
        IntegerConstant::NoRestriction,
        IntegerConstant::NoUnderwriter,
        IntegerConstant::PostOrAbort,
        IntegerConstant::CancelReasonEviction,
        IntegerConstant::CancelReasonImmediateOrCancel,
        IntegerConstant::CancelReasonManualCancel,
        IntegerConstant::CancelReasonMaxQuoteTraded,
        IntegerConstant::CancelReasonNotEnoughLiquidity,
        IntegerConstant::CancelReasonSelfMatchTaker,
        IntegerConstant::CancelReasonTooSmallAfterMatching,
    ];

    /// The module that exposes the view.
    pub const fn module(self) -> &'static str {
        match self {
            IntegerConstant::CancelReasonEviction
            | IntegerConstant::CancelReasonImmediateOrCancel
            | IntegerConstant::CancelReasonManualCancel
            | IntegerConstant::CancelReasonMaxQuoteTraded
            | IntegerConstant::CancelReasonNotEnoughLiquidity
            | IntegerConstant::CancelReasonSelfMatchTaker
            | IntegerConstant::CancelReasonTooSmallAfterMatching => USER_MODULE,
            _ => MARKET_MODULE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IntegerConstant::Abort => "ABORT",
            IntegerConstant::CancelBoth => "CANCEL_BOTH",
            IntegerConstant::CancelMaker => "CANCEL_MAKER",
            IntegerConstant::CancelTaker => "CANCEL_TAKER",
            IntegerConstant::FillOrAbort => "FILL_OR_ABORT",
            IntegerConstant::HiPrice => "HI_PRICE",
            IntegerConstant::ImmediateOrCancel => "IMMEDIATE_OR_CANCEL",
            IntegerConstant::MaxPossible => "MAX_POSSIBLE",
            IntegerConstant::NoCustodian => "NO_CUSTODIAN",
            IntegerConstant::NoRestriction => "NO_RESTRICTION",
            IntegerConstant::NoUnderwriter => "NO_UNDERWRITER",
            IntegerConstant::PostOrAbort => "POST_OR_ABORT",
            IntegerConstant::CancelReasonEviction => "CANCEL_REASON_EVICTION",
            IntegerConstant::CancelReasonImmediateOrCancel => "CANCEL_REASON_IMMEDIATE_OR_CANCEL",
            IntegerConstant::CancelReasonManualCancel => "CANCEL_REASON_MANUAL_CANCEL",
            IntegerConstant::CancelReasonMaxQuoteTraded => "CANCEL_REASON_MAX_QUOTE_TRADED",
            IntegerConstant::CancelReasonNotEnoughLiquidity => "CANCEL_REASON_NOT_ENOUGH_LIQUIDITY",
            IntegerConstant::CancelReasonSelfMatchTaker => "CANCEL_REASON_SELF_MATCH_TAKER",
            IntegerConstant::CancelReasonTooSmallAfterMatching => {
                "CANCEL_REASON_TOO_SMALL_AFTER_MATCHING"
            }
        }
    }

    /// `get_<NAME>`
    pub fn function(self) -> String {
        format!("get_{}", self.name())
    }
}

/// A constant whose view returns a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagConstant {
    MarketAsk,
    MarketBid,
    Buy,
    Sell,
    /// Fee denomination flag: percentage
    Percent,
    /// Fee denomination flag: ticks
    Ticks,
    UserAsk,
    UserBid,
}

impl FlagConstant {
    pub const ALL: [FlagConstant; 8] = [
        FlagConstant::MarketAsk,
        FlagConstant::MarketBid,
        FlagConstant::Buy,
        FlagConstant::Sell,
        FlagConstant::Percent,
        FlagConstant::Ticks,
        FlagConstant::UserAsk,
        FlagConstant::UserBid,
    ];

    pub const fn module(self) -> &'static str {
        match self {
            FlagConstant::UserAsk | FlagConstant::UserBid => USER_MODULE,
            _ => MARKET_MODULE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FlagConstant::MarketAsk | FlagConstant::UserAsk => "ASK",
            FlagConstant::MarketBid | FlagConstant::UserBid => "BID",
            FlagConstant::Buy => "BUY",
            FlagConstant::Sell => "SELL",
            FlagConstant::Percent => "PERCENT",
            FlagConstant::Ticks => "TICKS",
        }
    }

    pub fn function(self) -> String {
        format!("get_{}", self.name())
    }
}
