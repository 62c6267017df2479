//! Type definitions for Econia entry functions.
//!
//! Enums with their on-chain `u8` codes, and parameter structs for the
//! builders in [`crate::program::instructions`].

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::program::constants::HI_PRICE;
use crate::shared::{AccountAddress, Limit, Side, TypeTag};

// ============================================================================
// Enums
// ============================================================================

/// Limit order restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Restriction {
    NoRestriction = 0,
    /// Abort unless the whole size fills on placement
    FillOrAbort = 1,
    /// Fill what crosses, cancel the rest
    ImmediateOrCancel = 2,
    /// Abort if any part would cross the spread
    PostOrAbort = 3,
}

impl TryFrom<u8> for Restriction {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Restriction::NoRestriction),
            1 => Ok(Restriction::FillOrAbort),
            2 => Ok(Restriction::ImmediateOrCancel),
            3 => Ok(Restriction::PostOrAbort),
            _ => Err(DecodeError::MalformedResponse(format!(
                "unknown restriction code {value}"
            ))),
        }
    }
}

/// What happens when a taker would match against its own maker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SelfMatchBehavior {
    Abort = 0,
    CancelBoth = 1,
    CancelMaker = 2,
    CancelTaker = 3,
}

impl TryFrom<u8> for SelfMatchBehavior {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SelfMatchBehavior::Abort),
            1 => Ok(SelfMatchBehavior::CancelBoth),
            2 => Ok(SelfMatchBehavior::CancelMaker),
            3 => Ok(SelfMatchBehavior::CancelTaker),
            _ => Err(DecodeError::MalformedResponse(format!(
                "unknown self match behavior code {value}"
            ))),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// Base and quote coin types of a market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketCoins {
    pub base: TypeTag,
    pub quote: TypeTag,
}

impl MarketCoins {
    pub fn new(base: TypeTag, quote: TypeTag) -> Self {
        Self { base, quote }
    }

    pub(crate) fn type_args(&self) -> Vec<TypeTag> {
        vec![self.base.clone(), self.quote.clone()]
    }
}

/// Parameters for placing a limit order from the signer's market account.
#[derive(Debug, Clone)]
pub struct PlaceLimitOrderParams {
    pub market_id: u64,
    /// Address that receives a share of taker fees
    pub integrator: AccountAddress,
    pub side: Side,
    /// Lots of base
    pub size: u64,
    /// Ticks per lot
    pub price: u64,
    pub restriction: Restriction,
    pub self_match_behavior: SelfMatchBehavior,
}

/// Parameters for placing a market order from the signer's market account.
#[derive(Debug, Clone)]
pub struct PlaceMarketOrderParams {
    pub market_id: u64,
    pub integrator: AccountAddress,
    pub direction: Side,
    /// Lots of base
    pub size: u64,
    pub self_match_behavior: SelfMatchBehavior,
}

/// Parameters for a swap that settles directly against the signer's coin
/// stores.
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub market_id: u64,
    pub integrator: AccountAddress,
    pub direction: Side,
    /// Base subunits
    pub min_base: u64,
    pub max_base: Limit,
    /// Quote subunits
    pub min_quote: u64,
    pub max_quote: Limit,
    /// Worst acceptable price in ticks per lot. `None` accepts any price.
    pub limit_price: Option<u64>,
}

impl SwapParams {
    /// Unbounded swap in `direction` at any price.
    pub fn any_price(market_id: u64, integrator: AccountAddress, direction: Side) -> Self {
        Self {
            market_id,
            integrator,
            direction,
            min_base: 0,
            max_base: Limit::Unbounded,
            min_quote: 0,
            max_quote: Limit::Unbounded,
            limit_price: None,
        }
    }

    /// The limit price as sent on chain. "Any price" is the highest price
    /// for a buy and zero for a sell.
    pub fn wire_limit_price(&self) -> u64 {
        match (self.limit_price, self.direction) {
            (Some(price), _) => price,
            (None, Side::Bid) => HI_PRICE,
            (None, Side::Ask) => 0,
        }
    }
}

/// Parameters for registering a pure coin market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketParams {
    /// Base subunits per lot
    pub lot_size: u64,
    /// Quote subunits per tick
    pub tick_size: u64,
    /// Minimum order size in lots
    pub min_size: u64,
}
