//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (typed, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching view and event JSON
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client wrapping the relevant view functions
//!
//! `constants` has no wire form; its views return bare scalars. `coin`
//! reads account resources rather than views.

pub mod account;
pub mod coin;
pub mod constants;
pub mod event;
pub mod order;
pub mod orderbook;
pub mod registry;
