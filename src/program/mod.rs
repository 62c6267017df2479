//! On-chain program interaction: entry-function payloads for the Econia
//! package and the faucet.

pub mod constants;
pub mod instructions;
pub mod payload;
pub mod types;

pub use constants::*;
pub use instructions::*;
pub use payload::{EntryFunctionPayload, ModuleId, MoveValue};
pub use types::*;
