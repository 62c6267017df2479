//! # Econia SDK
//!
//! A Rust SDK for the Econia order book on Aptos.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: shared newtypes, the view-result decoder, domain records and
//!    entry-function payload builders (no I/O)
//! 2. **View facade**: the `ViewClient` capability and typed sub-clients
//!    over named view functions
//! 3. **HTTP**: `NodeHttp` with per-endpoint retry policies, the
//!    node-backed `NodeViewer` and the faucet client
//! 4. **Submission**: the `TransactionSubmitter` boundary and, with the
//!    `native` feature, a local-key `NodeSubmitter`
//! 5. **Workflow**: transaction log, order steps and reports for scripted
//!    sessions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use econia_sdk::prelude::*;
//!
//! let client = NodeClient::builder()
//!     .node_url("https://fullnode.testnet.aptoslabs.com/v1")
//!     .econia_address("0xc0de")
//!     .build()?;
//!
//! let levels = client.orderbooks().get_price_levels_all(market_id).await?;
//! let orders = client.orders().get_open_orders_all(market_id).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): records, wire types, conversions, sub-clients.
pub mod domain;

/// Raw view results into typed records.
pub mod decode;

/// On-chain program interaction: entry-function payloads and their arguments.
pub mod program;

/// Unified SDK error types.
pub mod error;

/// Network URL and address constants.
pub mod network;

// ── Layer 2: View facade ─────────────────────────────────────────────────────

/// `ViewClient` and `EventSource` capabilities.
pub mod view;

/// `EconiaClient`: the read-side entry point.
pub mod client;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

/// Native-coin faucet.
#[cfg(feature = "http")]
pub mod faucet;

// ── Layer 4: Submission ──────────────────────────────────────────────────────

/// Transaction submission boundary and node wire types.
pub mod transaction;

// ── Layer 5: Workflow ────────────────────────────────────────────────────────

/// Scripted-session helpers: transaction log, order steps, reports.
pub mod workflow;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        AccountAddress, Limit, MarketAccountId, MarketOrderId, Side, TypeTag,
    };

    // Domain types
    pub use crate::domain::account::{EventHandleCreationNumbers, MarketAccount, OrderRef};
    pub use crate::domain::coin::{CoinInfo, CoinStore};
    pub use crate::domain::constants::{FlagConstant, IntegerConstant};
    pub use crate::domain::event::{
        fills_for_last_taker, CancelOrderEvent, ChangeOrderSizeEvent, EventPage, EventRecord,
        FillEvent, PlaceLimitOrderEvent, PlaceMarketOrderEvent,
    };
    pub use crate::domain::order::{OpenOrders, Order};
    pub use crate::domain::orderbook::{PriceLevel, PriceLevels};
    pub use crate::domain::registry::{MarketRegistrationEvent, TypeInfo};

    // Program
    pub use crate::program::{
        EntryFunctionPayload, MarketCoins, MarketParams, ModuleId, MoveValue,
        PlaceLimitOrderParams, PlaceMarketOrderParams, Restriction, SelfMatchBehavior,
        SwapParams,
    };

    // Errors
    pub use crate::error::{DecodeError, SdkError, TxnError};

    // Network
    pub use crate::network::{DEFAULT_FAUCET_URL, DEFAULT_NODE_URL};

    // Capabilities + client
    pub use crate::client::{
        AccountsClient, CoinsClient, ConstantsClient, EconiaClient, EventsClient,
        OrderbooksClient, OrdersClient, RegistryClient,
    };
    pub use crate::transaction::{TransactionSubmitter, TxnHash};
    pub use crate::view::{EventSource, ResourceSource, ViewClient};

    #[cfg(feature = "http")]
    pub use crate::client::{EconiaClientBuilder, NodeClient};
    #[cfg(feature = "http")]
    pub use crate::faucet::FaucetClient;
    #[cfg(feature = "http")]
    pub use crate::http::{NodeHttp, RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::view::NodeViewer;

    #[cfg(all(feature = "http", feature = "native-auth"))]
    pub use crate::transaction::native::{LocalAccount, NodeSubmitter, SubmitOptions};

    // Workflow
    pub use crate::workflow::{TxnLog, WorkflowConfig};
}
