//! High-level client: `EconiaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::decode;
use crate::domain::account::client::Accounts;
use crate::domain::coin::client::Coins;
use crate::domain::constants::client::Constants;
use crate::domain::event::client::Events;
use crate::domain::order::client::Orders;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::registry::client::Registry;
use crate::error::SdkError;
use crate::shared::AccountAddress;
use crate::view::ViewClient;

use serde_json::Value;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::constants::client::Constants as ConstantsClient;
pub use crate::domain::event::client::Events as EventsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::registry::client::Registry as RegistryClient;

/// The primary read-side entry point.
///
/// Provides nested sub-client accessors for each domain:
/// `client.orders()`, `client.accounts()`, etc. Generic over the
/// [`ViewClient`] so tests can substitute canned responses.
#[derive(Clone)]
pub struct EconiaClient<V> {
    pub(crate) viewer: V,
    pub(crate) econia: AccountAddress,
}

/// An [`EconiaClient`] that talks to a node over HTTP.
#[cfg(feature = "http")]
pub type NodeClient = EconiaClient<crate::view::NodeViewer>;

impl<V> EconiaClient<V> {
    /// Wrap an existing viewer. `econia` is the package address the
    /// viewer resolves module names against.
    pub fn with_viewer(viewer: V, econia: AccountAddress) -> Self {
        Self { viewer, econia }
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn econia_address(&self) -> &AccountAddress {
        &self.econia
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_, V> {
        Orders { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_, V> {
        Orderbooks { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_, V> {
        Accounts { client: self }
    }

    pub fn events(&self) -> Events<'_, V> {
        Events { client: self }
    }

    pub fn registry(&self) -> Registry<'_, V> {
        Registry { client: self }
    }

    pub fn constants(&self) -> Constants<'_, V> {
        Constants { client: self }
    }

    pub fn coins(&self) -> Coins<'_, V> {
        Coins { client: self }
    }
}

impl<V: ViewClient> EconiaClient<V> {
    /// Call a view that declares exactly one return value and hand back
    /// that value.
    pub(crate) async fn view_one(
        &self,
        module: &str,
        function: &str,
        type_args: &[String],
        args: &[String],
    ) -> Result<Value, SdkError> {
        let returns = self
            .viewer
            .invoke_view(module, function, type_args, args)
            .await?;
        Ok(decode::first_return(returns, function)?)
    }
}

#[cfg(feature = "http")]
impl NodeClient {
    pub fn builder() -> EconiaClientBuilder {
        EconiaClientBuilder::default()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
pub use builder::EconiaClientBuilder;

#[cfg(feature = "http")]
mod builder {
    use super::NodeClient;
    use crate::error::SdkError;
    use crate::http::{NodeHttp, RetryPolicy};
    use crate::shared::AccountAddress;
    use crate::view::NodeViewer;

    pub struct EconiaClientBuilder {
        node_url: String,
        econia_address: String,
        read_policy: RetryPolicy,
    }

    impl Default for EconiaClientBuilder {
        fn default() -> Self {
            Self {
                node_url: crate::network::DEFAULT_NODE_URL.to_string(),
                econia_address: crate::network::LOCAL_ECONIA_ADDRESS.to_string(),
                read_policy: RetryPolicy::Reads,
            }
        }
    }

    impl EconiaClientBuilder {
        pub fn node_url(mut self, url: &str) -> Self {
            self.node_url = url.to_string();
            self
        }

        /// Hex address of the Econia package, `0x` prefix optional.
        pub fn econia_address(mut self, address: &str) -> Self {
            self.econia_address = address.to_string();
            self
        }

        pub fn read_policy(mut self, policy: RetryPolicy) -> Self {
            self.read_policy = policy;
            self
        }

        pub fn build(self) -> Result<NodeClient, SdkError> {
            let econia = AccountAddress::from_hex(&self.econia_address)?;
            let http = NodeHttp::new(&self.node_url).with_read_policy(self.read_policy);
            Ok(NodeClient::with_viewer(NodeViewer::new(http, econia), econia))
        }
    }
}
