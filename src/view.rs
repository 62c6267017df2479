//! The view-call capability the rest of the SDK reads chain state through.
//!
//! [`ViewClient`] is the only thing the sub-clients need from a node.
//! [`NodeViewer`] implements it over the node REST API; tests implement it
//! over canned JSON.

use crate::error::SdkError;
use crate::shared::AccountAddress;
use serde::Serialize;
use serde_json::Value;

/// Invoke a Move view function.
///
/// `args` are already in wire form: decimal strings for integers, hex for
/// addresses. Implementations forward them untouched. A malformed argument
/// surfaces as whatever error the node returns.
#[allow(async_fn_in_trait)]
pub trait ViewClient {
    async fn invoke_view(
        &self,
        module: &str,
        function: &str,
        type_args: &[String],
        args: &[String],
    ) -> Result<Vec<Value>, SdkError>;
}

/// Read raw events from an account's event handles.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    /// Events of the handle created with `creation_number` under `account`.
    async fn events_by_creation_number(
        &self,
        account: &AccountAddress,
        creation_number: u64,
        start: Option<u64>,
        limit: Option<u16>,
    ) -> Result<Vec<Value>, SdkError>;

    /// Events of the handle stored in `field` of the `handle_struct`
    /// resource under `account`.
    async fn events_by_handle(
        &self,
        account: &AccountAddress,
        handle_struct: &str,
        field: &str,
        start: Option<u64>,
        limit: Option<u16>,
    ) -> Result<Vec<Value>, SdkError>;
}

/// Read Move resources stored under an account.
#[allow(async_fn_in_trait)]
pub trait ResourceSource {
    /// The `resource_type` resource under `account` as the node renders it,
    /// `{"type": ..., "data": ...}`. `None` when the account holds no such
    /// resource or does not exist.
    async fn account_resource(
        &self,
        account: &AccountAddress,
        resource_type: &str,
    ) -> Result<Option<Value>, SdkError>;
}

/// Body of `POST /view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRequest {
    /// `0xADDRESS::module::function`
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl ViewRequest {
    pub fn new(
        package: &AccountAddress,
        module: &str,
        function: &str,
        type_args: &[String],
        args: &[String],
    ) -> Self {
        Self {
            function: format!("{}::{}::{}", package.to_hex_literal(), module, function),
            type_arguments: type_args.to_vec(),
            arguments: args.to_vec(),
        }
    }
}

#[cfg(feature = "http")]
pub use node::NodeViewer;

#[cfg(feature = "http")]
mod node {
    use super::{EventSource, ResourceSource, ViewClient, ViewRequest};
    use crate::error::SdkError;
    use crate::http::NodeHttp;
    use crate::shared::AccountAddress;
    use serde_json::Value;

    /// [`ViewClient`] over a node's REST API, bound to one package address.
    #[derive(Clone)]
    pub struct NodeViewer {
        http: NodeHttp,
        package: AccountAddress,
    }

    impl NodeViewer {
        pub fn new(http: NodeHttp, package: AccountAddress) -> Self {
            Self { http, package }
        }

        pub fn http(&self) -> &NodeHttp {
            &self.http
        }

        pub fn package(&self) -> &AccountAddress {
            &self.package
        }
    }

    impl ViewClient for NodeViewer {
        async fn invoke_view(
            &self,
            module: &str,
            function: &str,
            type_args: &[String],
            args: &[String],
        ) -> Result<Vec<Value>, SdkError> {
            let request = ViewRequest::new(&self.package, module, function, type_args, args);
            tracing::debug!(function = %request.function, args = ?request.arguments, "view");
            Ok(self.http.view(&request).await?)
        }
    }

    impl EventSource for NodeViewer {
        async fn events_by_creation_number(
            &self,
            account: &AccountAddress,
            creation_number: u64,
            start: Option<u64>,
            limit: Option<u16>,
        ) -> Result<Vec<Value>, SdkError> {
            Ok(self
                .http
                .get_events(account, creation_number, start, limit)
                .await?)
        }

        async fn events_by_handle(
            &self,
            account: &AccountAddress,
            handle_struct: &str,
            field: &str,
            start: Option<u64>,
            limit: Option<u16>,
        ) -> Result<Vec<Value>, SdkError> {
            Ok(self
                .http
                .get_events_by_handle(account, handle_struct, field, start, limit)
                .await?)
        }
    }

    impl ResourceSource for NodeViewer {
        async fn account_resource(
            &self,
            account: &AccountAddress,
            resource_type: &str,
        ) -> Result<Option<Value>, SdkError> {
            Ok(self.http.get_account_resource(account, resource_type).await?)
        }
    }
}
