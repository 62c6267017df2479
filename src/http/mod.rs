//! HTTP layer: `NodeHttp` over the Aptos node REST API, with per-endpoint
//! retry policies.

pub mod client;
pub mod retry;

pub use client::NodeHttp;
pub use retry::{RetryConfig, RetryPolicy};
