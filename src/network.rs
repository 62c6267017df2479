//! Network URL and address constants for the Econia SDK.
//!
//! The local values match the docker compose deployment of Econia plus
//! its data-service stack.

/// Default Aptos node REST URL (local deployment).
pub const DEFAULT_NODE_URL: &str = "http://0.0.0.0:8080/v1";

/// Default Aptos faucet URL (local deployment).
pub const DEFAULT_FAUCET_URL: &str = "http://0.0.0.0:8081";

/// Econia package address on the local deployment.
pub const LOCAL_ECONIA_ADDRESS: &str =
    "0xeeee0dd966cd4fc739f76006591239b32527edbb7c303c431f8c691bda150b40";

/// Private key of the local Econia deployer (can recognize markets).
pub const LOCAL_ECONIA_KEY: &str =
    "0x8eeb9bd1808d99ef54758060f5067b5707be379058cfd83cd983fe7e47063a09";

/// Address of the example-coin faucet package on the local deployment.
pub const LOCAL_FAUCET_ADDRESS: &str =
    "0xffff094ef8ccfa9137adcb13a2fae2587e83c348b32c63f811cc19fcc9fc5878";
