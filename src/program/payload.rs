//! Entry-function payloads: the opaque value builders produce and
//! submitters consume.

use serde_json::{json, Value};

use crate::error::SdkError;
use crate::shared::{AccountAddress, TypeTag};

/// `address::module`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    pub address: AccountAddress,
    pub name: String,
}

impl ModuleId {
    pub fn new(address: AccountAddress, name: &str) -> Self {
        Self {
            address,
            name: name.to_string(),
        }
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

/// A positional entry-function argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveValue {
    U8(u8),
    U64(u64),
    U128(u128),
    Bool(bool),
    Address(AccountAddress),
}

impl MoveValue {
    /// BCS bytes: little-endian fixed-width integers, one byte for a bool,
    /// 32 raw bytes for an address.
    pub fn to_bcs(&self) -> Result<Vec<u8>, SdkError> {
        let bytes = match self {
            MoveValue::U8(v) => bincode::serialize(v)?,
            MoveValue::U64(v) => bincode::serialize(v)?,
            MoveValue::U128(v) => bincode::serialize(v)?,
            MoveValue::Bool(v) => bincode::serialize(v)?,
            MoveValue::Address(a) => bincode::serialize(a.as_bytes())?,
        };
        Ok(bytes)
    }

    /// JSON form the node REST API expects: `u8` as a number, wider
    /// integers as decimal strings, addresses as hex literals.
    pub fn to_json(&self) -> Value {
        match self {
            MoveValue::U8(v) => json!(v),
            MoveValue::U64(v) => json!(v.to_string()),
            MoveValue::U128(v) => json!(v.to_string()),
            MoveValue::Bool(v) => json!(v),
            MoveValue::Address(a) => json!(a.to_hex_literal()),
        }
    }
}

/// A call to a Move entry function, ready for signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFunctionPayload {
    pub module: ModuleId,
    pub function: String,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<MoveValue>,
}

impl EntryFunctionPayload {
    pub fn new(
        module: ModuleId,
        function: &str,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<MoveValue>,
    ) -> Self {
        Self {
            module,
            function: function.to_string(),
            type_arguments,
            arguments,
        }
    }

    /// `0xADDR::module::function`
    pub fn function_id(&self) -> String {
        format!(
            "{}::{}::{}",
            self.module.address.to_hex_literal(),
            self.module.name,
            self.function
        )
    }

    pub fn serialized_arguments(&self) -> Result<Vec<Vec<u8>>, SdkError> {
        self.arguments.iter().map(MoveValue::to_bcs).collect()
    }

    /// `entry_function_payload` JSON for the node's submission endpoints.
    pub fn to_json(&self) -> Value {
        json!({
            "type": "entry_function_payload",
            "function": self.function_id(),
            "type_arguments": self.type_arguments,
            "arguments": self.arguments.iter().map(MoveValue::to_json).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcs_encoding() {
        assert_eq!(MoveValue::U8(7).to_bcs().unwrap(), vec![7]);
        assert_eq!(
            MoveValue::U64(0x0102).to_bcs().unwrap(),
            vec![0x02, 0x01, 0, 0, 0, 0, 0, 0]
        );
        let wide = MoveValue::U128(1u128 << 64).to_bcs().unwrap();
        assert_eq!(wide.len(), 16);
        assert_eq!(wide[8], 1);
        assert_eq!(MoveValue::Bool(true).to_bcs().unwrap(), vec![1]);
        assert_eq!(MoveValue::Bool(false).to_bcs().unwrap(), vec![0]);

        let addr = AccountAddress::from_hex("0xab").unwrap();
        let bytes = MoveValue::Address(addr).to_bcs().unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], 0xab);
    }

    #[test]
    fn test_payload_json() {
        let addr = AccountAddress::from_hex("0xc0de").unwrap();
        let payload = EntryFunctionPayload::new(
            ModuleId::new(addr, "market"),
            "cancel_all_orders_user",
            vec![],
            vec![MoveValue::U64(u64::MAX), MoveValue::Bool(true), MoveValue::U8(2)],
        );
        let json = payload.to_json();
        assert_eq!(json["type"], "entry_function_payload");
        assert_eq!(
            json["function"],
            format!("0x{:0>64}::market::cancel_all_orders_user", "c0de")
        );
        assert_eq!(
            json["arguments"],
            serde_json::json!(["18446744073709551615", true, 2])
        );
    }
}
