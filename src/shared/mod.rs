//! Shared newtypes and utilities used across all domain modules.
//!
//! Identifiers that cross the view boundary as decimal or hex strings get a
//! newtype here so the rest of the SDK never handles the raw string form.

pub mod scaling;
pub mod serde_util;

pub use scaling::{subunits_to_decimal, wholes_to_subunits, ScalingError};

use crate::error::{DecodeError, SdkError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AccountAddress ──────────────────────────────────────────────────────────

/// A 32-byte account address.
///
/// Parsed from hex with or without a `0x` prefix. Short forms such as `0x1`
/// are left-padded with zeros.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; 32]);

impl AccountAddress {
    pub const LENGTH: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(raw: &str) -> Result<Self, DecodeError> {
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);
        if digits.is_empty() || digits.len() > Self::LENGTH * 2 {
            return Err(DecodeError::InvalidAddress(format!(
                "expected 1-64 hex digits, got {} in {raw:?}",
                digits.len()
            )));
        }

        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| DecodeError::InvalidAddress(format!("{raw:?}: {e}")))?;
        Ok(Self(bytes))
    }

    /// Full-length hex without prefix (the form view arguments use).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Full-length hex with `0x` prefix.
    pub fn to_hex_literal(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_literal())
    }
}

impl std::fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccountAddress({})", self.to_hex_literal())
    }
}

impl FromStr for AccountAddress {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 32]> for AccountAddress {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_literal())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AccountAddress::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side: Bid (buy) or Ask (sell).
///
/// On chain the side is a boolean where `true` means ask. Every decode and
/// encode site goes through [`Side::from_ask_flag`] and [`Side::ask_flag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    pub const fn from_ask_flag(flag: bool) -> Self {
        if flag {
            Side::Ask
        } else {
            Side::Bid
        }
    }

    pub const fn ask_flag(self) -> bool {
        matches!(self, Side::Ask)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "Buy"),
            Side::Ask => write!(f, "Sell"),
        }
    }
}

// ─── Limit ───────────────────────────────────────────────────────────────────

/// An upper bound that may be absent.
///
/// The chain spells "no limit" as `u64::MAX`; that sentinel only appears
/// when the value is encoded for the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Limit {
    #[default]
    Unbounded,
    AtMost(u64),
}

impl Limit {
    pub const fn to_wire(self) -> u64 {
        match self {
            Limit::Unbounded => u64::MAX,
            Limit::AtMost(n) => n,
        }
    }

    /// Decimal-string form for view arguments.
    pub fn to_arg(self) -> String {
        self.to_wire().to_string()
    }

    pub const fn bound(self) -> Option<u64> {
        match self {
            Limit::Unbounded => None,
            Limit::AtMost(n) => Some(n),
        }
    }
}

impl From<Option<u64>> for Limit {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Limit::Unbounded, Limit::AtMost)
    }
}

// ─── MarketOrderId ───────────────────────────────────────────────────────────

/// Market order ID: insertion counter in the upper 64 bits, price in the
/// low 32 bits of the lower half.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketOrderId(u128);

impl MarketOrderId {
    const SHIFT_COUNTER: u32 = 64;
    const PRICE_MASK: u128 = 0xffff_ffff;

    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u128 {
        self.0
    }

    pub const fn counter(self) -> u64 {
        (self.0 >> Self::SHIFT_COUNTER) as u64
    }

    /// Price in ticks per lot.
    pub const fn price(self) -> u64 {
        (self.0 & Self::PRICE_MASK) as u64
    }
}

impl std::fmt::Display for MarketOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for MarketOrderId {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl Serialize for MarketOrderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for MarketOrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_util::u128_str::deserialize(deserializer).map(MarketOrderId)
    }
}

// ─── MarketAccountId ─────────────────────────────────────────────────────────

/// Market account ID: market ID in the upper 64 bits, custodian ID in the
/// lower 64 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketAccountId(u128);

impl MarketAccountId {
    pub const fn new(market_id: u64, custodian_id: u64) -> Self {
        Self(((market_id as u128) << 64) | custodian_id as u128)
    }

    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u128 {
        self.0
    }

    pub const fn market_id(self) -> u64 {
        (self.0 >> 64) as u64
    }

    pub const fn custodian_id(self) -> u64 {
        self.0 as u64
    }
}

impl std::fmt::Display for MarketAccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── TypeTag ─────────────────────────────────────────────────────────────────

/// A Move struct type tag such as `0x1::aptos_coin::AptosCoin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn struct_tag(address: &AccountAddress, module: &str, name: &str) -> Self {
        Self(format!("{}::{}::{}", address.to_hex_literal(), module, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address the struct is declared under.
    pub fn address(&self) -> Result<AccountAddress, SdkError> {
        let (address, module, name) = self.parts();
        if module.is_empty() || name.is_empty() {
            return Err(SdkError::Validation(format!(
                "{self} is not a struct type tag"
            )));
        }
        AccountAddress::from_hex(address)
            .map_err(|e| SdkError::Validation(format!("type tag {self}: {e}")))
    }

    /// The `0x...::module::Name` parts, generics excluded.
    pub fn parts(&self) -> (&str, &str, &str) {
        let head = self.0.split('<').next().unwrap_or(&self.0);
        let mut it = head.splitn(3, "::");
        (
            it.next().unwrap_or_default(),
            it.next().unwrap_or_default(),
            it.next().unwrap_or_default(),
        )
    }
}

impl FromStr for TypeTag {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let head = s.split('<').next().unwrap_or(s);
        let parts: Vec<&str> = head.split("::").collect();
        if parts.len() != 3 || parts[1].is_empty() || parts[2].is_empty() {
            return Err(SdkError::Validation(format!(
                "type tag must look like 0xADDR::module::Name, got {s:?}"
            )));
        }
        AccountAddress::from_hex(parts[0])
            .map_err(|e| SdkError::Validation(format!("type tag {s:?}: {e}")))?;
        Ok(TypeTag(s.to_string()))
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_full_length_roundtrip() {
        let hex = "eeee0dd966cd4fc739f76006591239b32527edbb7c303c431f8c691bda150b40";
        let addr = AccountAddress::from_hex(&format!("0x{hex}")).unwrap();
        assert_eq!(addr.to_hex(), hex);
        assert_eq!(AccountAddress::from_hex(hex).unwrap(), addr);
    }

    #[test]
    fn test_address_short_form_is_padded() {
        let addr = AccountAddress::from_hex("0x1").unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(addr.to_bytes(), expected);
    }

    #[test]
    fn test_address_rejects_bad_input() {
        assert!(matches!(
            AccountAddress::from_hex("0x"),
            Err(DecodeError::InvalidAddress(_))
        ));
        assert!(matches!(
            AccountAddress::from_hex(&"a".repeat(65)),
            Err(DecodeError::InvalidAddress(_))
        ));
        assert!(matches!(
            AccountAddress::from_hex("0xzz"),
            Err(DecodeError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_side_flag_mapping() {
        assert_eq!(Side::from_ask_flag(true), Side::Ask);
        assert_eq!(Side::from_ask_flag(false), Side::Bid);
        assert!(Side::Ask.ask_flag());
        assert!(!Side::Bid.ask_flag());
        assert_eq!(Side::Bid.opposite(), Side::Ask);
    }

    #[test]
    fn test_side_serde() {
        let bid: Side = serde_json::from_str("\"bid\"").unwrap();
        assert_eq!(bid, Side::Bid);
        assert_eq!(serde_json::to_string(&Side::Ask).unwrap(), "\"ask\"");
    }

    #[test]
    fn test_limit_wire_encoding() {
        assert_eq!(Limit::Unbounded.to_wire(), u64::MAX);
        assert_eq!(Limit::Unbounded.to_arg(), "18446744073709551615");
        assert_eq!(Limit::AtMost(5).to_arg(), "5");
        assert_eq!(Limit::from(None), Limit::Unbounded);
        assert_eq!(Limit::from(Some(3)).bound(), Some(3));
    }

    #[test]
    fn test_market_order_id_decomposition() {
        let id = MarketOrderId::new((7u128 << 64) | 1_234);
        assert_eq!(id.counter(), 7);
        assert_eq!(id.price(), 1_234);

        let max_price = MarketOrderId::new((1u128 << 64) | 0xffff_ffff);
        assert_eq!(max_price.price(), 0xffff_ffff);
        assert_eq!(max_price.counter(), 1);
    }

    #[test]
    fn test_market_account_id() {
        let id = MarketAccountId::new(3, 9);
        assert_eq!(id.get(), (3u128 << 64) | 9);
        assert_eq!(id.market_id(), 3);
        assert_eq!(id.custodian_id(), 9);
    }

    #[test]
    fn test_type_tag_parsing() {
        let tag: TypeTag = "0x1::aptos_coin::AptosCoin".parse().unwrap();
        assert_eq!(tag.parts(), ("0x1", "aptos_coin", "AptosCoin"));
        assert!("aptos_coin::AptosCoin".parse::<TypeTag>().is_err());
        assert!("0xqq::m::N".parse::<TypeTag>().is_err());
    }
}
