//! Custom serde helpers for view-function wire formats.
//!
//! Move integers wider than 32 bits arrive as decimal strings. Every such
//! field, whether read through serde or by hand, is parsed by
//! [`parse_unsigned`]. JSON numbers are only taken when serde_json already
//! holds them as exact integers.

use crate::error::DecodeError;
use serde::Deserialize;
use std::str::FromStr;

/// Parse a decimal string into an unsigned integer.
///
/// Accepts only non-empty ASCII digit strings (no sign, no whitespace, no
/// fraction) whose value fits `T`.
pub fn parse_unsigned<T: FromStr>(field: &str, raw: &str) -> Result<T, DecodeError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::MalformedResponse(format!(
            "{field}: expected a decimal integer string, got {raw:?}"
        )));
    }
    raw.parse::<T>().map_err(|_| {
        DecodeError::MalformedResponse(format!("{field}: {raw} is out of range"))
    })
}

/// Deserializes a decimal string into `u64`. Exact JSON integers are
/// accepted too; floats never are.
pub mod u64_str {
    use serde::Deserializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(super::UnsignedVisitor::<u64>::new("u64"))
    }
}

/// Deserializes a decimal string into `u128`.
pub mod u128_str {
    use serde::Deserializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(super::UnsignedVisitor::<u128>::new("u128"))
    }
}

struct UnsignedVisitor<T> {
    field: &'static str,
    _marker: std::marker::PhantomData<T>,
}

impl<T> UnsignedVisitor<T> {
    fn new(field: &'static str) -> Self {
        Self {
            field,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for UnsignedVisitor<T>
where
    T: FromStr + TryFrom<u64>,
{
    type Value = T;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a decimal {} string", self.field)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<T, E> {
        parse_unsigned(self.field, v).map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<T, E> {
        T::try_from(v).map_err(|_| E::custom(format!("{}: {v} is out of range", self.field)))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<T, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::custom(format!("{}: {v} is negative", self.field))),
        }
    }
}

/// Deserializes a small Move integer (`u8`), which the node renders as a
/// JSON number. A decimal string is accepted too.
pub mod u8_any {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u8),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(n),
            Raw::Str(s) => super::parse_unsigned("u8", &s).map_err(serde::de::Error::custom),
        }
    }
}

/// A Move `Option<T>` as rendered by the node: `{"vec": []}` or
/// `{"vec": [value]}`. A bare zero-or-one element array is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MoveOption<T> {
    Wrapped { vec: Vec<T> },
    Bare(Vec<T>),
}

impl<T> MoveOption<T> {
    pub fn into_option(self) -> Result<Option<T>, DecodeError> {
        let mut items = match self {
            MoveOption::Wrapped { vec } => vec,
            MoveOption::Bare(vec) => vec,
        };
        match items.len() {
            0 => Ok(None),
            1 => Ok(items.pop()),
            n => Err(DecodeError::MalformedResponse(format!(
                "option holds {n} elements"
            ))),
        }
    }
}
