//! Conversions: registry wire types → domain types.

use super::wire;
use super::{MarketRegistrationEvent, TypeInfo};
use crate::error::DecodeError;
use crate::shared::AccountAddress;

/// A `vector<u8>` holding UTF-8 text. The node renders byte vectors as
/// `0x`-prefixed hex; anything else is taken as already-decoded text.
fn utf8_bytes(field: &str, raw: &str) -> Result<String, DecodeError> {
    let Some(digits) = raw.strip_prefix("0x") else {
        return Ok(raw.to_string());
    };
    let bytes = hex::decode(digits)
        .map_err(|e| DecodeError::MalformedResponse(format!("{field}: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| DecodeError::MalformedResponse(format!("{field}: {e}")))
}

impl TryFrom<wire::TypeInfoView> for TypeInfo {
    type Error = DecodeError;

    fn try_from(raw: wire::TypeInfoView) -> Result<Self, Self::Error> {
        Ok(TypeInfo {
            account_address: AccountAddress::from_hex(&raw.account_address)?,
            module_name: utf8_bytes("module_name", &raw.module_name)?,
            struct_name: utf8_bytes("struct_name", &raw.struct_name)?,
        })
    }
}

impl TryFrom<wire::MarketRegistrationEventView> for MarketRegistrationEvent {
    type Error = DecodeError;

    fn try_from(raw: wire::MarketRegistrationEventView) -> Result<Self, Self::Error> {
        Ok(MarketRegistrationEvent {
            market_id: raw.market_id,
            base_type: raw.base_type.try_into()?,
            base_name_generic: utf8_bytes("base_name_generic", &raw.base_name_generic)?,
            quote_type: raw.quote_type.try_into()?,
            lot_size: raw.lot_size,
            tick_size: raw.tick_size,
            min_size: raw.min_size,
            underwriter_id: raw.underwriter_id,
        })
    }
}
