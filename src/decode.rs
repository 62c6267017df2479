//! Decoding of raw view results into typed records.
//!
//! Every function here is pure: it takes one raw return value (as produced
//! by [`crate::view::ViewClient::invoke_view`]) and either yields a domain
//! record or a [`DecodeError`]. Integer fields go through
//! [`serde_util::parse_unsigned`](crate::shared::serde_util::parse_unsigned)
//! and never through floating point.

use crate::domain::account::{wire as account_wire, EventHandleCreationNumbers, MarketAccount};
use crate::domain::coin::{wire as coin_wire, CoinInfo, CoinStore};
use crate::domain::event::{wire as event_wire, EventRecord};
use crate::domain::order::{wire as order_wire, OpenOrders, Order};
use crate::domain::orderbook::{wire as orderbook_wire, PriceLevels};
use crate::error::DecodeError;
use crate::shared::serde_util::{self, MoveOption};
use crate::shared::AccountAddress;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

fn from_raw<T: DeserializeOwned>(raw: &Value) -> Result<T, DecodeError> {
    T::deserialize(raw).map_err(DecodeError::from)
}

/// The single value a one-return view function produced.
pub fn first_return(returns: Vec<Value>, function: &str) -> Result<Value, DecodeError> {
    returns.into_iter().next().ok_or_else(|| {
        DecodeError::MalformedResponse(format!("{function} returned no values"))
    })
}

// ─── Records ─────────────────────────────────────────────────────────────────

pub fn decode_order(raw: &Value) -> Result<Order, DecodeError> {
    Order::try_from(from_raw::<order_wire::OpenOrderView>(raw)?)
}

/// Both sides of an open-orders result, in source order.
pub fn decode_orders_collection(raw: &Value) -> Result<OpenOrders, DecodeError> {
    OpenOrders::try_from(from_raw::<order_wire::OpenOrdersView>(raw)?)
}

/// Price levels for both sides, in source order.
pub fn decode_price_levels(raw: &Value) -> Result<PriceLevels, DecodeError> {
    Ok(from_raw::<orderbook_wire::PriceLevelsView>(raw)?.into())
}

pub fn decode_market_account(raw: &Value) -> Result<MarketAccount, DecodeError> {
    Ok(from_raw::<account_wire::MarketAccountView>(raw)?.into())
}

pub fn decode_market_accounts(raw: &Value) -> Result<Vec<MarketAccount>, DecodeError> {
    Ok(from_raw::<Vec<account_wire::MarketAccountView>>(raw)?
        .into_iter()
        .map(MarketAccount::from)
        .collect())
}

/// A Move `Option<MarketEventHandleCreationNumbers>`: empty means the user
/// has no market account for the pair.
pub fn decode_optional_handle_numbers(
    raw: &Value,
) -> Result<Option<EventHandleCreationNumbers>, DecodeError> {
    Ok(
        from_raw::<MoveOption<account_wire::HandleCreationNumbersView>>(raw)?
            .into_option()?
            .map(EventHandleCreationNumbers::from),
    )
}

/// A `0x1::coin::CoinStore<T>` resource.
pub fn decode_coin_store(raw: &Value) -> Result<CoinStore, DecodeError> {
    Ok(from_raw::<coin_wire::ResourceView<coin_wire::CoinStoreView>>(raw)?
        .data
        .into())
}

/// A `0x1::coin::CoinInfo<T>` resource.
pub fn decode_coin_info(raw: &Value) -> Result<CoinInfo, DecodeError> {
    Ok(from_raw::<coin_wire::ResourceView<coin_wire::CoinInfoView>>(raw)?
        .data
        .into())
}

/// Events of one handle, each wrapped with its sequence number.
pub fn decode_event_records<W, T>(raw: &[Value]) -> Result<Vec<EventRecord<T>>, DecodeError>
where
    W: DeserializeOwned,
    T: TryFrom<W, Error = DecodeError>,
{
    raw.iter()
        .map(|value| EventRecord::try_from(from_raw::<event_wire::EventView<W>>(value)?))
        .collect()
}

// ─── Scalars ─────────────────────────────────────────────────────────────────

/// A 32-byte address from its hex form, `0x` prefix optional.
///
/// Short forms are left-padded with zeros, so `0x1` is the framework
/// address. Input with no digits or more than 64 of them is rejected
/// with [`DecodeError::InvalidAddress`], as is any non-hex digit.
pub fn decode_address(raw_hex: &str) -> Result<AccountAddress, DecodeError> {
    AccountAddress::from_hex(raw_hex)
}

#[derive(Deserialize)]
struct U64(#[serde(with = "serde_util::u64_str")] u64);

#[derive(Deserialize)]
struct U128(#[serde(with = "serde_util::u128_str")] u128);

pub fn decode_u64(raw: &Value) -> Result<u64, DecodeError> {
    Ok(from_raw::<U64>(raw)?.0)
}

pub fn decode_u128(raw: &Value) -> Result<u128, DecodeError> {
    Ok(from_raw::<U128>(raw)?.0)
}

pub fn decode_bool(raw: &Value) -> Result<bool, DecodeError> {
    raw.as_bool().ok_or_else(|| {
        DecodeError::MalformedResponse(format!("expected a boolean, got {raw}"))
    })
}

pub fn decode_u64_list(raw: &Value) -> Result<Vec<u64>, DecodeError> {
    Ok(from_raw::<Vec<U64>>(raw)?.into_iter().map(|v| v.0).collect())
}

pub fn decode_u128_list(raw: &Value) -> Result<Vec<u128>, DecodeError> {
    Ok(from_raw::<Vec<U128>>(raw)?.into_iter().map(|v| v.0).collect())
}

/// A Move `Option<u64>`.
pub fn decode_optional_u64(raw: &Value) -> Result<Option<u64>, DecodeError> {
    Ok(from_raw::<MoveOption<U64>>(raw)?.into_option()?.map(|v| v.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{MarketOrderId, Side};
    use serde_json::json;

    const USER: &str = "0x2e89f5ba4ea3b8e2d2a2f4a5e1c7d5b0b7a4c5a6e2f3d4c5b6a7980123456789";

    fn raw_order(side: bool, price: &str, size: &str) -> Value {
        json!({
            "custodian_id": "0",
            "market_id": "1",
            "market_order_id": "18446744073709552616",
            "price": price,
            "side": side,
            "size": size,
            "user": USER,
        })
    }

    #[test]
    fn test_decode_order_side_flag() {
        assert_eq!(decode_order(&raw_order(true, "1", "1")).unwrap().side, Side::Ask);
        assert_eq!(decode_order(&raw_order(false, "1", "1")).unwrap().side, Side::Bid);
    }

    #[test]
    fn test_decode_order_fields() {
        let order = decode_order(&raw_order(false, "995", "4")).unwrap();
        assert_eq!(order.custodian_id, 0);
        assert_eq!(order.market_id, 1);
        assert_eq!(order.market_order_id, MarketOrderId::new((1u128 << 64) + 1000));
        assert_eq!(order.market_order_id.counter(), 1);
        assert_eq!(order.market_order_id.price(), 1000);
        assert_eq!(order.price, 995);
        assert_eq!(order.size, 4);
        assert_eq!(order.user, AccountAddress::from_hex(USER).unwrap());
    }

    #[test]
    fn test_decode_order_missing_field() {
        let mut raw = raw_order(true, "1", "1");
        raw.as_object_mut().unwrap().remove("size");
        assert!(matches!(
            decode_order(&raw),
            Err(DecodeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_order_non_numeric() {
        let raw = raw_order(true, "ten", "1");
        assert!(matches!(
            decode_order(&raw),
            Err(DecodeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_order_bad_user() {
        let mut raw = raw_order(true, "1", "1");
        raw["user"] = json!("0xnothex");
        assert!(decode_order(&raw).is_err());
    }

    #[test]
    fn test_decode_orders_collection() {
        let raw = json!({
            "asks": [raw_order(true, "1000", "3"), raw_order(true, "1005", "2")],
            "bids": [raw_order(false, "995", "4")],
        });
        let orders = decode_orders_collection(&raw).unwrap();
        assert_eq!(orders.asks.len(), 2);
        assert_eq!(orders.bids.len(), 1);
        assert!(orders.asks.iter().all(|o| o.side == Side::Ask));
        assert_eq!(orders.bids[0].side, Side::Bid);
        let asks: Vec<(u64, u64)> = orders.asks.iter().map(|o| (o.price, o.size)).collect();
        assert_eq!(asks, vec![(1000, 3), (1005, 2)]);
        assert_eq!((orders.bids[0].price, orders.bids[0].size), (995, 4));
    }

    #[test]
    fn test_integer_boundaries() {
        for v in [0u64, 1, (1u64 << 63) - 1, u64::MAX] {
            assert_eq!(decode_u64(&json!(v.to_string())).unwrap(), v);
        }
        let big = (1u128 << 127) - 1;
        assert_eq!(decode_u128(&json!(big.to_string())).unwrap(), big);
        assert_eq!(decode_u128(&json!(u128::MAX.to_string())).unwrap(), u128::MAX);
        assert!(decode_u64(&json!("18446744073709551616")).is_err());
        assert!(decode_u64(&json!(1.5)).is_err());
    }

    #[test]
    fn test_decode_price_levels_keeps_order() {
        let raw = json!({
            "market_id": "3",
            "asks": [
                {"price": "1005", "size": "2"},
                {"price": "1000", "size": "3"},
            ],
            "bids": [
                {"price": "990", "size": "1"},
                {"price": "995", "size": "4"},
            ],
        });
        let levels = decode_price_levels(&raw).unwrap();
        assert_eq!(levels.market_id, 3);
        let asks: Vec<u64> = levels.asks.iter().map(|l| l.price).collect();
        let bids: Vec<u64> = levels.bids.iter().map(|l| l.price).collect();
        assert_eq!(asks, vec![1005, 1000]);
        assert_eq!(bids, vec![990, 995]);
    }

    #[test]
    fn test_decode_price_levels_large_size() {
        let raw = json!({
            "market_id": "1",
            "asks": [{"price": "1", "size": "9007199254740993"}],
            "bids": [],
        });
        assert_eq!(
            decode_price_levels(&raw).unwrap().asks[0].size,
            9_007_199_254_740_993
        );
    }

    fn raw_market_account() -> Value {
        json!({
            "market_id": "1",
            "custodian_id": "0",
            "base_available": "700000000",
            "base_ceiling": "1000000000",
            "base_total": "900000000",
            "quote_available": "5",
            "quote_ceiling": "6",
            "quote_total": "7",
            "asks": [{"market_order_id": "18446744073709552616", "size": "3"}],
            "bids": [],
        })
    }

    #[test]
    fn test_decode_market_account_balances_verbatim() {
        let account = decode_market_account(&raw_market_account()).unwrap();
        assert_eq!(account.base_available, 700_000_000);
        assert_eq!(account.base_ceiling, 1_000_000_000);
        assert_eq!(account.base_total, 900_000_000);
        assert_eq!(account.quote_total, 7);
        assert_eq!(account.asks.len(), 1);
        assert_eq!(account.asks[0].size, 3);
        assert!(account.bids.is_empty());
    }

    #[test]
    fn test_decode_market_accounts() {
        let raw = json!([raw_market_account(), raw_market_account()]);
        assert_eq!(decode_market_accounts(&raw).unwrap().len(), 2);
    }

    #[test]
    fn test_decode_optional_handle_numbers() {
        assert_eq!(decode_optional_handle_numbers(&json!({"vec": []})).unwrap(), None);
        assert_eq!(decode_optional_handle_numbers(&json!([])).unwrap(), None);

        let raw = json!({"vec": [{
            "cancel_order_events_handle_creation_num": "4",
            "change_order_size_events_handle_creation_num": "5",
            "fill_events_handle_creation_num": "6",
            "place_limit_order_events_handle_creation_num": "7",
            "place_market_order_events_handle_creation_num": "8",
        }]});
        let numbers = decode_optional_handle_numbers(&raw).unwrap().unwrap();
        assert_eq!(
            numbers,
            EventHandleCreationNumbers {
                cancel_order_events: 4,
                change_order_size_events: 5,
                fill_events: 6,
                place_limit_order_events: 7,
                place_market_order_events: 8,
            }
        );
    }

    fn raw_handle_numbers(cancel: &str) -> Value {
        json!({
            "cancel_order_events_handle_creation_num": cancel,
            "change_order_size_events_handle_creation_num": "5",
            "fill_events_handle_creation_num": "6",
            "place_limit_order_events_handle_creation_num": "7",
            "place_market_order_events_handle_creation_num": "8",
        })
    }

    #[test]
    fn test_decode_optional_handle_numbers_malformed_inner() {
        let raw = json!({"vec": [raw_handle_numbers("x")]});
        assert!(matches!(
            decode_optional_handle_numbers(&raw),
            Err(DecodeError::MalformedResponse(_))
        ));

        let mut partial = raw_handle_numbers("4");
        partial.as_object_mut().unwrap().remove("fill_events_handle_creation_num");
        assert!(matches!(
            decode_optional_handle_numbers(&json!({"vec": [partial]})),
            Err(DecodeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_optional_handle_numbers_rejects_many() {
        let two = json!({"vec": [raw_handle_numbers("4"), raw_handle_numbers("9")]});
        assert!(matches!(
            decode_optional_handle_numbers(&two),
            Err(DecodeError::MalformedResponse(_))
        ));
        let bare = json!([raw_handle_numbers("4"), raw_handle_numbers("9")]);
        assert!(matches!(
            decode_optional_handle_numbers(&bare),
            Err(DecodeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_optional_handle_numbers_rejects_scalars() {
        for raw in [json!("3"), json!(3), json!(null), json!(true), json!({"other": []})] {
            assert!(
                matches!(
                    decode_optional_handle_numbers(&raw),
                    Err(DecodeError::MalformedResponse(_))
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_coin_store() {
        let raw = json!({
            "type": "0x1::coin::CoinStore<0x1::aptos_coin::AptosCoin>",
            "data": {
                "coin": {"value": "18446744073709551615"},
                "frozen": false,
                "deposit_events": {"counter": "1", "guid": {"id": {"addr": "0x2", "creation_num": "2"}}},
                "withdraw_events": {"counter": "0", "guid": {"id": {"addr": "0x2", "creation_num": "3"}}},
            }
        });
        let store = decode_coin_store(&raw).unwrap();
        assert_eq!(store.balance, u64::MAX);
        assert!(!store.frozen);

        let bad = json!({"type": "t", "data": {"coin": {"value": "12.5"}, "frozen": false}});
        assert!(matches!(
            decode_coin_store(&bad),
            Err(DecodeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_coin_info() {
        let raw = json!({
            "type": "0x1::coin::CoinInfo<0xf::example_rocket::ExampleRocket>",
            "data": {
                "decimals": 8,
                "name": "Example Rocket",
                "symbol": "ROCKET",
                "supply": {"vec": []},
            }
        });
        let info = decode_coin_info(&raw).unwrap();
        assert_eq!(info.decimals, 8);
        assert_eq!(info.symbol, "ROCKET");
    }

    #[test]
    fn test_decode_address() {
        let addr = decode_address("0x1").unwrap();
        assert_eq!(addr.as_bytes()[31], 1);
        assert!(addr.as_bytes()[..31].iter().all(|b| *b == 0));
        assert_eq!(decode_address("1").unwrap(), addr);
        assert!(matches!(decode_address("0x"), Err(DecodeError::InvalidAddress(_))));
        assert!(matches!(
            decode_address("0xzz"),
            Err(DecodeError::InvalidAddress(_))
        ));
        assert!(matches!(
            decode_address(&format!("0x{}", "a".repeat(65))),
            Err(DecodeError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_decode_scalars() {
        assert!(decode_bool(&json!(true)).unwrap());
        assert!(decode_bool(&json!("true")).is_err());
        assert_eq!(decode_u64_list(&json!(["1", "2"])).unwrap(), vec![1, 2]);
        assert_eq!(decode_optional_u64(&json!({"vec": ["9"]})).unwrap(), Some(9));
        assert_eq!(decode_optional_u64(&json!({"vec": []})).unwrap(), None);
    }

    #[test]
    fn test_first_return() {
        assert_eq!(first_return(vec![json!(1), json!(2)], "f").unwrap(), json!(1));
        assert!(first_return(vec![], "f").is_err());
    }

    #[test]
    fn test_decode_fill_events() {
        let raw = vec![json!({
            "sequence_number": "0",
            "version": "120",
            "type": "0xc0de::user::FillEvent",
            "data": {
                "market_id": "1",
                "size": "2",
                "price": "1000",
                "maker_side": true,
                "maker": USER,
                "maker_custodian_id": "0",
                "maker_order_id": "18446744073709552616",
                "taker": "0x3",
                "taker_custodian_id": "0",
                "taker_order_id": "36893488147419103232",
                "taker_quote_fees_paid": "2",
                "sequence_number_for_trade": "0",
            }
        })];
        let events = decode_event_records::<
            crate::domain::event::wire::FillEventView,
            crate::domain::event::FillEvent,
        >(&raw)
        .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].version, 120);
        assert_eq!(events[0].data.maker_side, Side::Ask);
        assert_eq!(events[0].data.taker_order_id.counter(), 2);
    }
}
