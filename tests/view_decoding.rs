//! Sub-client tests against an in-memory viewer.
//!
//! `Canned` answers view calls by function name, event reads by handle
//! creation number and resource reads by account and type. It records
//! every view call so the argument strings the sub-clients send can be
//! checked.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{json, Value};

use econia_sdk::domain::event::{EventPage, MAX_EVENT_PAGE};
use econia_sdk::prelude::*;
use econia_sdk::program::HI_PRICE;
use econia_sdk::workflow::{Trader, TxnLog};

const USER: &str = "0x2";
const ECONIA: &str = "0xc0de";

#[derive(Debug, Clone, PartialEq)]
struct Call {
    module: String,
    function: String,
    type_args: Vec<String>,
    args: Vec<String>,
}

#[derive(Default)]
struct Canned {
    views: HashMap<String, Value>,
    events: HashMap<u64, Vec<Value>>,
    resources: HashMap<(AccountAddress, String), Value>,
    event_reads: RefCell<Vec<(Option<u64>, Option<u16>)>>,
    calls: RefCell<Vec<Call>>,
}

impl Canned {
    fn view(mut self, function: &str, value: Value) -> Self {
        self.views.insert(function.to_string(), value);
        self
    }

    fn events(mut self, creation_number: u64, events: Vec<Value>) -> Self {
        self.events.insert(creation_number, events);
        self
    }

    fn resource(mut self, account: AccountAddress, resource_type: &str, value: Value) -> Self {
        self.resources.insert((account, resource_type.to_string()), value);
        self
    }

    fn last_call(&self) -> Call {
        self.calls.borrow().last().cloned().expect("no calls recorded")
    }
}

impl ViewClient for Canned {
    async fn invoke_view(
        &self,
        module: &str,
        function: &str,
        type_args: &[String],
        args: &[String],
    ) -> Result<Vec<Value>, SdkError> {
        self.calls.borrow_mut().push(Call {
            module: module.to_string(),
            function: function.to_string(),
            type_args: type_args.to_vec(),
            args: args.to_vec(),
        });
        self.views
            .get(function)
            .map(|v| vec![v.clone()])
            .ok_or_else(|| SdkError::Other(format!("no canned response for {function}")))
    }
}

impl EventSource for Canned {
    async fn events_by_creation_number(
        &self,
        _account: &AccountAddress,
        creation_number: u64,
        start: Option<u64>,
        limit: Option<u16>,
    ) -> Result<Vec<Value>, SdkError> {
        self.event_reads.borrow_mut().push((start, limit));
        let all = self.events.get(&creation_number).cloned().unwrap_or_default();
        let start = start.unwrap_or(0) as usize;
        let limit = limit.map_or(all.len(), usize::from);
        Ok(all.into_iter().skip(start).take(limit).collect())
    }

    async fn events_by_handle(
        &self,
        _account: &AccountAddress,
        _handle_struct: &str,
        _field: &str,
        _start: Option<u64>,
        _limit: Option<u16>,
    ) -> Result<Vec<Value>, SdkError> {
        Ok(Vec::new())
    }
}

impl ResourceSource for Canned {
    async fn account_resource(
        &self,
        account: &AccountAddress,
        resource_type: &str,
    ) -> Result<Option<Value>, SdkError> {
        Ok(self
            .resources
            .get(&(*account, resource_type.to_string()))
            .cloned())
    }
}

fn client(canned: Canned) -> EconiaClient<Canned> {
    EconiaClient::with_viewer(canned, AccountAddress::from_hex(ECONIA).unwrap())
}

fn user() -> AccountAddress {
    AccountAddress::from_hex(USER).unwrap()
}

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

fn handles() -> Value {
    json!({"vec": [{
        "cancel_order_events_handle_creation_num": "4",
        "change_order_size_events_handle_creation_num": "5",
        "fill_events_handle_creation_num": "6",
        "place_limit_order_events_handle_creation_num": "7",
        "place_market_order_events_handle_creation_num": "8",
    }]})
}

fn raw_fill(taker_order_id: &str, price: &str) -> Value {
    json!({
        "sequence_number": "0",
        "version": "10",
        "type": "0xc0de::user::FillEvent",
        "data": {
            "market_id": "1",
            "size": "500",
            "price": price,
            "maker_side": true,
            "maker": "0x3",
            "maker_custodian_id": "0",
            "maker_order_id": "18446744073709552616",
            "taker": USER,
            "taker_custodian_id": "0",
            "taker_order_id": taker_order_id,
            "taker_quote_fees_paid": "1",
            "sequence_number_for_trade": "0",
        }
    })
}

// ============================================================================
// Orders & order book
// ============================================================================

#[tokio::test]
async fn test_open_orders_limits_on_the_wire() {
    let canned = Canned::default().view(
        "get_open_orders",
        json!({"asks": [raw_order(true, "1000", "3")], "bids": []}),
    );
    let client = client(canned);
    let orders = client
        .orders()
        .get_open_orders(1, Limit::AtMost(10), Limit::Unbounded)
        .await
        .unwrap();
    assert_eq!(orders.asks.len(), 1);
    assert_eq!(orders.asks[0].side, Side::Ask);

    let call = client.viewer().last_call();
    assert_eq!(call.module, "market");
    assert_eq!(call.args, vec!["1", "10", "18446744073709551615"]);
    assert!(call.type_args.is_empty());
}

#[tokio::test]
async fn test_best_prices_requests_one_level() {
    let canned = Canned::default().view(
        "get_price_levels",
        json!({
            "market_id": "1",
            "asks": [{"price": "2000", "size": "10"}],
            "bids": [],
        }),
    );
    let client = client(canned);
    let best = client.orderbooks().best_prices(1).await.unwrap();
    assert_eq!(best, (None, Some(2000)));
    assert_eq!(client.viewer().last_call().args, vec!["1", "1", "1"]);
}

#[tokio::test]
async fn test_market_order_id_side_uses_ask_flag() {
    let canned = Canned::default().view("get_market_order_id_side", json!(true));
    let client = client(canned);
    let side = client
        .orders()
        .market_order_id_side(MarketOrderId::new(7))
        .await
        .unwrap();
    assert_eq!(side, Side::Ask);
    assert_eq!(client.viewer().last_call().args, vec!["7"]);
}

#[tokio::test]
async fn test_malformed_view_surfaces_decode_error() {
    let canned = Canned::default().view("get_open_order", json!({"price": "1"}));
    let client = client(canned);
    let err = client
        .orders()
        .get_open_order(1, MarketOrderId::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Decode(DecodeError::MalformedResponse(_))));
}

// ============================================================================
// Accounts, registry & constants
// ============================================================================

#[tokio::test]
async fn test_market_account_ids_decompose() {
    let id = MarketAccountId::new(3, 9);
    let canned = Canned::default().view(
        "get_all_market_account_ids_for_user",
        json!([id.get().to_string()]),
    );
    let client = client(canned);
    let ids = client
        .accounts()
        .get_all_market_account_ids_for_user(&user())
        .await
        .unwrap();
    assert_eq!(ids, vec![id]);
    assert_eq!(ids[0].market_id(), 3);
    assert_eq!(ids[0].custodian_id(), 9);
    assert_eq!(client.viewer().last_call().args, vec![user().to_hex()]);
}

#[tokio::test]
async fn test_market_id_lookup_passes_coin_types() {
    let canned = Canned::default().view("get_market_id_base_coin", json!({"vec": ["4"]}));
    let client = client(canned);
    let faucet = AccountAddress::from_hex("0xf").unwrap();
    let coins = MarketCoins::new(
        TypeTag::struct_tag(&faucet, "example_rocket", "ExampleRocket"),
        TypeTag::struct_tag(&faucet, "example_poop", "ExamplePoop"),
    );
    let params = MarketParams {
        lot_size: 100_000,
        tick_size: 1,
        min_size: 500,
    };
    let id = client
        .registry()
        .get_market_id_base_coin(&coins, &params)
        .await
        .unwrap();
    assert_eq!(id, Some(4));

    let call = client.viewer().last_call();
    assert_eq!(call.module, "registry");
    assert_eq!(call.args, vec!["100000", "1", "500"]);
    assert_eq!(call.type_args[0], coins.base.to_string());
    assert_eq!(call.type_args[1], coins.quote.to_string());
}

#[tokio::test]
async fn test_constants_decode_by_return_type() {
    let canned = Canned::default()
        .view("get_HI_PRICE", json!(HI_PRICE.to_string()))
        .view("get_SELL", json!(true));
    let client = client(canned);
    assert_eq!(
        client.constants().integer(IntegerConstant::HiPrice).await.unwrap(),
        HI_PRICE
    );
    assert!(client.constants().flag(FlagConstant::Sell).await.unwrap());
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_fill_events_resolve_handle() {
    let canned = Canned::default()
        .view("get_market_event_handle_creation_numbers", handles())
        .events(6, vec![raw_fill("100", "1999"), raw_fill("200", "2000"), raw_fill("200", "2001")]);
    let client = client(canned);
    let records = client
        .events()
        .fill_events(&user(), 1, 0, EventPage::default())
        .await
        .unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].data.maker_side, Side::Ask);

    let fills: Vec<FillEvent> = records.into_iter().map(|r| r.data).collect();
    let last: Vec<u64> = fills_for_last_taker(&fills).iter().map(|f| f.price).collect();
    assert_eq!(last, vec![2000, 2001]);
}

#[tokio::test]
async fn test_events_without_market_account_are_empty() {
    let canned = Canned::default()
        .view("get_market_event_handle_creation_numbers", json!({"vec": []}))
        .events(4, vec![json!({"bogus": true})]);
    let client = client(canned);
    let cancels = client
        .events()
        .cancel_order_events(&user(), 1, 0, EventPage::default())
        .await
        .unwrap();
    assert!(cancels.is_empty());
}

#[tokio::test]
async fn test_all_fill_events_pages_past_one_read() {
    let fills: Vec<Value> = (0..230).map(|_| raw_fill("100", "1999")).collect();
    let canned = Canned::default()
        .view("get_market_event_handle_creation_numbers", handles())
        .events(6, fills);
    let client = client(canned);

    let first_page = client
        .events()
        .fill_events(
            &user(),
            1,
            0,
            EventPage {
                start: None,
                limit: Some(MAX_EVENT_PAGE),
            },
        )
        .await
        .unwrap();
    assert_eq!(first_page.len(), 100);

    let all = client.events().all_fill_events(&user(), 1, 0).await.unwrap();
    assert_eq!(all.len(), 230);

    let reads = client.viewer().event_reads.borrow().clone();
    assert_eq!(
        &reads[1..],
        &[
            (Some(0), Some(MAX_EVENT_PAGE)),
            (Some(100), Some(MAX_EVENT_PAGE)),
            (Some(200), Some(MAX_EVENT_PAGE)),
        ]
    );
}

#[tokio::test]
async fn test_all_events_stop_on_exact_multiple() {
    let cancels: Vec<Value> = (0..100)
        .map(|i| {
            json!({
                "sequence_number": i.to_string(),
                "version": "10",
                "type": "0xc0de::user::CancelOrderEvent",
                "data": {
                    "market_id": "1",
                    "order_id": "18446744073709552616",
                    "user": USER,
                    "custodian_id": "0",
                    "reason": 3,
                }
            })
        })
        .collect();
    let canned = Canned::default()
        .view("get_market_event_handle_creation_numbers", handles())
        .events(4, cancels);
    let client = client(canned);
    let all = client
        .events()
        .all_cancel_order_events(&user(), 1, 0)
        .await
        .unwrap();
    assert_eq!(all.len(), 100);
    assert_eq!(all[99].sequence_number, 99);
    // One full page, then an empty one.
    assert_eq!(client.viewer().event_reads.borrow().len(), 2);
}

// ============================================================================
// Coins
// ============================================================================

fn rocket() -> TypeTag {
    TypeTag::struct_tag(
        &AccountAddress::from_hex("0xf").unwrap(),
        "example_rocket",
        "ExampleRocket",
    )
}

fn coin_store(value: &str) -> Value {
    json!({
        "type": format!("0x1::coin::CoinStore<{}>", rocket()),
        "data": {"coin": {"value": value}, "frozen": false},
    })
}

#[tokio::test]
async fn test_registered_coin_balance() {
    let store_type = format!("0x1::coin::CoinStore<{}>", rocket());
    let canned = Canned::default().resource(user(), &store_type, coin_store("250000000"));
    let client = client(canned);

    assert!(client.coins().is_registered_for_coin(&user(), &rocket()).await.unwrap());
    assert_eq!(
        client.coins().coin_balance(&user(), &rocket()).await.unwrap(),
        250_000_000
    );
    let store = client.coins().coin_store(&user(), &rocket()).await.unwrap();
    assert_eq!(store.map(|s| s.frozen), Some(false));
}

#[tokio::test]
async fn test_unregistered_coin() {
    let client = client(Canned::default());
    assert!(!client.coins().is_registered_for_coin(&user(), &rocket()).await.unwrap());
    assert_eq!(client.coins().coin_store(&user(), &rocket()).await.unwrap(), None);

    let err = client.coins().coin_balance(&user(), &rocket()).await.unwrap_err();
    match err {
        SdkError::NotRegisteredForCoin { account, coin } => {
            assert_eq!(account, user());
            assert_eq!(coin, rocket());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_coin_existence_reads_issuer() {
    let issuer = AccountAddress::from_hex("0xf").unwrap();
    let info_type = format!("0x1::coin::CoinInfo<{}>", rocket());
    let canned = Canned::default().resource(
        issuer,
        &info_type,
        json!({
            "type": info_type.clone(),
            "data": {"decimals": 8, "name": "Example Rocket", "symbol": "ROCKET", "supply": {"vec": []}},
        }),
    );
    let client = client(canned);
    assert!(client.coins().does_coin_exist(&rocket()).await.unwrap());
    assert_eq!(
        client.coins().coin_info(&rocket()).await.unwrap().map(|i| i.decimals),
        Some(8)
    );

    let poop = TypeTag::struct_tag(&issuer, "example_poop", "ExamplePoop");
    assert!(!client.coins().does_coin_exist(&poop).await.unwrap());
    // Same coin, wrong account: the store lives under users, not the issuer.
    assert!(!client.coins().is_registered_for_coin(&user(), &rocket()).await.unwrap());
}

#[tokio::test]
async fn test_malformed_coin_store_is_decode_error() {
    let store_type = format!("0x1::coin::CoinStore<{}>", rocket());
    let canned = Canned::default().resource(user(), &store_type, coin_store("lots"));
    let client = client(canned);
    let err = client.coins().coin_balance(&user(), &rocket()).await.unwrap_err();
    assert!(matches!(err, SdkError::Decode(DecodeError::MalformedResponse(_))));
}

#[test]
fn test_non_struct_type_tags_are_rejected() {
    for raw in ["u64", "vector<u8>", "0x1::coin", "0xzz::coin::Coin"] {
        assert!(
            matches!(raw.parse::<TypeTag>(), Err(SdkError::Validation(_))),
            "{raw} should be rejected"
        );
    }
    assert_eq!(
        rocket().address().unwrap(),
        AccountAddress::from_hex("0xf").unwrap()
    );
}

// ============================================================================
// Workflow steps
// ============================================================================

#[derive(Default)]
struct Recording {
    sent: RefCell<Vec<EntryFunctionPayload>>,
}

impl TransactionSubmitter for Recording {
    async fn submit_and_wait(&self, payload: &EntryFunctionPayload) -> Result<TxnHash, SdkError> {
        let mut sent = self.sent.borrow_mut();
        sent.push(payload.clone());
        Ok(TxnHash::new(format!("0x{}", sent.len())))
    }
}

#[tokio::test]
async fn test_orders_at_market_narrow_the_spread() {
    let canned = Canned::default().view(
        "get_price_levels",
        json!({
            "market_id": "1",
            "asks": [{"price": "2000", "size": "10"}],
            "bids": [{"price": "1000", "size": "10"}],
        }),
    );
    let client = client(canned);
    let econia = *client.econia_address();
    let faucet = AccountAddress::from_hex("0xf").unwrap();
    let coins = MarketCoins::new(
        TypeTag::struct_tag(&faucet, "example_rocket", "ExampleRocket"),
        TypeTag::struct_tag(&faucet, "example_poop", "ExamplePoop"),
    );
    let submitter = Recording::default();
    let trader = Trader {
        econia: &econia,
        coins: &coins,
        submitter: &submitter,
        market_id: 1,
    };
    let mut log = TxnLog::new();
    trader
        .place_limit_orders_at_market(&client, 500, (1, 9), 1, &mut log)
        .await
        .unwrap();

    let txns = log.flush();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].reason, "Place limit BID/BUY order (500 lots) (1001 ticks/lot)");
    assert_eq!(txns[1].reason, "Place limit ASK/SELL order (500 lots) (1999 ticks/lot)");

    let sent = submitter.sent.borrow();
    assert_eq!(sent[0].arguments[3], MoveValue::U64(500));
    assert_eq!(sent[0].arguments[4], MoveValue::U64(1001));
}
