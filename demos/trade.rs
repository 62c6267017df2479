//! Interactive walkthrough of an Econia market against a live deployment.
//!
//! Sets up (or reuses) a market for the faucet's example coins, funds two
//! fresh accounts, then places, resizes, swaps, cancels and crosses orders
//! while reporting the book after each step.
//!
//! Configuration comes from the environment (a `.env` file is honored):
//! `APTOS_NODE_URL`, `APTOS_FAUCET_URL`, `ECONIA_ADDR`, `FAUCET_ADDR`,
//! `ECONIA_KEY` (`.` for the local deployer) and `MIN_SIZE`. Everything
//! defaults to the local docker deployment.
//!
//! Run: cargo run --example trade --features native

use std::io::{self, BufRead, Write};

use econia_sdk::domain::event::{EventPage, FillEvent, MAX_EVENT_PAGE};
use econia_sdk::prelude::*;
use econia_sdk::program::{
    build_cancel_all_orders_user, build_change_order_size_user, build_deposit_from_coinstore,
    build_faucet_mint, build_register_market_account,
    build_register_market_base_coin_from_coinstore, build_set_recognized_market,
    build_swap_between_coinstores_entry, NO_CUSTODIAN,
};
use econia_sdk::shared::wholes_to_subunits;
use econia_sdk::workflow::report::{self, CoinDecimals, WalletBalances};
use econia_sdk::workflow::{exec, Trader};

const ROCKET_DECIMALS: u32 = 8;
const POOP_DECIMALS: u32 = 6;
/// The faucet hands out one APT per request.
const ONE_APT: u64 = 100_000_000;

/// 0.001 rocket per lot and 0.000001 poop per tick.
const LOT_SIZE: u64 = 100_000;
const TICK_SIZE: u64 = 1;

const BUY_LOTS: u64 = 1_000;
const BUY_PRICE: u64 = 1_000;
const SELL_LOTS: u64 = 1_000;
const SELL_PRICE: u64 = 2_000;

struct Session {
    config: WorkflowConfig,
    client: EconiaClient<NodeViewer>,
    http: NodeHttp,
    faucet: FaucetClient,
    coins: MarketCoins,
    log: TxnLog,
}

impl Session {
    fn new(config: WorkflowConfig) -> Self {
        let http = NodeHttp::new(&config.node_url);
        let client = EconiaClient::with_viewer(
            NodeViewer::new(http.clone(), config.econia_address),
            config.econia_address,
        );
        let faucet = FaucetClient::new(&config.faucet_url, http.clone());
        let coins = MarketCoins::new(
            TypeTag::struct_tag(&config.faucet_address, "example_rocket", "ExampleRocket"),
            TypeTag::struct_tag(&config.faucet_address, "example_poop", "ExamplePoop"),
        );
        Self {
            config,
            client,
            http,
            faucet,
            coins,
            log: TxnLog::new(),
        }
    }

    fn market_params(&self) -> MarketParams {
        MarketParams {
            lot_size: LOT_SIZE,
            tick_size: TICK_SIZE,
            min_size: self.config.min_size,
        }
    }

    fn submitter(&self, account: LocalAccount) -> NodeSubmitter {
        NodeSubmitter::new(self.http.clone(), account)
    }

    fn trader<'a>(&'a self, submitter: &'a NodeSubmitter, market_id: u64) -> Trader<'a, NodeSubmitter> {
        Trader {
            econia: &self.config.econia_address,
            coins: &self.coins,
            submitter,
            market_id,
        }
    }

    fn dump_txns(&mut self) {
        print!("{}", report::render_txns(&self.log.flush()));
    }

    async fn report_best_price_levels(&self, market_id: u64) -> Result<(), SdkError> {
        let levels = self
            .client
            .orderbooks()
            .get_price_levels(market_id, Limit::AtMost(1), Limit::AtMost(1))
            .await?;
        print!("{}", report::render_price_levels(&levels));
        Ok(())
    }

    async fn fills(&self, user: &AccountAddress, market_id: u64) -> Result<Vec<FillEvent>, SdkError> {
        let records = self
            .client
            .events()
            .all_fill_events(user, market_id, NO_CUSTODIAN)
            .await?;
        Ok(records.into_iter().map(|r| r.data).collect())
    }

    async fn wallet(&self, user: &AccountAddress) -> Result<WalletBalances, SdkError> {
        let coins = self.client.coins();
        Ok(WalletBalances {
            base: coins.coin_balance(user, &self.coins.base).await?,
            quote: coins.coin_balance(user, &self.coins.quote).await?,
        })
    }

    async fn mint(
        &mut self,
        submitter: &NodeSubmitter,
        coin: &TypeTag,
        wholes: u64,
        decimals: u32,
    ) -> Result<(), SdkError> {
        let payload = build_faucet_mint(
            &self.config.faucet_address,
            coin,
            wholes_to_subunits(wholes, decimals)?,
        );
        let reason = format!("Mint {wholes} {} (yet to be deposited)", coin.parts().2);
        exec(submitter, &payload, reason, &mut self.log).await?;
        Ok(())
    }

    /// Find the market for the example coins, registering it if needed.
    async fn setup_market(&mut self) -> Result<u64, SdkError> {
        let params = self.market_params();
        let existing = self
            .client
            .registry()
            .get_market_id_base_coin(&self.coins, &params)
            .await?;

        let market_id = match existing {
            Some(id) => id,
            None => {
                let registrant = self.submitter(LocalAccount::generate());
                // Registration burns more than one faucet drip of utility coin.
                for _ in 0..5 {
                    self.faucet
                        .fund_account(registrant.account().address(), ONE_APT)
                        .await?;
                }
                println!("Market does not exist yet, creating one...");
                let payload = build_register_market_base_coin_from_coinstore(
                    &self.config.econia_address,
                    &self.coins,
                    None,
                    &params,
                );
                exec(&registrant, &payload, "Create a new market", &mut self.log).await?;

                let id = self
                    .client
                    .registry()
                    .get_market_id_base_coin(&self.coins, &params)
                    .await?
                    .ok_or_else(|| SdkError::Other("market missing after registration".into()))?;
                let events = self
                    .client
                    .registry()
                    .market_registration_events(EventPage {
                        start: None,
                        limit: Some(MAX_EVENT_PAGE),
                    })
                    .await?;
                if let Some(event) = events.iter().find(|e| e.data.market_id == id) {
                    print!("{}", report::render_registration_event(&event.data));
                }
                id
            }
        };
        println!("Market ID: {market_id}");

        if let Some(key) = self.config.econia_key.clone() {
            let deployer = self.submitter(LocalAccount::from_private_key_hex(&key)?);
            let rocket = self.coins.base.clone();
            self.mint(&deployer, &rocket, 1, ROCKET_DECIMALS).await?;
            let payload = build_set_recognized_market(&self.config.econia_address, market_id);
            let reason = format!(
                "Recognize the market (id {market_id}, min size {})",
                self.config.min_size
            );
            exec(&deployer, &payload, reason, &mut self.log).await?;
        }
        Ok(market_id)
    }

    /// A fresh account with a market account holding `base_wholes` rocket
    /// and `quote_wholes` poop. Twice as much is minted to the coin store.
    async fn setup_account(
        &mut self,
        market_id: u64,
        base_wholes: u64,
        quote_wholes: u64,
    ) -> Result<NodeSubmitter, SdkError> {
        let submitter = self.submitter(LocalAccount::generate());
        let address = *submitter.account().address();
        let econia = self.config.econia_address;

        self.faucet.fund_account(&address, ONE_APT).await?;
        let (rocket, poop) = (self.coins.base.clone(), self.coins.quote.clone());
        self.mint(&submitter, &rocket, base_wholes * 2, ROCKET_DECIMALS).await?;
        self.mint(&submitter, &poop, quote_wholes * 2, POOP_DECIMALS).await?;

        let payload = build_register_market_account(&econia, &self.coins, market_id, NO_CUSTODIAN);
        let reason = format!("Register a new account in market {market_id}");
        exec(&submitter, &payload, reason, &mut self.log).await?;

        let before = self
            .client
            .accounts()
            .get_market_account(&address, market_id, NO_CUSTODIAN)
            .await?;
        let wallet_before = self.wallet(&address).await?;

        let deposits = [
            (rocket, wholes_to_subunits(base_wholes, ROCKET_DECIMALS)?, base_wholes),
            (poop, wholes_to_subunits(quote_wholes, POOP_DECIMALS)?, quote_wholes),
        ];
        for (coin, subunits, wholes) in deposits {
            let payload =
                build_deposit_from_coinstore(&econia, &coin, market_id, NO_CUSTODIAN, subunits);
            let reason = format!("Deposit {wholes} {} to market account", coin.parts().2);
            exec(&submitter, &payload, reason, &mut self.log).await?;
        }

        let after = self
            .client
            .accounts()
            .get_market_account(&address, market_id, NO_CUSTODIAN)
            .await?;
        let wallet_after = self.wallet(&address).await?;
        let decimals = CoinDecimals {
            base: ROCKET_DECIMALS,
            quote: POOP_DECIMALS,
        };
        print!("{}", report::render_balance_change(&before, &after, decimals)?);
        print!("{}", report::render_wallet_change(wallet_before, wallet_after, decimals)?);
        Ok(submitter)
    }

    async fn report_last_limit_order(
        &self,
        user: &AccountAddress,
        market_id: u64,
        side: Side,
    ) -> Result<(), SdkError> {
        let events = self
            .client
            .events()
            .all_place_limit_order_events(user, market_id, NO_CUSTODIAN)
            .await?;
        if let Some(event) = events.iter().rev().find(|e| e.data.side == side) {
            print!("{}", report::render_place_limit_order_event(&event.data));
        }
        Ok(())
    }

    async fn report_crossing_fills(&self, user: &AccountAddress, market_id: u64) -> Result<(), SdkError> {
        let fills = self.fills(user, market_id).await?;
        print!("{}", report::render_fill_breakdown(&fills));
        let open = self.client.orders().get_open_orders_all(market_id).await?;
        print!("{}", report::render_last_order_status(&fills, &open));
        Ok(())
    }
}

fn pause(message: &str) -> Result<(), SdkError> {
    print!("\n\n{message}");
    io::stdout()
        .flush()
        .map_err(|e| SdkError::Other(e.to_string()))?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| SdkError::Other(e.to_string()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "econia_sdk=info".into()),
        )
        .init();

    let config = WorkflowConfig::from_env()?;
    tracing::info!(node = %config.node_url, econia = %config.econia_address, "starting");
    let mut session = Session::new(config);
    let econia = session.config.econia_address;

    pause("Press enter to initialize (or obtain) the market.")?;
    let market_id = session.setup_market().await?;
    session.dump_txns();

    // ── Clean-up ─────────────────────────────────────────────────────────
    let (best_bid, best_ask) = session.client.orderbooks().best_prices(market_id).await?;
    if best_bid.is_some() || best_ask.is_some() {
        pause("Press enter to clean-up open orders on the market.")?;
        let sweeper = session.setup_account(market_id, 1_000_000, 1_000_000).await?;
        let address = *sweeper.account().address();
        let mut log = std::mem::take(&mut session.log);
        {
            let trader = session.trader(&sweeper, market_id);
            if best_bid.is_some() {
                trader.place_market_order(Side::Ask, 1_000_000, &mut log).await?;
            }
            if best_ask.is_some() {
                trader.place_market_order(Side::Bid, 1_000_000, &mut log).await?;
            }
        }
        session.log = log;
        session.dump_txns();
        let cleared = session.fills(&address, market_id).await?.len();
        println!("Cleared {cleared} orders off of the market!");
        session.report_best_price_levels(market_id).await?;
    } else {
        println!("There are no open orders on this market right now.");
    }

    // ── Account A: limit orders ──────────────────────────────────────────
    pause("Press enter to setup an Account A with funds.")?;
    let account_a = session.setup_account(market_id, 10, 10_000).await?;
    let address_a = *account_a.account().address();
    println!("Account A was setup: {address_a}");
    session.dump_txns();

    pause("Press enter to place limit orders with Account A.")?;
    let mut log = std::mem::take(&mut session.log);
    session
        .trader(&account_a, market_id)
        .place_limit_order(Side::Bid, BUY_LOTS, BUY_PRICE, &mut log)
        .await?;
    session.report_last_limit_order(&address_a, market_id, Side::Bid).await?;
    session
        .trader(&account_a, market_id)
        .place_limit_order(Side::Ask, SELL_LOTS, SELL_PRICE, &mut log)
        .await?;
    session.report_last_limit_order(&address_a, market_id, Side::Ask).await?;
    session.log = log;
    println!("Account A has finished placing limit orders.");
    match session.fills(&address_a, market_id).await?.len() {
        0 => println!("  * There were no limit orders filled by any orders placed."),
        n => println!("  * There were {n} limit orders filled by the orders placed."),
    }
    session.dump_txns();
    session.report_best_price_levels(market_id).await?;

    // ── Account A: size changes ──────────────────────────────────────────
    pause("Press enter to change Account A's order sizes.")?;
    let account = session
        .client
        .accounts()
        .get_market_account(&address_a, market_id, NO_CUSTODIAN)
        .await?;
    for (i, bid) in account.bids.iter().enumerate() {
        let new_size = bid.size * (i as u64 + 2);
        let payload =
            build_change_order_size_user(&econia, market_id, Side::Bid, bid.market_order_id, new_size);
        let reason = format!("Increase bid order size (#{})", i + 1);
        exec(&account_a, &payload, reason, &mut session.log).await?;
    }
    for (i, ask) in account.asks.iter().enumerate() {
        let new_size = ask.size / (i as u64 + 2);
        let payload =
            build_change_order_size_user(&econia, market_id, Side::Ask, ask.market_order_id, new_size);
        let reason = format!("Decrease ask order size (#{})", i + 1);
        exec(&account_a, &payload, reason, &mut session.log).await?;
    }
    session.dump_txns();

    // ── Account A: swaps ─────────────────────────────────────────────────
    pause("Press enter to swap with Account A.")?;
    for (direction, reason) in [
        (Side::Bid, "Execute BID swap order for Account A"),
        (Side::Ask, "Execute ASK swap order for Account A"),
    ] {
        let params = SwapParams::any_price(market_id, econia, direction);
        let payload = build_swap_between_coinstores_entry(&econia, &session.coins, &params);
        exec(&account_a, &payload, reason, &mut session.log).await?;
    }
    session.dump_txns();

    pause("Press enter to place limit orders with Account A (again).")?;
    let mut log = std::mem::take(&mut session.log);
    {
        let trader = session.trader(&account_a, market_id);
        trader.place_limit_order(Side::Bid, BUY_LOTS, BUY_PRICE, &mut log).await?;
        trader.place_limit_order(Side::Ask, SELL_LOTS, SELL_PRICE, &mut log).await?;
    }
    session.log = log;
    session.dump_txns();

    // ── Account B: market orders ─────────────────────────────────────────
    pause("Press enter to setup an Account B with funds.")?;
    let account_b = session.setup_account(market_id, 10, 10_000).await?;
    let address_b = *account_b.account().address();
    println!("Account B was setup: {address_b}");
    session.dump_txns();

    pause("Press enter to place market orders (buy and sell) with Account B.")?;
    let mut log = std::mem::take(&mut session.log);
    {
        let trader = session.trader(&account_b, market_id);
        trader.place_market_order(Side::Bid, 500, &mut log).await?;
        trader.place_market_order(Side::Ask, 500, &mut log).await?;
    }
    session.log = log;
    let fill_count = session.fills(&address_b, market_id).await?.len();
    println!("Account B has finished placing 2 market orders.");
    println!("  * This resulted in {fill_count} limit orders getting filled.");
    session.dump_txns();
    session.report_best_price_levels(market_id).await?;

    // ── Account A: cancel everything ─────────────────────────────────────
    pause("Press enter to cancel all of Account A's outstanding orders.")?;
    for (side, reason) in [
        (Side::Ask, "Cancel all ASKS for Account A"),
        (Side::Bid, "Cancel all BIDS for Account A"),
    ] {
        let payload = build_cancel_all_orders_user(&econia, market_id, side);
        exec(&account_a, &payload, reason, &mut session.log).await?;
    }
    let cancelled = session
        .client
        .events()
        .all_cancel_order_events(&address_a, market_id, NO_CUSTODIAN)
        .await?
        .len();
    println!("Account A has cancelled all {cancelled} of their orders.");
    session.dump_txns();
    session.report_best_price_levels(market_id).await?;

    // ── Account A: competitive quotes ────────────────────────────────────
    pause("Press enter to place competitive limit orders (top-of-book) with Account A.")?;
    let sizes = [500, 600, 700, 800, 900];
    let mut log = std::mem::take(&mut session.log);
    let mut start_ask_price = None;
    {
        let trader = session.trader(&account_a, market_id);
        for (i, size) in sizes.iter().enumerate() {
            let (_, ask) = trader
                .place_limit_orders_at_market(
                    &session.client,
                    *size,
                    (BUY_PRICE, SELL_PRICE),
                    1,
                    &mut log,
                )
                .await?;
            if i == 0 {
                start_ask_price = ask;
            }
        }
    }
    session.log = log;
    println!("Account A has created multiple competitive limit orders!");
    session.dump_txns();
    session.report_best_price_levels(market_id).await?;

    let Some(start_ask_price) = start_ask_price else {
        return Ok(());
    };

    // ── Account B: spread-crossing orders ────────────────────────────────
    let equal_volume: u64 = sizes.iter().sum();

    pause("Press enter to place spread-crossing limit order with Account B (no remainder).")?;
    let mut log = std::mem::take(&mut session.log);
    session
        .trader(&account_b, market_id)
        .place_limit_order(Side::Ask, equal_volume, BUY_PRICE, &mut log)
        .await?;
    session.log = log;
    session.report_crossing_fills(&address_b, market_id).await?;

    pause("Press enter to place spread-crossing limit order with Account B (w/ remainder).")?;
    let mut log = std::mem::take(&mut session.log);
    session
        .trader(&account_b, market_id)
        .place_limit_order(Side::Bid, equal_volume * 2, start_ask_price, &mut log)
        .await?;
    session.log = log;
    session.report_crossing_fills(&address_b, market_id).await?;
    session.dump_txns();

    println!("\n\nTHE END!");
    Ok(())
}
