//! Print the top of one market's book and, optionally, a user's accounts.
//!
//! Run: cargo run --example read_market -- <market_id> [user_address]
//!
//! `APTOS_NODE_URL` and `ECONIA_ADDR` select the deployment.

use econia_sdk::prelude::*;
use econia_sdk::program::APTOS_COIN;
use econia_sdk::workflow::report;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let market_id: u64 = args
        .next()
        .ok_or_else(|| SdkError::Validation("usage: read_market <market_id> [user]".into()))?
        .parse()
        .map_err(|_| SdkError::Validation("market_id must be an integer".into()))?;
    let user = args.next().map(|raw| AccountAddress::from_hex(&raw)).transpose()?;

    let config = WorkflowConfig::from_env()?;
    let client = NodeClient::builder()
        .node_url(&config.node_url)
        .econia_address(&config.econia_address.to_hex_literal())
        .build()?;

    let levels = client
        .orderbooks()
        .get_price_levels(market_id, Limit::AtMost(5), Limit::AtMost(5))
        .await?;
    print!("{}", report::render_price_levels(&levels));
    if let Some(spread) = levels.spread() {
        println!("  * Spread: {spread} ticks");
    }

    let orders = client.orders().get_open_orders_all(market_id).await?;
    println!("OPEN ORDERS: {} bids, {} asks", orders.bids.len(), orders.asks.len());
    for order in orders.iter().take(10) {
        println!(
            "  * {} {} lots @ {} ticks/lot (id {}, user {})",
            order.side, order.size, order.price, order.market_order_id, order.user
        );
    }

    if let Some(user) = user {
        match client.coins().coin_store(&user, &APTOS_COIN).await? {
            Some(store) => println!("APT: {} octas", store.balance),
            None => println!("APT: not registered"),
        }
        for account in client.accounts().get_market_accounts(&user).await? {
            println!(
                "MARKET ACCOUNT {}: base {}/{} quote {}/{} ({} bids, {} asks)",
                account.market_account_id(),
                account.base_available,
                account.base_total,
                account.quote_available,
                account.quote_total,
                account.bids.len(),
                account.asks.len()
            );
        }
    }
    Ok(())
}
