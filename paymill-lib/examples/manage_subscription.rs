//! Manage Subscription Example
//!
//! Sets up recurring billing and tears it down again:
//! - Offer creation and renaming
//! - Subscribing an existing client and payment
//! - Cancelling at the end of the period
//! - Error handling for unknown identifiers
//!
//! # Usage
//!
//! ```bash
//! export PAYMILL_PRIVATE_KEY=<test private key>
//! cargo run --example manage_subscription -- <client id> <payment id>
//! ```

use paymill_lib::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("paymill_lib=info")
        .init();

    let mut args = std::env::args().skip(1);
    let (client_id, payment_id) = match (args.next(), args.next()) {
        (Some(client), Some(payment)) => (client, payment),
        _ => return Err("usage: manage_subscription <client id> <payment id>".into()),
    };

    let paymill = Paymill::from_env()?;

    let offer = paymill
        .offers()
        .create(&NewOffer::new(990, OfferInterval::Month, "Monthly plan"))?;
    let offer_id = offer["data"]["id"].as_str().unwrap_or_default().to_string();
    paymill.offers().update(&offer_id, "Monthly plan (legacy)")?;
    println!("Offer: {offer_id}");

    let subscription = paymill
        .subscriptions()
        .create(&client_id, &offer_id, &payment_id)?;
    let subscription_id = subscription["data"]["id"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    println!("Subscription: {subscription_id}");

    paymill.subscriptions().update(&subscription_id, true)?;
    println!("Subscription ends with the current period");

    let active = paymill.subscriptions().list(
        Some("created_at"),
        Some(Params::new().with("offer", offer_id.as_str())),
    )?;
    println!("Subscriptions on this offer: {}", active["data_count"]);

    match paymill.subscriptions().details("sub_does_not_exist") {
        Err(PaymillError::Api(ApiError::NotFound(context))) => {
            println!("Lookup failed as expected: {:?}", context.params);
        }
        Err(other) => return Err(other.into()),
        Ok(_) => println!("Unexpectedly found a subscription"),
    }

    paymill.subscriptions().remove(&subscription_id)?;
    paymill.offers().remove(&offer_id)?;
    Ok(())
}
