//! Create Transaction Example
//!
//! Walks through a one-off charge against the test-mode API:
//! - Client creation
//! - Storing a payment from a bridge token
//! - Charging the stored payment
//! - Reading the outcome from the response code
//! - Refunding part of the charge
//!
//! # Usage
//!
//! ```bash
//! export PAYMILL_PRIVATE_KEY=<test private key>
//! cargo run --example create_transaction -- <bridge token>
//! ```

use paymill_lib::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("paymill_lib=debug")
        .init();

    let token = std::env::args()
        .nth(1)
        .ok_or("usage: create_transaction <bridge token>")?;

    let paymill = Paymill::from_env()?;
    println!("Using {paymill}");

    let client = paymill
        .clients()
        .create("demo@example.com", Some("create_transaction example"))?;
    let client_id = client["data"]["id"].as_str().unwrap_or_default().to_string();
    println!("Client: {client_id}");

    let payment = paymill.payments().create(&token, Some(client_id.as_str()))?;
    let payment_id = payment["data"]["id"].as_str().unwrap_or_default().to_string();
    println!("Payment: {payment_id}");

    let transaction = paymill.transactions().create(
        &NewTransaction::with_payment(4200, &payment_id)
            .client(&client_id)
            .description("Example order"),
    )?;
    let transaction_id = transaction["data"]["id"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    match ResponseCode::from_response(&transaction) {
        Some(code) if code.is_success() => println!("Charged: {transaction_id}"),
        Some(code) => {
            println!("Declined: {code}");
            return Ok(());
        }
        None => println!("No response code on {transaction_id}"),
    }

    let refund = paymill
        .refunds()
        .refund_transaction(&transaction_id, 1200, Some("partial refund"))?;
    println!("Refund: {}", refund["data"]["id"]);

    let recent = paymill.transactions().list(
        Some("created_at"),
        Some(filters::amount_greater_than(1000)),
    )?;
    println!("Transactions over 10.00: {}", recent["data_count"]);

    Ok(())
}
