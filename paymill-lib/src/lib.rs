//! Paymill client library.
//!
//! Blocking binding for the Paymill v2 REST API. A [`Paymill`] handle holds
//! the private key and base URL; every resource is reached through one of its
//! endpoint façades, and every call returns the decoded JSON body or a typed
//! [`PaymillError`].
//!
//! # Features
//!
//! - **Resource endpoints**: payments, preauthorizations, transactions,
//!   clients, refunds, offers and subscriptions
//! - **Local validation**: missing or conflicting arguments fail before any
//!   network traffic
//! - **Transport abstraction**: the [`HttpTransport`] trait lets callers swap
//!   the default `reqwest` client, e.g. for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use paymill_lib::{NewTransaction, Paymill, PaymillConfig};
//!
//! # fn main() -> paymill_lib::Result<()> {
//! let paymill = Paymill::new(PaymillConfig::new("your_private_key"))?;
//!
//! let client = paymill.clients().create("customer@example.com", None)?;
//! let client_id = client["data"]["id"].as_str().unwrap_or_default();
//!
//! let payment = paymill.payments().create("tok_from_bridge", Some(client_id))?;
//! let payment_id = payment["data"]["id"].as_str().unwrap_or_default();
//!
//! paymill.transactions().create(
//!     &NewTransaction::with_payment(4200, payment_id)
//!         .client(client_id)
//!         .description("Order #1"),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod filters;
pub mod params;
pub mod prelude;
pub mod request;
pub mod response_code;
pub mod transport;

/// Test utilities for exercising the client without a network.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::{decode_response, Paymill};
pub use config::{PaymillConfig, DEFAULT_API_URL, DEFAULT_CURRENCY};
pub use endpoints::{
    Clients, NewOffer, NewPreauthorization, NewTransaction, OfferInterval, Offers, Payments,
    Preauthorizations, Refunds, Resource, Subscriptions, Transactions,
};
pub use errors::{ApiError, ErrorContext, PaymillError};
pub use params::{ParamValue, Params};
pub use response_code::{ResponseCategory, ResponseCode};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Common result alias for Paymill operations.
pub type Result<T> = std::result::Result<T, PaymillError>;
