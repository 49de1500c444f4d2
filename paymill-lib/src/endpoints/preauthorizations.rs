//! Preauthorizations endpoint: amounts reserved on a card for later capture.

use std::sync::Arc;

use serde_json::Value;

use super::Resource;
use crate::client::ApiContext;
use crate::params::Params;
use crate::{PaymillError, Result};

const RESOURCE: Resource = Resource::Preauthorizations;

/// Parameters for [`Preauthorizations::create`].
///
/// Exactly one of `token` and `payment` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPreauthorization {
    /// Amount in minor currency units (cents).
    pub amount: u64,
    /// ISO 4217 code; the client's default currency when `None`.
    pub currency: Option<String>,
    /// Card token.
    pub token: Option<String>,
    /// Stored credit-card payment id.
    pub payment: Option<String>,
}

impl NewPreauthorization {
    /// Start a preauthorization for `amount` with no source yet.
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Preauthorize `amount` against a card token.
    pub fn with_token(amount: u64, token: impl Into<String>) -> Self {
        Self::new(amount).token(token)
    }

    /// Preauthorize `amount` against a stored payment.
    pub fn with_payment(amount: u64, payment: impl Into<String>) -> Self {
        Self::new(amount).payment(payment)
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn payment(mut self, payment: impl Into<String>) -> Self {
        self.payment = Some(payment.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Façade for `/preauthorizations`.
#[derive(Clone)]
pub struct Preauthorizations {
    context: Arc<ApiContext>,
}

impl Preauthorizations {
    pub(crate) fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }

    /// Reserve an amount against a token or a stored payment.
    pub fn create(&self, request: &NewPreauthorization) -> Result<Value> {
        let currency = super::currency_or_default(&self.context, request.currency.as_deref())?;
        let token = super::optional("token", request.token.as_deref())?;
        let payment = super::optional("payment", request.payment.as_deref())?;

        match (token, payment) {
            (None, None) => {
                return Err(PaymillError::invalid_argument(
                    "token",
                    "at least token or payment has to be passed",
                ))
            }
            (Some(_), Some(_)) => {
                return Err(PaymillError::invalid_argument(
                    "payment",
                    "only either of token|payment is acceptable",
                ))
            }
            _ => {}
        }

        let body = Params::new()
            .with("amount", request.amount)
            .with("currency", currency)
            .with("token", token)
            .with("payment", payment);
        self.context.post(RESOURCE.as_str(), body, "")
    }

    /// Fetch one preauthorization.
    pub fn details(&self, id: &str) -> Result<Value> {
        super::details(&self.context, RESOURCE, id)
    }

    /// List preauthorizations.
    ///
    /// `order`: `count`, `offset` or `created_at`.
    ///
    /// Filters: `client=<client id>`, `payment=<payment id>`,
    /// `amount=300 | >300 | <300`, `created_at=<timestamp> | <from>-<to>`.
    pub fn list(&self, order: Option<&str>, filters: Option<Params>) -> Result<Value> {
        super::list(&self.context, RESOURCE, order, filters)
    }
}
