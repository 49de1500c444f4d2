//! Transactions endpoint: charges against a token, a stored payment or a
//! preauthorization.

use std::sync::Arc;

use serde_json::Value;

use super::Resource;
use crate::client::ApiContext;
use crate::params::Params;
use crate::{PaymillError, Result};

const RESOURCE: Resource = Resource::Transactions;

/// Parameters for [`Transactions::create`].
///
/// Exactly one of `token`, `payment` and `preauthorization` must be set.
/// `client` may only accompany `payment`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTransaction {
    /// Amount in minor currency units (cents).
    pub amount: u64,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub client: Option<String>,
    pub token: Option<String>,
    pub payment: Option<String>,
    pub preauthorization: Option<String>,
}

impl NewTransaction {
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Charge a card token.
    pub fn with_token(amount: u64, token: impl Into<String>) -> Self {
        Self::new(amount).token(token)
    }

    /// Charge a stored payment.
    pub fn with_payment(amount: u64, payment: impl Into<String>) -> Self {
        Self::new(amount).payment(payment)
    }

    /// Capture a preauthorization.
    pub fn with_preauthorization(amount: u64, preauthorization: impl Into<String>) -> Self {
        Self::new(amount).preauthorization(preauthorization)
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn payment(mut self, payment: impl Into<String>) -> Self {
        self.payment = Some(payment.into());
        self
    }

    pub fn preauthorization(mut self, preauthorization: impl Into<String>) -> Self {
        self.preauthorization = Some(preauthorization.into());
        self
    }
}

/// Façade for `/transactions`.
#[derive(Clone)]
pub struct Transactions {
    context: Arc<ApiContext>,
}

impl Transactions {
    pub(crate) fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }

    /// Charge `amount` against exactly one source.
    pub fn create(&self, request: &NewTransaction) -> Result<Value> {
        let currency = super::currency_or_default(&self.context, request.currency.as_deref())?;
        let token = super::optional("token", request.token.as_deref())?;
        let payment = super::optional("payment", request.payment.as_deref())?;
        let preauthorization =
            super::optional("preauthorization", request.preauthorization.as_deref())?;
        let client = super::optional("client", request.client.as_deref())?;

        let sources = [token, payment, preauthorization]
            .iter()
            .filter(|source| source.is_some())
            .count();
        match sources {
            0 => {
                return Err(PaymillError::invalid_argument(
                    "token",
                    "one of token|payment|preauthorization has to be passed",
                ))
            }
            1 => {}
            _ => {
                return Err(PaymillError::invalid_argument(
                    "payment",
                    "only one of token|payment|preauthorization is acceptable",
                ))
            }
        }
        if client.is_some() && payment.is_none() {
            return Err(PaymillError::invalid_argument(
                "client",
                "a client can only be charged through one of its payments",
            ));
        }

        let body = Params::new()
            .with("amount", request.amount)
            .with("currency", currency)
            .with("description", request.description.as_deref())
            .with("client", client)
            .with("token", token)
            .with("payment", payment)
            .with("preauthorization", preauthorization);
        self.context.post(RESOURCE.as_str(), body, "")
    }

    /// Fetch one transaction.
    pub fn details(&self, id: &str) -> Result<Value> {
        super::details(&self.context, RESOURCE, id)
    }

    /// List transactions.
    ///
    /// `order`: `count`, `offset` or `created_at`.
    ///
    /// Filters: `client=<client id>`, `payment=<payment id>`,
    /// `amount=300 | >300 | <300`, `description=<text>`, `status=<status>`,
    /// `created_at` and `updated_at` as `<timestamp> | <from>-<to>`.
    pub fn list(&self, order: Option<&str>, filters: Option<Params>) -> Result<Value> {
        super::list(&self.context, RESOURCE, order, filters)
    }
}
