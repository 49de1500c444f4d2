//! Payments endpoint: stored payment instruments (cards, debit accounts).

use std::sync::Arc;

use serde_json::Value;

use super::Resource;
use crate::client::ApiContext;
use crate::params::Params;
use crate::Result;

const RESOURCE: Resource = Resource::Payments;

/// Façade for `/payments`.
#[derive(Clone)]
pub struct Payments {
    context: Arc<ApiContext>,
}

impl Payments {
    pub(crate) fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }

    /// Store the payment instrument behind `token`, optionally for `client`.
    pub fn create(&self, token: &str, client: Option<&str>) -> Result<Value> {
        let token = super::require("token", token)?;
        let client = super::optional("client", client)?;

        let body = Params::new().with("token", token).with("client", client);
        self.context.post(RESOURCE.as_str(), body, "")
    }

    /// Fetch one payment.
    pub fn details(&self, id: &str) -> Result<Value> {
        super::details(&self.context, RESOURCE, id)
    }

    /// Delete one payment.
    pub fn remove(&self, id: &str) -> Result<Value> {
        super::remove(&self.context, RESOURCE, id)
    }

    /// List payments.
    ///
    /// `order`: `count`, `offset` or `created_at`.
    ///
    /// Filters: `card_type=<card_type>`,
    /// `created_at=<timestamp> | <from>-<to>`.
    pub fn list(&self, order: Option<&str>, filters: Option<Params>) -> Result<Value> {
        super::list(&self.context, RESOURCE, order, filters)
    }
}
