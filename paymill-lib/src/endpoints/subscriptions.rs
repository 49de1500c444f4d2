//! Subscriptions endpoint: a client's payment bound to an offer.

use std::sync::Arc;

use serde_json::Value;

use super::Resource;
use crate::client::ApiContext;
use crate::params::{ParamValue, Params};
use crate::{PaymillError, Result};

const RESOURCE: Resource = Resource::Subscriptions;

/// Façade for `/subscriptions`.
#[derive(Clone)]
pub struct Subscriptions {
    context: Arc<ApiContext>,
}

impl Subscriptions {
    pub(crate) fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }

    /// Subscribe `client` to `offer`, billed through `payment`.
    pub fn create(&self, client: &str, offer: &str, payment: &str) -> Result<Value> {
        let client = super::require("client", client)?;
        let offer = super::require("offer", offer)?;
        let payment = super::require("payment", payment)?;

        let body = Params::new()
            .with("client", client)
            .with("offer", offer)
            .with("payment", payment);
        self.context.post(RESOURCE.as_str(), body, "")
    }

    /// Fetch one subscription.
    pub fn details(&self, id: &str) -> Result<Value> {
        super::details(&self.context, RESOURCE, id)
    }

    /// Set whether the subscription ends with the current period.
    ///
    /// Accepts a `bool` or the integers `0`/`1`.
    pub fn update(&self, id: &str, cancel_at_period_end: impl Into<ParamValue>) -> Result<Value> {
        let id = super::require("id", id)?;
        let cancel = as_flag(cancel_at_period_end.into())?;

        let body = Params::new().with("cancel_at_period_end", cancel);
        self.context.put(RESOURCE.as_str(), body, id)
    }

    /// Delete one subscription.
    pub fn remove(&self, id: &str) -> Result<Value> {
        super::remove(&self.context, RESOURCE, id)
    }

    /// List subscriptions.
    ///
    /// `order`: `count`, `offset`, `offer`, `canceled_at` or `created_at`.
    ///
    /// Filters: `offer=<offer id>`, `created_at=<timestamp> | <from>-<to>`.
    pub fn list(&self, order: Option<&str>, filters: Option<Params>) -> Result<Value> {
        super::list(&self.context, RESOURCE, order, filters)
    }
}

fn as_flag(value: ParamValue) -> Result<bool> {
    match value {
        ParamValue::Bool(flag) => Ok(flag),
        ParamValue::Number(n) => match n.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(PaymillError::invalid_argument(
                "cancel_at_period_end",
                format!("expected 0 or 1, got {n}"),
            )),
        },
        ParamValue::Null => Err(PaymillError::invalid_argument(
            "cancel_at_period_end",
            "should not be empty",
        )),
        ParamValue::Text(_) => Err(PaymillError::invalid_argument(
            "cancel_at_period_end",
            "should be a boolean",
        )),
    }
}
