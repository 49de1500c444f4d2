//! Offers endpoint: recurring billing plans that subscriptions refer to.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Resource;
use crate::client::ApiContext;
use crate::params::Params;
use crate::{PaymillError, Result};

const RESOURCE: Resource = Resource::Offers;

/// Billing period of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferInterval {
    Week,
    Month,
    Year,
}

impl OfferInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for OfferInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferInterval {
    type Err = PaymillError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(PaymillError::invalid_argument(
                "interval",
                "enum should be either of week|month|year",
            )),
        }
    }
}

/// Parameters for [`Offers::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOffer {
    /// Amount charged per interval, in minor currency units.
    pub amount: u64,
    pub interval: OfferInterval,
    pub name: String,
    /// The client's default currency when `None`.
    pub currency: Option<String>,
}

impl NewOffer {
    pub fn new(amount: u64, interval: OfferInterval, name: impl Into<String>) -> Self {
        Self {
            amount,
            interval,
            name: name.into(),
            currency: None,
        }
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Façade for `/offers`.
#[derive(Clone)]
pub struct Offers {
    context: Arc<ApiContext>,
}

impl Offers {
    pub(crate) fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }

    /// Create an offer.
    pub fn create(&self, offer: &NewOffer) -> Result<Value> {
        let name = super::require("name", &offer.name)?;
        let currency = super::currency_or_default(&self.context, offer.currency.as_deref())?;

        let body = Params::new()
            .with("amount", offer.amount)
            .with("interval", offer.interval.as_str())
            .with("name", name)
            .with("currency", currency);
        self.context.post(RESOURCE.as_str(), body, "")
    }

    /// Fetch one offer.
    pub fn details(&self, id: &str) -> Result<Value> {
        super::details(&self.context, RESOURCE, id)
    }

    /// Rename an offer. Amount and interval are fixed once created.
    pub fn update(&self, id: &str, name: &str) -> Result<Value> {
        let id = super::require("id", id)?;
        let name = super::require("name", name)?;

        self.context
            .put(RESOURCE.as_str(), Params::new().with("name", name), id)
    }

    /// Delete one offer.
    pub fn remove(&self, id: &str) -> Result<Value> {
        super::remove(&self.context, RESOURCE, id)
    }

    /// List offers.
    ///
    /// `order`: `count`, `offset`, `interval`, `amount`, `created_at` or
    /// `trial_period_days`.
    ///
    /// Filters: `name=<name>`, `trial_period_days=<days>`,
    /// `amount=300 | >300 | <300`,
    /// `created_at` and `updated_at` as `<timestamp> | <from>-<to>`.
    pub fn list(&self, order: Option<&str>, filters: Option<Params>) -> Result<Value> {
        super::list(&self.context, RESOURCE, order, filters)
    }
}
