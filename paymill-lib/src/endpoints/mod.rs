//! Resource endpoints.
//!
//! One façade per resource family. Each validates its own inputs and hands a
//! request to the shared transport core; nothing here touches the network
//! before validation has passed.

mod clients;
mod offers;
mod payments;
mod preauthorizations;
mod refunds;
mod subscriptions;
mod transactions;

pub use clients::Clients;
pub use offers::{NewOffer, OfferInterval, Offers};
pub use payments::Payments;
pub use preauthorizations::{NewPreauthorization, Preauthorizations};
pub use refunds::Refunds;
pub use subscriptions::Subscriptions;
pub use transactions::{NewTransaction, Transactions};

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::client::ApiContext;
use crate::params::Params;
use crate::{PaymillError, Result};

/// Resource families exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Payments,
    Preauthorizations,
    Transactions,
    Clients,
    Refunds,
    Offers,
    Subscriptions,
}

impl Resource {
    /// Every resource, in declaration order.
    pub const ALL: [Resource; 7] = [
        Self::Payments,
        Self::Preauthorizations,
        Self::Transactions,
        Self::Clients,
        Self::Refunds,
        Self::Offers,
        Self::Subscriptions,
    ];

    /// URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payments => "payments",
            Self::Preauthorizations => "preauthorizations",
            Self::Transactions => "transactions",
            Self::Clients => "clients",
            Self::Refunds => "refunds",
            Self::Offers => "offers",
            Self::Subscriptions => "subscriptions",
        }
    }

    /// Fields accepted as `order` by `list`.
    pub fn order_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Payments | Self::Preauthorizations | Self::Transactions => {
                &["count", "offset", "created_at"]
            }
            Self::Clients => &["count", "offset", "creditcard", "email", "created_at"],
            Self::Refunds => &[
                "count",
                "offset",
                "transaction",
                "client",
                "amount",
                "created_at",
            ],
            Self::Offers => &[
                "count",
                "offset",
                "interval",
                "amount",
                "created_at",
                "trial_period_days",
            ],
            Self::Subscriptions => &["count", "offset", "offer", "canceled_at", "created_at"],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = PaymillError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| PaymillError::invalid_argument("resource", format!("unknown resource '{s}'")))
    }
}

/// Require a non-blank identifier-like string.
pub(crate) fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PaymillError::invalid_argument(field, "should not be empty"));
    }
    Ok(trimmed)
}

/// Like [`require`], but `None` is accepted.
pub(crate) fn optional<'a>(field: &str, value: Option<&'a str>) -> Result<Option<&'a str>> {
    value.map(|v| require(field, v)).transpose()
}

/// Validate an ISO 4217 alphabetic code and upper-case it.
pub(crate) fn normalize_currency(code: &str) -> Result<String> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PaymillError::invalid_argument(
            "currency",
            format!("'{code}' is not an ISO 4217 code"),
        ));
    }
    Ok(code.to_ascii_uppercase())
}

/// Resolve an optional currency against the configured default.
pub(crate) fn currency_or_default(context: &ApiContext, currency: Option<&str>) -> Result<String> {
    normalize_currency(currency.unwrap_or(context.default_currency()))
}

/// Merge `order` and `filters` into list query parameters.
///
/// An `order` key inside `filters` overrides the argument and is held to the
/// same field set. Returns `None` when neither is given.
pub(crate) fn list_params(
    resource: Resource,
    order: Option<&str>,
    filters: Option<Params>,
) -> Result<Option<Params>> {
    let mut params = Params::new();

    if let Some(order) = order {
        params.insert("order", order);
    }

    if let Some(filters) = filters {
        params.merge(&filters);
    }

    if let Some(order) = params.get("order").filter(|value| !value.is_null()) {
        let fields = resource.order_fields();
        if !order.as_str().is_some_and(|order| fields.contains(&order)) {
            return Err(PaymillError::invalid_argument(
                "order",
                format!("should be either of {}", fields.join("|")),
            ));
        }
    }

    Ok((!params.is_empty()).then_some(params))
}

pub(crate) fn details(context: &ApiContext, resource: Resource, id: &str) -> Result<Value> {
    let id = require("id", id)?;
    context.get(resource.as_str(), id, None)
}

pub(crate) fn remove(context: &ApiContext, resource: Resource, id: &str) -> Result<Value> {
    let id = require("id", id)?;
    context.delete(resource.as_str(), id)
}

pub(crate) fn list(
    context: &ApiContext,
    resource: Resource,
    order: Option<&str>,
    filters: Option<Params>,
) -> Result<Value> {
    let params = list_params(resource, order, filters)?;
    context.get(resource.as_str(), "", params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn test_resource_names_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(resource.as_str().parse::<Resource>().unwrap(), resource);
        }
        assert!("tokens".parse::<Resource>().is_err());
    }

    #[test]
    fn test_every_resource_orders_by_count_offset_created_at() {
        for resource in Resource::ALL {
            for field in ["count", "offset", "created_at"] {
                assert!(resource.order_fields().contains(&field), "{resource} {field}");
            }
        }
    }

    #[test]
    fn test_list_params_merges_order_and_filters() {
        let params = list_params(
            Resource::Clients,
            Some("offset"),
            Some(Params::new().with("email", "x@y.com")),
        )
        .unwrap()
        .unwrap();
        assert_eq!(params.get("order").and_then(ParamValue::as_str), Some("offset"));
        assert_eq!(params.get("email").and_then(ParamValue::as_str), Some("x@y.com"));
    }

    #[test]
    fn test_list_params_empty_is_none() {
        assert!(list_params(Resource::Offers, None, None).unwrap().is_none());
        assert!(list_params(Resource::Offers, None, Some(Params::new()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_list_params_rejects_unknown_order() {
        let err = list_params(Resource::Payments, Some("email"), None).unwrap_err();
        match err {
            PaymillError::InvalidArgument { field, reason } => {
                assert_eq!(field, "order");
                assert_eq!(reason, "should be either of count|offset|created_at");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Valid for clients, not for payments.
        assert!(list_params(Resource::Clients, Some("email"), None).is_ok());
        assert!(list_params(Resource::Payments, Some(""), None).is_err());
    }

    #[test]
    fn test_list_params_checks_order_from_filters() {
        let err = list_params(
            Resource::Payments,
            Some("offset"),
            Some(Params::new().with("order", "email")),
        )
        .unwrap_err();
        assert!(matches!(err, PaymillError::InvalidArgument { ref field, .. } if field == "order"));

        assert!(list_params(Resource::Payments, None, Some(Params::new().with("order", 3))).is_err());

        let params = list_params(
            Resource::Clients,
            Some("offset"),
            Some(Params::new().with("order", "email")),
        )
        .unwrap()
        .unwrap();
        assert_eq!(params.get("order").and_then(ParamValue::as_str), Some("email"));
    }

    #[test]
    fn test_ids_stay_inside_their_resource() {
        use crate::test_utils::MockTransport;
        use crate::{Paymill, PaymillConfig};
        use std::sync::Arc;

        let transport = Arc::new(MockTransport::new());
        let paymill =
            Paymill::with_transport(PaymillConfig::new("test_key"), transport.clone()).unwrap();

        assert!(paymill.payments().remove("../clients/client_1").is_err());
        assert!(paymill.payments().details("pay_1?x=1#").is_err());
        assert!(paymill.clients().update("..", "x@y.com", None).is_err());
        assert!(paymill.refunds().refund_transaction("tran_1/../x", 100, None).is_err());
        assert!(paymill.get("payments", "pay%2F1", None).is_err());
        assert_eq!(transport.request_count(), 0);

        paymill.payments().remove("pay_1").unwrap();
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.paymill.de/v2/payments/pay_1/"
        );
    }

    #[test]
    fn test_require_and_optional() {
        assert_eq!(require("id", " pay_1 ").unwrap(), "pay_1");
        assert!(require("id", "   ").is_err());
        assert_eq!(optional("client", None).unwrap(), None);
        assert!(optional("client", Some("")).is_err());
    }

    #[test]
    fn test_currency_normalization() {
        assert_eq!(normalize_currency("eur").unwrap(), "EUR");
        assert!(normalize_currency("EU").is_err());
        assert!(normalize_currency("E1R").is_err());
        assert!(normalize_currency("").is_err());
    }
}
