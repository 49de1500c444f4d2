//! Client context and transport core.
//!
//! [`Paymill`] owns the immutable configuration and the transport, and builds
//! every resource endpoint up front. All endpoints funnel through the same
//! pipeline: descriptor → authenticated [`HttpRequest`](crate::request::HttpRequest)
//! → transport → JSON value or typed error.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::PaymillConfig;
use crate::endpoints::{
    Clients, Offers, Payments, Preauthorizations, Refunds, Subscriptions, Transactions,
};
use crate::errors::ApiError;
use crate::params::Params;
use crate::request::ApiRequest;
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::Result;

/// Shared, read-only state behind every endpoint.
pub(crate) struct ApiContext {
    config: PaymillConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ApiContext {
    pub(crate) fn config(&self) -> &PaymillConfig {
        &self.config
    }

    pub(crate) fn default_currency(&self) -> &str {
        &self.config.default_currency
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, request),
            fields(method = %request.method, resource = %request.resource, id = %request.id)
        )
    )]
    fn dispatch(&self, request: ApiRequest) -> Result<Value> {
        let http = request.to_http(&self.config)?;
        let response = self.transport.execute(&http)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = response.status, "paymill response received");

        decode_response(response)
    }

    pub(crate) fn get(&self, resource: &str, id: &str, params: Option<Params>) -> Result<Value> {
        self.dispatch(ApiRequest::get(resource, id, params)?)
    }

    pub(crate) fn post(&self, resource: &str, body: Params, id: &str) -> Result<Value> {
        self.dispatch(ApiRequest::post(resource, body, id)?)
    }

    pub(crate) fn put(&self, resource: &str, body: Params, id: &str) -> Result<Value> {
        self.dispatch(ApiRequest::put(resource, body, id)?)
    }

    pub(crate) fn delete(&self, resource: &str, id: &str) -> Result<Value> {
        self.dispatch(ApiRequest::delete(resource, id)?)
    }
}

/// Turn a raw response into a JSON value or a typed error.
///
/// Empty success bodies decode to [`Value::Null`].
pub fn decode_response(response: HttpResponse) -> Result<Value> {
    if !response.is_success() {
        let err = ApiError::from_status(response.status, &response.body);
        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = response.status,
            kind = err.label(),
            "paymill request rejected"
        );
        return Err(err.into());
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&response.body)?)
}

/// Authenticated handle for the Paymill API.
///
/// # Example
///
/// ```rust,no_run
/// use paymill_lib::{Params, Paymill, PaymillConfig};
///
/// # fn main() -> paymill_lib::Result<()> {
/// let paymill = Paymill::new(PaymillConfig::new("your_private_key"))?;
///
/// let clients = paymill
///     .clients()
///     .list(Some("created_at"), Some(Params::new().with("email", "x@y.com")))?;
/// println!("{clients}");
/// # Ok(())
/// # }
/// ```
pub struct Paymill {
    context: Arc<ApiContext>,
    payments: Payments,
    preauthorizations: Preauthorizations,
    transactions: Transactions,
    clients: Clients,
    refunds: Refunds,
    offers: Offers,
    subscriptions: Subscriptions,
}

impl Paymill {
    /// Create a client using the blocking `reqwest` transport.
    pub fn new(config: PaymillConfig) -> Result<Self> {
        let config = config.validated()?;
        let transport = ReqwestTransport::new(config.timeout_secs)?;
        Ok(Self::build(config, Arc::new(transport)))
    }

    /// Create a client from `PAYMILL_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(PaymillConfig::from_env()?)
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: PaymillConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        Ok(Self::build(config.validated()?, transport))
    }

    fn build(config: PaymillConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let context = Arc::new(ApiContext { config, transport });
        Self {
            payments: Payments::new(context.clone()),
            preauthorizations: Preauthorizations::new(context.clone()),
            transactions: Transactions::new(context.clone()),
            clients: Clients::new(context.clone()),
            refunds: Refunds::new(context.clone()),
            offers: Offers::new(context.clone()),
            subscriptions: Subscriptions::new(context.clone()),
            context,
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &PaymillConfig {
        self.context.config()
    }

    pub fn payments(&self) -> &Payments {
        &self.payments
    }

    pub fn preauthorizations(&self) -> &Preauthorizations {
        &self.preauthorizations
    }

    pub fn transactions(&self) -> &Transactions {
        &self.transactions
    }

    pub fn clients(&self) -> &Clients {
        &self.clients
    }

    pub fn refunds(&self) -> &Refunds {
        &self.refunds
    }

    pub fn offers(&self) -> &Offers {
        &self.offers
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// GET `resource/id/` with optional query parameters.
    ///
    /// Null-valued parameters are left out of the query string.
    pub fn get(&self, resource: &str, id: &str, params: Option<Params>) -> Result<Value> {
        self.context.get(resource, id, params)
    }

    /// POST a form body. Null-valued fields are dropped before sending.
    pub fn post(&self, resource: &str, body: Params, id: &str) -> Result<Value> {
        self.context.post(resource, body, id)
    }

    /// PUT a form body. Null-valued fields are sent as empty values, unlike
    /// [`post`](Self::post), so an update can clear a field.
    pub fn put(&self, resource: &str, body: Params, id: &str) -> Result<Value> {
        self.context.put(resource, body, id)
    }

    /// DELETE `resource/id/`.
    pub fn delete(&self, resource: &str, id: &str) -> Result<Value> {
        self.context.delete(resource, id)
    }
}

impl fmt::Display for Paymill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Paymill: private_key='{}'>", self.config().masked_key())
    }
}

impl fmt::Debug for Paymill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paymill")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}
