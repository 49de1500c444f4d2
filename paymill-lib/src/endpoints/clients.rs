//! Clients endpoint.

use std::sync::Arc;

use serde_json::Value;

use super::Resource;
use crate::client::ApiContext;
use crate::params::Params;
use crate::Result;

const RESOURCE: Resource = Resource::Clients;

/// Façade for `/clients`.
#[derive(Clone)]
pub struct Clients {
    context: Arc<ApiContext>,
}

impl Clients {
    pub(crate) fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }

    /// Create a client identified by `email`.
    pub fn create(&self, email: &str, description: Option<&str>) -> Result<Value> {
        let email = super::require("email", email)?;

        let body = Params::new()
            .with("email", email)
            .with("description", description);
        self.context.post(RESOURCE.as_str(), body, "")
    }

    /// Fetch one client.
    pub fn details(&self, id: &str) -> Result<Value> {
        super::details(&self.context, RESOURCE, id)
    }

    /// Replace a client's email and description.
    ///
    /// A `None` description is sent as an empty value, which clears it.
    pub fn update(&self, id: &str, email: &str, description: Option<&str>) -> Result<Value> {
        let id = super::require("id", id)?;
        let email = super::require("email", email)?;

        let body = Params::new()
            .with("email", email)
            .with("description", description);
        self.context.put(RESOURCE.as_str(), body, id)
    }

    /// Delete one client.
    pub fn remove(&self, id: &str) -> Result<Value> {
        super::remove(&self.context, RESOURCE, id)
    }

    /// List clients.
    ///
    /// `order`: `count`, `offset`, `creditcard`, `email` or `created_at`.
    ///
    /// Filters: `payment=<payment id>`, `subscription=<subscription id>`,
    /// `offer=<offer id>`, `description=<text>`, `email=<email>`,
    /// `created_at` and `updated_at` as `<timestamp> | <from>-<to>`.
    pub fn list(&self, order: Option<&str>, filters: Option<Params>) -> Result<Value> {
        super::list(&self.context, RESOURCE, order, filters)
    }
}
