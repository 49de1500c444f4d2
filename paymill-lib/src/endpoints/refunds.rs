//! Refunds endpoint.

use std::sync::Arc;

use serde_json::Value;

use super::Resource;
use crate::client::ApiContext;
use crate::params::Params;
use crate::Result;

const RESOURCE: Resource = Resource::Refunds;

/// Façade for `/refunds`.
///
/// Refunds are created against a transaction with
/// [`refund_transaction`](Self::refund_transaction) rather than `create`.
#[derive(Clone)]
pub struct Refunds {
    context: Arc<ApiContext>,
}

impl Refunds {
    pub(crate) fn new(context: Arc<ApiContext>) -> Self {
        Self { context }
    }

    /// Refund `amount` cents of the transaction `transaction_id`.
    ///
    /// Posts to `refunds/<transaction_id>/`.
    pub fn refund_transaction(
        &self,
        transaction_id: &str,
        amount: u64,
        description: Option<&str>,
    ) -> Result<Value> {
        let id = super::require("id", transaction_id)?;

        let body = Params::new()
            .with("amount", amount)
            .with("description", description);
        self.context.post(RESOURCE.as_str(), body, id)
    }

    /// Fetch one refund.
    pub fn details(&self, id: &str) -> Result<Value> {
        super::details(&self.context, RESOURCE, id)
    }

    /// List refunds.
    ///
    /// `order`: `count`, `offset`, `transaction`, `client`, `amount` or
    /// `created_at`.
    ///
    /// Filters: `client=<client id>`, `transaction=<transaction id>`,
    /// `amount=300 | >300 | <300`, `created_at=<timestamp> | <from>-<to>`.
    pub fn list(&self, order: Option<&str>, filters: Option<Params>) -> Result<Value> {
        super::list(&self.context, RESOURCE, order, filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use crate::test_utils::MockTransport;
    use crate::{Paymill, PaymillConfig};

    fn client() -> (Paymill, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new());
        let paymill =
            Paymill::with_transport(PaymillConfig::new("test_key"), transport.clone()).unwrap();
        (paymill, transport)
    }

    #[test]
    fn test_refund_posts_to_transaction_path() {
        let (paymill, transport) = client();
        paymill
            .refunds()
            .refund_transaction("tran_1", 500, Some("damaged"))
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://api.paymill.de/v2/refunds/tran_1/");
        assert_eq!(request.body.as_deref(), Some("amount=500&description=damaged"));
    }

    #[test]
    fn test_refund_without_description() {
        let (paymill, transport) = client();
        paymill.refunds().refund_transaction("tran_1", 500, None).unwrap();
        assert_eq!(
            transport.last_request().unwrap().body.as_deref(),
            Some("amount=500")
        );
    }

    #[test]
    fn test_refund_requires_transaction() {
        let (paymill, transport) = client();
        assert!(paymill.refunds().refund_transaction("", 500, None).is_err());
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_list_by_amount() {
        let (paymill, transport) = client();
        paymill
            .refunds()
            .list(Some("amount"), Some(Params::new().with("transaction", "tran_1")))
            .unwrap();
        assert_eq!(
            transport.last_request().unwrap().query(),
            Some("order=amount&transaction=tran_1")
        );
    }
}
