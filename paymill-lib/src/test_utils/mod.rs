//! Test utilities for Paymill.
//!
//! Provides a [`MockTransport`] that records every request the client would
//! send and replays scripted responses, so endpoint behaviour can be checked
//! without a network.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paymill_lib::test_utils::MockTransport;
//! use paymill_lib::{Paymill, PaymillConfig};
//!
//! let transport = Arc::new(MockTransport::new());
//! transport.push_json(200, serde_json::json!({"data": {"id": "client_1"}}));
//!
//! let paymill = Paymill::with_transport(PaymillConfig::new("key"), transport.clone())?;
//! paymill.clients().details("client_1")?;
//! assert_eq!(transport.request_count(), 1);
//! ```

mod mock_transport;

pub use mock_transport::MockTransport;
