//! Prelude module for convenient imports.
//!
//! ```rust
//! use paymill_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Client: `Paymill`, `PaymillConfig`
//! - Error types: `PaymillError`, `ApiError`, `Result`
//! - Request building: `Params`, `ParamValue`, `filters`
//! - Endpoint inputs: `NewPreauthorization`, `NewTransaction`, `NewOffer`, `OfferInterval`
//! - Response codes: `ResponseCode`, `ResponseCategory`

// Client
pub use crate::{Paymill, PaymillConfig};

// Error handling
pub use crate::errors::{ApiError, PaymillError};
pub use crate::Result;

// Request building
pub use crate::filters;
pub use crate::params::{ParamValue, Params};

// Endpoint inputs
pub use crate::endpoints::{NewOffer, NewPreauthorization, NewTransaction, OfferInterval};

// Response codes
pub use crate::response_code::{ResponseCategory, ResponseCode};

// Transport
pub use crate::transport::HttpTransport;
