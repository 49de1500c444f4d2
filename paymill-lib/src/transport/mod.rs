//! HTTP transport seam.
//!
//! The Transport Core in [`crate::client`] builds [`HttpRequest`](crate::request::HttpRequest)s
//! and interprets [`HttpResponse`]s; moving bytes over the wire is delegated to
//! an [`HttpTransport`]. [`ReqwestTransport`] is the blocking default.

mod http;
mod traits;

pub use http::ReqwestTransport;
pub use traits::{HttpResponse, HttpTransport};
