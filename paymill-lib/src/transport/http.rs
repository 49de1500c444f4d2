//! Blocking `reqwest` transport.

use std::time::Duration;

use super::traits::{HttpResponse, HttpTransport};
use crate::request::{HttpRequest, Method};
use crate::{PaymillError, Result};

/// Default transport backed by `reqwest::blocking`.
///
/// One client is built per transport and reused; credentials are not cached
/// here since every [`HttpRequest`] carries its own `Authorization` header.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport with a request timeout (`0` disables the timeout).
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        builder = if timeout_secs > 0 {
            builder.timeout(Duration::from_secs(timeout_secs))
        } else {
            builder.timeout(None)
        };
        let client = builder
            .build()
            .map_err(|e| PaymillError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::blocking::Client, timeout_secs: u64) -> Self {
        Self {
            client,
            timeout_secs,
        }
    }

    /// Map reqwest errors to PaymillError.
    fn map_reqwest_error(&self, request: &HttpRequest, e: reqwest::Error) -> PaymillError {
        if e.is_timeout() {
            PaymillError::ConnectionTimeout {
                operation: format!("{} {}", request.method, strip_query(&request.url)),
                timeout_ms: self.timeout_secs * 1000,
            }
        } else if e.is_connect() {
            PaymillError::ConnectionFailed {
                target: strip_query(&request.url).to_string(),
                reason: e.to_string(),
            }
        } else {
            PaymillError::transport(e)
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .map_err(|e| self.map_reqwest_error(request, e))?;

        let status = response.status().as_u16();
        // Reading the body consumes the response and returns the connection.
        let body = response
            .text()
            .map_err(|e| self.map_reqwest_error(request, e))?;

        Ok(HttpResponse { status, body })
    }
}

/// URLs may carry filter values; keep them out of error messages.
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
