use crate::request::HttpRequest;
use crate::Result;

/// A raw HTTP response whose body has been read to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Body text (may be empty).
    pub body: String,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait describing blocking execution of a prepared request.
///
/// Implementations must release the underlying connection before returning,
/// on success and on failure alike. Non-success statuses are NOT errors at
/// this layer: they are returned as an [`HttpResponse`] and mapped by the
/// caller. `Err` is reserved for requests that never produced a status.
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return the status and full body.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
