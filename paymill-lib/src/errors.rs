//! Error types for Paymill operations.
//!
//! Two families surface to callers:
//!
//! - **Input validation** ([`PaymillError::InvalidArgument`]): raised before any
//!   request leaves the process.
//! - **API errors** ([`PaymillError::Api`]): the server answered with a non-success
//!   status, translated into an [`ApiError`] kind.
//!
//! Transport, serialization and configuration failures complete the picture.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Context attached to every [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// HTTP status actually received.
    pub status: u16,
    /// Extra parameters extracted from the error body (may be empty).
    pub params: BTreeMap<String, String>,
}

impl ErrorContext {
    /// Create a context for `status` with no parameters.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            params: BTreeMap::new(),
        }
    }

    /// Build a context from a status and the raw response body.
    ///
    /// Top-level fields of a JSON object body become parameters: scalars are
    /// stringified, nested values are kept as compact JSON. Non-JSON bodies are
    /// stored under `body` when non-empty.
    pub fn from_body(status: u16, body: &str) -> Self {
        let mut context = Self::new(status);
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::Object(map)) => {
                for (key, value) in map {
                    let rendered = match value {
                        serde_json::Value::String(s) => s,
                        serde_json::Value::Null => String::new(),
                        other => other.to_string(),
                    };
                    context.params.insert(key, rendered);
                }
            }
            _ => {
                let trimmed = body.trim();
                if !trimmed.is_empty() {
                    context.params.insert("body".to_string(), trimmed.to_string());
                }
            }
        }
        context
    }
}

/// Typed API error, one case per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401: the private key is missing or wrong.
    Unauthorized(ErrorContext),
    /// 403 or 412: a required parameter is missing or the operation was refused.
    PreconditionFailed(ErrorContext),
    /// 404: no entity with this identifier.
    NotFound(ErrorContext),
    /// 5xx: the provider failed.
    ServerError(ErrorContext),
    /// Any other non-success status.
    Unexpected(ErrorContext),
}

impl ApiError {
    /// Translate a non-success HTTP status into an error kind.
    pub fn from_status(status: u16, body: &str) -> Self {
        let context = ErrorContext::from_body(status, body);
        match status {
            401 => Self::Unauthorized(context),
            403 | 412 => Self::PreconditionFailed(context),
            404 => Self::NotFound(context),
            s if s >= 500 => Self::ServerError(context),
            _ => Self::Unexpected(context),
        }
    }

    /// Machine code of this kind.
    pub fn code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::PreconditionFailed(_) => 412,
            Self::NotFound(_) => 404,
            Self::ServerError(_) => 500,
            Self::Unexpected(ctx) => ctx.status,
        }
    }

    /// Short label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "Unauthorized",
            Self::PreconditionFailed(_) => "Precondition Failed",
            Self::NotFound(_) => "Not Found",
            Self::ServerError(_) => "Server Error",
            Self::Unexpected(_) => "Unexpected Response",
        }
    }

    /// Human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "Jim, You have to provide your private API Key.",
            Self::PreconditionFailed(_) => {
                "I guess you're missing at least one required parameter?"
            }
            Self::NotFound(_) => {
                "There is no entity with this identifier, did you use the right one?"
            }
            Self::ServerError(_) => "Doh, we did something wrong :/",
            Self::Unexpected(_) => "The API answered with a status this client does not map.",
        }
    }

    /// Status and parameters attached to the error.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Unauthorized(ctx)
            | Self::PreconditionFailed(ctx)
            | Self::NotFound(ctx)
            | Self::ServerError(ctx)
            | Self::Unexpected(ctx) => ctx,
        }
    }

    /// HTTP status actually received.
    pub fn status(&self) -> u16 {
        self.context().status
    }

    /// Context parameters taken from the error body.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.context().params
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.code(), self.label(), self.description())?;
        if !self.params().is_empty() {
            write!(f, " {:?}", self.params())?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Comprehensive error type for Paymill operations.
#[derive(Debug, Error)]
pub enum PaymillError {
    /// Caller supplied a missing, mistyped or conflicting value. No request was sent.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        /// Field or parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Server answered with a non-success status.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Transport/network layer error.
    #[error("transport error: {0}")]
    Transport(String),

    /// Connection failed.
    #[error("connection to {target} failed: {reason}")]
    ConnectionFailed {
        /// Target endpoint or service
        target: String,
        /// Underlying error message
        reason: String,
    },

    /// Connection timeout.
    #[error("{operation} timed out after {timeout_ms}ms")]
    ConnectionTimeout {
        /// Operation that timed out
        operation: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Success body could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Client could not be configured.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PaymillError {
    /// Create an invalid argument error.
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error from any error type.
    pub fn transport<E: std::error::Error>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    /// The API error, if the server produced one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// True when the request itself has to be fixed before trying again.
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } | Self::Config(_) => true,
            Self::Api(err) => matches!(
                err,
                ApiError::Unauthorized(_) | ApiError::PreconditionFailed(_) | ApiError::NotFound(_)
            ),
            _ => false,
        }
    }

    /// True when the provider or the network failed; retrying later may help.
    pub fn is_provider_error(&self) -> bool {
        match self {
            Self::Api(ApiError::ServerError(_)) => true,
            Self::Transport(_) | Self::ConnectionFailed { .. } | Self::ConnectionTimeout { .. } => {
                true
            }
            _ => false,
        }
    }
}

impl From<serde_json::Error> for PaymillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("Failed to parse Paymill response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from_status(403, ""),
            ApiError::PreconditionFailed(_)
        ));
        assert!(matches!(
            ApiError::from_status(412, ""),
            ApiError::PreconditionFailed(_)
        ));
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound(_)));
        assert!(matches!(
            ApiError::from_status(503, ""),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(409, ""),
            ApiError::Unexpected(_)
        ));
    }

    #[test]
    fn test_codes_and_descriptions() {
        let err = ApiError::from_status(404, "");
        assert_eq!(err.code(), 404);
        assert_eq!(err.label(), "Not Found");
        assert!(err.description().contains("no entity with this identifier"));

        let err = ApiError::from_status(502, "");
        assert_eq!(err.code(), 500);
        assert_eq!(err.status(), 502);
        assert_eq!(err.description(), "Doh, we did something wrong :/");

        let err = ApiError::from_status(403, "");
        assert_eq!(err.code(), 412);
        assert_eq!(err.status(), 403);

        let err = ApiError::from_status(418, "");
        assert_eq!(err.code(), 418);
    }

    #[test]
    fn test_context_from_json_body() {
        let err = ApiError::from_status(
            412,
            r#"{"error":{"field":"amount"},"exception":"field_invalid_amount","retry":false}"#,
        );
        let params = err.params();
        assert_eq!(params.get("exception").map(String::as_str), Some("field_invalid_amount"));
        assert_eq!(params.get("error").map(String::as_str), Some(r#"{"field":"amount"}"#));
        assert_eq!(params.get("retry").map(String::as_str), Some("false"));
    }

    #[test]
    fn test_context_from_text_body() {
        let err = ApiError::from_status(500, "  upstream exploded \n");
        assert_eq!(err.params().get("body").map(String::as_str), Some("upstream exploded"));

        let err = ApiError::from_status(500, "");
        assert!(err.params().is_empty());
    }

    #[test]
    fn test_display() {
        let err = PaymillError::from(ApiError::from_status(401, ""));
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Unauthorized"));

        let err = PaymillError::invalid_argument("amount", "should not be empty");
        assert_eq!(err.to_string(), "invalid amount: should not be empty");
    }

    #[test]
    fn test_classification() {
        let err = PaymillError::invalid_argument("id", "empty");
        assert!(err.is_caller_error());
        assert!(!err.is_provider_error());

        let err = PaymillError::from(ApiError::from_status(500, ""));
        assert!(err.is_provider_error());
        assert!(!err.is_caller_error());

        let err = PaymillError::from(ApiError::from_status(404, ""));
        assert!(err.is_caller_error());
        assert!(err.api_error().is_some());

        let err = PaymillError::ConnectionTimeout {
            operation: "GET clients".to_string(),
            timeout_ms: 30_000,
        };
        assert!(err.is_provider_error());
    }

    #[test]
    fn test_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = PaymillError::from(json_err);
        assert!(matches!(
            err,
            PaymillError::Serialization(ref msg) if msg.starts_with("Failed to parse Paymill response")
        ));

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = PaymillError::transport(io);
        assert_eq!(err.to_string(), "transport error: pipe closed");
        assert!(err.is_provider_error());
    }
}
