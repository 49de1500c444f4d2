//! Request descriptors.
//!
//! An [`ApiRequest`] names what to call (verb, resource, id, params). It is
//! lowered into a wire-ready [`HttpRequest`] against a configuration right
//! before it is handed to the transport, so credentials are computed per call.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;

use crate::config::PaymillConfig;
use crate::params::{NullPolicy, Params};
use crate::{PaymillError, Result};

/// Content type of POST and PUT bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// How null values are treated when encoding parameters for this verb.
    pub fn null_policy(&self) -> NullPolicy {
        match self {
            Self::Put => NullPolicy::SendEmpty,
            Self::Get | Self::Post | Self::Delete => NullPolicy::Drop,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to call: verb, resource path segment, optional id and parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub resource: String,
    pub id: String,
    /// Query parameters (GET only).
    pub query: Option<Params>,
    /// Form body (POST/PUT only).
    pub body: Option<Params>,
}

impl ApiRequest {
    fn new(method: Method, resource: &str, id: &str) -> Result<Self> {
        let resource = resource.trim();
        if resource.is_empty() {
            return Err(PaymillError::invalid_argument(
                "resource",
                "should be a non-empty path segment",
            ));
        }
        check_segment("resource", resource)?;
        if !id.is_empty() {
            check_segment("id", id)?;
        }
        Ok(Self {
            method,
            resource: resource.to_string(),
            id: id.to_string(),
            query: None,
            body: None,
        })
    }

    /// GET `resource/id/` with optional query parameters.
    pub fn get(resource: &str, id: &str, params: Option<Params>) -> Result<Self> {
        let mut request = Self::new(Method::Get, resource, id)?;
        request.query = params;
        Ok(request)
    }

    /// POST a form body to `resource/id/`.
    pub fn post(resource: &str, body: Params, id: &str) -> Result<Self> {
        let mut request = Self::new(Method::Post, resource, id)?;
        request.body = Some(body);
        Ok(request)
    }

    /// PUT a form body to `resource/id/`.
    pub fn put(resource: &str, body: Params, id: &str) -> Result<Self> {
        let mut request = Self::new(Method::Put, resource, id)?;
        request.body = Some(body);
        Ok(request)
    }

    /// DELETE `resource/id/`.
    pub fn delete(resource: &str, id: &str) -> Result<Self> {
        Self::new(Method::Delete, resource, id)
    }

    /// `resource/id/`, with an empty id segment when there is none.
    pub fn path(&self) -> String {
        format!("{}/{}/", self.resource, self.id)
    }

    /// Lower into a wire request for `config`.
    ///
    /// `config.api_url` must already end in `/`.
    pub fn to_http(&self, config: &PaymillConfig) -> Result<HttpRequest> {
        let query = match &self.query {
            Some(params) => params.encode(NullPolicy::Drop)?,
            None => String::new(),
        };

        let mut url = format!("{}{}", config.api_url, self.path());
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        let mut headers: Vec<(String, String)> = config
            .headers
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.push(("Authorization".to_string(), basic_auth(&config.private_key)));

        let body = match &self.body {
            Some(params) => {
                headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
                Some(params.encode(self.method.null_policy())?)
            }
            None => None,
        };

        Ok(HttpRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

/// Reject values that would leave their own path segment once joined into
/// the URL: separators, query or fragment markers, escapes and dot segments.
fn check_segment(field: &str, value: &str) -> Result<()> {
    if value == "." || value == ".." {
        return Err(PaymillError::invalid_argument(
            field,
            "should not be a dot segment",
        ));
    }
    let forbidden = |c: &char| {
        matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
    };
    if let Some(c) = value.chars().find(forbidden) {
        return Err(PaymillError::invalid_argument(
            field,
            format!("should not contain {c:?}"),
        ));
    }
    Ok(())
}

/// `Basic` credential for `private_key` with an empty password.
pub fn basic_auth(private_key: &str) -> String {
    let encoded = BASE64_ENGINE.encode(format!("{private_key}:"));
    format!("Basic {encoded}")
}

/// A fully built request, ready for a [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Form-encoded body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Query string without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }

    /// Decoded query pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query()
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default()
    }

    /// Decoded body pairs.
    pub fn body_pairs(&self) -> Vec<(String, String)> {
        self.body
            .as_deref()
            .and_then(|b| serde_urlencoded::from_str(b).ok())
            .unwrap_or_default()
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(String::len))
            .finish()
    }
}
