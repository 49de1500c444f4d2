//! Five-digit `response_code` values reported on transactional resources.
//!
//! A transaction can be created successfully (HTTP 200) and still be
//! declined; the outcome lives in its `response_code`.
//!
//! ```rust
//! use paymill_lib::response_code::{ResponseCategory, ResponseCode};
//! use serde_json::json;
//!
//! let body = json!({"data": {"id": "tran_1", "response_code": 50102}});
//! let code = ResponseCode::from_response(&body).unwrap();
//! assert_eq!(code.category(), ResponseCategory::Declined);
//! assert_eq!(code.message(), "Card declined by authorization system.");
//! ```

use std::fmt;

use serde_json::Value;

use crate::{PaymillError, Result};

const TABLE: &[(u32, &str)] = &[
    (10001, "General undefined response."),
    (10002, "Still waiting on something."),
    (20000, "General success response."),
    (40000, "General problem with data."),
    (40001, "General problem with payment data."),
    (40100, "Problem with credit card data."),
    (40101, "Problem with cvv."),
    (40102, "Card expired or not yet valid."),
    (40103, "Limit exceeded."),
    (40104, "Card invalid."),
    (40105, "Expiry date not valid."),
    (40106, "Credit card brand required."),
    (40200, "Problem with bank account data."),
    (40201, "Bank account data combination mismatch."),
    (40202, "User authentication failed."),
    (40300, "Problem with 3d secure data."),
    (40301, "Currency / amount mismatch."),
    (40400, "Problem with input data."),
    (40401, "Amount too low or zero."),
    (40402, "Usage field too long."),
    (40403, "Currency not allowed."),
    (50000, "General problem with backend."),
    (50001, "Country blacklisted."),
    (50100, "Technical error with credit card."),
    (50101, "Error limit exceeded."),
    (50102, "Card declined by authorization system."),
    (50103, "Manipulation or stolen card."),
    (50104, "Card restricted."),
    (50105, "Invalid card configuration data."),
    (50200, "Technical error with bank account."),
    (50201, "Card blacklisted."),
    (50300, "Technical error with 3D secure."),
    (50400, "Decline because of risk issues."),
    (50500, "General timeout."),
    (50501, "Timeout on side of the acquirer."),
    (50502, "Risk management transaction timeout."),
    (50600, "Duplicate transaction."),
];

/// Coarse outcome, taken from the leading digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCategory {
    /// `1xxxx`: undefined or still in progress.
    Pending,
    /// `2xxxx`
    Success,
    /// `4xxxx`: the submitted data was rejected.
    InvalidData,
    /// `5xxxx`: declined by the backend, acquirer or risk checks.
    Declined,
}

/// A known response code and its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseCode {
    code: u32,
    message: &'static str,
}

impl ResponseCode {
    /// Every known code, ascending.
    pub fn all() -> impl Iterator<Item = ResponseCode> {
        TABLE
            .iter()
            .map(|&(code, message)| ResponseCode { code, message })
    }

    /// Look up a code; `None` if it is not in the table.
    pub fn lookup(code: u32) -> Option<ResponseCode> {
        TABLE
            .binary_search_by_key(&code, |&(c, _)| c)
            .ok()
            .map(|i| ResponseCode {
                code,
                message: TABLE[i].1,
            })
    }

    /// Extract `response_code` from a decoded response.
    ///
    /// Looks at the top level first, then under `data`. Both numeric and
    /// string-encoded codes are accepted.
    pub fn from_response(value: &Value) -> Option<ResponseCode> {
        let raw = value
            .get("response_code")
            .or_else(|| value.get("data").and_then(|data| data.get("response_code")))?;

        let code = match raw {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }?;
        Self::lookup(u32::try_from(code).ok()?)
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn category(&self) -> ResponseCategory {
        match self.code / 10000 {
            1 => ResponseCategory::Pending,
            2 => ResponseCategory::Success,
            4 => ResponseCategory::InvalidData,
            _ => ResponseCategory::Declined,
        }
    }

    pub fn is_success(&self) -> bool {
        self.category() == ResponseCategory::Success
    }
}

impl TryFrom<u32> for ResponseCode {
    type Error = PaymillError;

    fn try_from(code: u32) -> Result<Self> {
        Self::lookup(code).ok_or_else(|| {
            PaymillError::invalid_argument("response_code", format!("unknown code {code}"))
        })
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.message)
    }
}
