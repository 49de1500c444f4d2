//! Flat request parameters.
//!
//! Query strings and form bodies sent to the API are flat `key=value` lists.
//! [`Params`] only holds scalar [`ParamValue`]s, so nesting is unrepresentable;
//! [`Params::from_json`] is the checked entry point for untyped input.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Number, Value};

use crate::{PaymillError, Result};

/// A single scalar parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Absent value. Dropped by POST and GET, sent as `key=` by PUT.
    Null,
    /// Sent as `true` / `false`.
    Bool(bool),
    /// Sent in decimal.
    Number(Number),
    /// Sent verbatim.
    Text(String),
}

impl ParamValue {
    /// True for [`ParamValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The text value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Wire form of the value.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<&Value> for ParamValue {
    type Error = PaymillError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => Ok(Self::Number(n.clone())),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(PaymillError::invalid_argument(
                "params",
                "values should be scalars, nested arrays and objects are not allowed",
            )),
        }
    }
}

/// What to do with [`ParamValue::Null`] entries when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// Omit the key entirely (GET query, POST body).
    Drop,
    /// Send the key with an empty value (PUT body).
    SendEmpty,
}

/// Ordered flat mapping of parameter names to scalar values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// True if `key` is present (even with a null value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries, nulls included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Copy every entry of `other` into `self`, overwriting existing keys.
    pub fn merge(&mut self, other: &Params) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Build parameters from an untyped JSON value.
    ///
    /// Fails with [`PaymillError::InvalidArgument`] unless `value` is an object
    /// whose values are all scalars or null.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(PaymillError::invalid_argument(
                "params",
                "should be a mapping of keys to values",
            ));
        };
        map.iter()
            .map(|(key, value)| Ok((key.clone(), ParamValue::try_from(value)?)))
            .collect()
    }

    /// Flatten into wire pairs according to `nulls`.
    pub fn to_pairs(&self, nulls: NullPolicy) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, value)| nulls == NullPolicy::SendEmpty || !value.is_null())
            .map(|(key, value)| (key.clone(), value.to_wire()))
            .collect()
    }

    /// URL-encode as `a=1&b=2`.
    pub fn encode(&self, nulls: NullPolicy) -> Result<String> {
        serde_urlencoded::to_string(self.to_pairs(nulls))
            .map_err(|e| PaymillError::Serialization(format!("Failed to encode params: {e}")))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
