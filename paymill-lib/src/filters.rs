//! Builders for list filter values.
//!
//! Date filters take unix seconds, either a single timestamp or a
//! `<from>-<to>` range; amount filters take `300`, `>300` or `<300`. Each
//! helper returns a one-entry [`Params`] that can be merged with others.
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use paymill_lib::filters;
//!
//! let now = Utc::now();
//! let mut filters = filters::created_between(now - Duration::days(7), now);
//! filters.merge(&filters::amount_greater_than(500));
//! assert_eq!(filters.len(), 2);
//! ```

use chrono::{DateTime, TimeZone};

use crate::params::Params;

fn range<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> String {
    format!("{}-{}", from.timestamp(), to.timestamp())
}

/// `created_at=<from>-<to>`.
pub fn created_between<Tz: TimeZone>(from: DateTime<Tz>, to: DateTime<Tz>) -> Params {
    Params::new().with("created_at", range(&from, &to))
}

/// `updated_at=<from>-<to>`.
pub fn updated_between<Tz: TimeZone>(from: DateTime<Tz>, to: DateTime<Tz>) -> Params {
    Params::new().with("updated_at", range(&from, &to))
}

/// `created_at=<timestamp>`.
pub fn created_at<Tz: TimeZone>(at: DateTime<Tz>) -> Params {
    Params::new().with("created_at", at.timestamp())
}

pub fn amount_exactly(amount: u64) -> Params {
    Params::new().with("amount", amount.to_string())
}

pub fn amount_greater_than(amount: u64) -> Params {
    Params::new().with("amount", format!(">{amount}"))
}

pub fn amount_less_than(amount: u64) -> Params {
    Params::new().with("amount", format!("<{amount}"))
}
