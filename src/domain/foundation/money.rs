//! Money value object.
//!
//! Amounts are stored as integer cents to avoid floating-point drift.
//! The HTTP boundary renders them as two-decimal strings ("49.99").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A non-negative monetary amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates an amount from integer cents, rejecting negative values.
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        if cents < 0 {
            return Err(ValidationError::invalid_format(
                "amount",
                "amount cannot be negative",
            ));
        }
        Ok(Self(cents))
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Parses a decimal string such as "49.99" or "120".
    ///
    /// At most two fractional digits are accepted.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::empty_field("amount"));
        }
        if s.starts_with('-') {
            return Err(ValidationError::invalid_format(
                "amount",
                "amount cannot be negative",
            ));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if frac.len() > 2 {
            return Err(ValidationError::invalid_format(
                "amount",
                "expected at most two decimal places",
            ));
        }
        if whole.is_empty()
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ValidationError::invalid_format(
                "amount",
                "not a valid decimal number",
            ));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| ValidationError::invalid_format("amount", "not a valid decimal number"))?;

        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => {
                frac.parse::<i64>()
                    .map_err(|_| ValidationError::invalid_format("amount", "not a valid decimal number"))?
                    * 10
            }
            _ => frac
                .parse::<i64>()
                .map_err(|_| ValidationError::invalid_format("amount", "not a valid decimal number"))?,
        };

        Self::from_cents(whole * 100 + frac_cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
