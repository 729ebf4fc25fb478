use crate::utils::error::{OrderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MINOR_PER_MAJOR: u64 = 100;

/// Largest minor-unit amount an `f64` holds exactly (2^53).
const MAX_EXACT_FLOAT_MINOR: f64 = 9_007_199_254_740_992.0;

/// A non-negative amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "AmountRepr", into = "String")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }

    /// Formats with a currency symbol, e.g. `$20.97`.
    pub fn display_with(self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }

    /// Sums amounts, failing instead of wrapping on overflow.
    pub fn try_sum<I>(amounts: I) -> Result<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
            .ok_or_else(|| OrderError::AmountOverflow {
                context: "sum of amounts".to_string(),
            })
    }

    fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(OrderError::InvalidPrice {
                value: value.to_string(),
                reason: "must be a finite, non-negative number".to_string(),
            });
        }
        let scaled = value * MINOR_PER_MAJOR as f64;
        if scaled > MAX_EXACT_FLOAT_MINOR {
            return Err(OrderError::InvalidPrice {
                value: value.to_string(),
                reason: "too large to be written as a number; quote it as a string".to_string(),
            });
        }
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 || rounded >= u64::MAX as f64 {
            return Err(OrderError::InvalidPrice {
                value: value.to_string(),
                reason: "must have at most two decimal places".to_string(),
            });
        }
        Ok(Money(rounded as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR)
    }
}

impl FromStr for Money {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| OrderError::InvalidPrice {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("price cannot be empty"));
        }
        if trimmed.starts_with('-') {
            return Err(invalid("price cannot be negative"));
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected at most two decimal digits"));
        }

        let major: u64 = whole.parse().map_err(|_| invalid("amount is too large"))?;
        let minor: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("bad fraction"))?,
        };

        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

/// Prices in menu files may be written as `"4.99"` or `4.99`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Integer(u64),
    Float(f64),
}

impl TryFrom<AmountRepr> for Money {
    type Error = OrderError;

    fn try_from(repr: AmountRepr) -> Result<Self> {
        match repr {
            AmountRepr::Text(text) => text.parse(),
            AmountRepr::Integer(major) => major
                .checked_mul(MINOR_PER_MAJOR)
                .map(Money)
                .ok_or_else(|| OrderError::InvalidPrice {
                    value: major.to_string(),
                    reason: "amount is too large".to_string(),
                }),
            AmountRepr::Float(value) => Money::from_f64(value),
        }
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}
