use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::course::domain::errors::DomainError;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Monetary amount in minor units (cents) with an ISO currency code.
///
/// Always non-negative with an uppercase, non-empty currency. Every
/// operation returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: i64,
    currency: String,
}

#[derive(Deserialize)]
struct RawMoney {
    amount: f64,
    #[serde(default = "default_currency")]
    currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl TryFrom<RawMoney> for Money {
    type Error = DomainError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::new(raw.amount, &raw.currency)
    }
}

impl Money {
    /// Build from an amount in minor units, rounded to the nearest integer
    pub fn new(amount: f64, currency: &str) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidAmount(amount));
        }

        let rounded = amount.round();
        if rounded > i64::MAX as f64 {
            return Err(DomainError::InvalidAmount(amount));
        }

        Ok(Self {
            amount: rounded as i64,
            currency: normalize_currency(currency)?,
        })
    }

    pub fn usd(amount: f64) -> Result<Self, DomainError> {
        Self::new(amount, DEFAULT_CURRENCY)
    }

    pub fn from_cents(cents: i64, currency: &str) -> Result<Self, DomainError> {
        if cents < 0 {
            return Err(DomainError::InvalidAmount(cents as f64));
        }
        Ok(Self {
            amount: cents,
            currency: normalize_currency(currency)?,
        })
    }

    pub fn zero(currency: &str) -> Result<Self, DomainError> {
        Self::from_cents(0, currency)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn add(&self, other: &Money) -> Result<Money, DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency.clone(),
                found: other.currency.clone(),
            });
        }

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(DomainError::InvalidAmount(self.amount as f64 + other.amount as f64))?;

        Ok(Money {
            amount,
            currency: self.currency.clone(),
        })
    }

    pub fn multiply(&self, factor: f64) -> Result<Money, DomainError> {
        if factor.is_nan() || factor < 0.0 {
            return Err(DomainError::InvalidFactor(factor));
        }
        Money::new(self.amount as f64 * factor, &self.currency)
    }

    /// Display form with two fixed decimals, e.g. `$49.99` or `49.99 CHF`
    pub fn format(&self) -> String {
        let major = self.amount / 100;
        let minor = self.amount % 100;
        match currency_symbol(&self.currency) {
            Some(symbol) => format!("{}{}.{:02}", symbol, major, minor),
            None => format!("{}.{:02} {}", major, minor, self.currency),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

fn normalize_currency(currency: &str) -> Result<String, DomainError> {
    let trimmed = currency.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidCurrency);
    }
    Ok(trimmed.to_uppercase())
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}
