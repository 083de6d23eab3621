//! Price type for representing monetary values.
//!
//! Prices are exact decimals in a currency-agnostic unit. Arithmetic never
//! rounds; rounding happens only when a value is prepared for checkout or
//! display against a concrete [`Currency`].

use crate::CommerceError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Currencies the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An exact, currency-agnostic monetary amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero.
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Wrap a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in hundredths (e.g. cents).
    ///
    /// ```
    /// use shopverse_commerce::money::Price;
    /// assert_eq!(Price::from_cents(4999).to_string(), "49.99");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a quantity. Saturates instead of overflowing.
    pub fn times(&self, quantity: i64) -> Price {
        Price(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Calculate a percentage of this amount, unrounded.
    pub fn percentage(&self, percent: Decimal) -> Price {
        Price(self.0.saturating_mul(percent) / Decimal::ONE_HUNDRED)
    }

    /// Scale by a rate (e.g. `0.08` for 8% tax), unrounded.
    pub fn scale(&self, rate: Decimal) -> Price {
        Price(self.0.saturating_mul(rate))
    }

    /// Round to the currency's minor unit, midpoints away from zero.
    pub fn round_for(&self, currency: Currency) -> Price {
        Price(self.0.round_dp_with_strategy(
            currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), self.display_amount(currency))
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self, currency: Currency) -> String {
        let places = currency.decimal_places() as usize;
        format!("{:.places$}", self.round_for(currency).0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Price {
    type Err = CommerceError;

    /// Parse a non-negative decimal such as `"19.99"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| CommerceError::InvalidPrice(s.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CommerceError::InvalidPrice(s.to_string()));
        }
        Ok(Self(amount))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, other: Price) -> Price {
        Price(self.0.saturating_sub(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
