//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The till runs in a
//! single currency, so values carry no currency tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary value, stored as whole cents.
///
/// Serializes to and from a plain JSON number (a 2-decimal amount), so the
/// durable record and import/export files read as `{"price": 25.0}` rather
/// than exposing the cents representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money {
    cents: i64,
}

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money { cents: 0 };

    /// Create a Money value from whole cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount, rounded to 2 fractional
    /// digits. Returns `None` for NaN or infinite input.
    ///
    /// ```
    /// use till_core::money::Money;
    /// let price = Money::from_decimal(49.90).unwrap();
    /// assert_eq!(price.cents(), 4990);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        Some(Self::from_cents((amount * 100.0).round() as i64))
    }

    /// Amount in whole cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiply by a scalar (e.g., a line count).
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_cents(self.cents * factor)
    }

    /// Apply a percentage discount, rounding to the nearest cent.
    ///
    /// This is the only place a till total is rounded; line subtotals and
    /// cart sums are exact in cents.
    pub fn with_discount(&self, percent: f64) -> Money {
        let factor = 1.0 - percent / 100.0;
        Money::from_cents((self.cents as f64 * factor).round() as i64)
    }

    /// Format as a 2-decimal amount string (e.g., "49.90").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents - other.cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_amount())
    }
}

impl TryFrom<f64> for Money {
    type Error = String;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::from_decimal(amount).ok_or_else(|| format!("not a finite amount: {amount}"))
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> f64 {
        m.to_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(49.90).unwrap().cents(), 4990);
        assert_eq!(Money::from_decimal(49.999).unwrap().cents(), 5000);
        assert_eq!(Money::from_decimal(0.0).unwrap().cents(), 0);
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert!(Money::from_decimal(f64::NAN).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].iter().map(|&c| Money::from_cents(c)).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_with_discount() {
        let total = Money::from_cents(7500);
        assert_eq!(total.with_discount(10.0).cents(), 6750);
        assert_eq!(total.with_discount(0.0).cents(), 7500);
        assert_eq!(total.with_discount(100.0).cents(), 0);
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(Money::from_cents(6750).display_amount(), "67.50");
        assert_eq!(Money::from_cents(5).display_amount(), "0.05");
    }

    #[test]
    fn test_serde_as_decimal_number() {
        let price = Money::from_decimal(30.0).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "30.0");

        let parsed: Money = serde_json::from_str("25.5").unwrap();
        assert_eq!(parsed.cents(), 2550);

        // Integer literals are valid JSON numbers too.
        let parsed: Money = serde_json::from_str("30").unwrap();
        assert_eq!(parsed.cents(), 3000);
    }
}
