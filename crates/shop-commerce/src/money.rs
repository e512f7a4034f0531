//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit. The backend sends
//! prices as decimal strings ("19.99"); `Money::parse` converts them with
//! integer arithmetic only, so no amount ever passes through binary
//! floating point.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the storefront sells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    PKR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::PKR => "PKR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::PKR => "Rs",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "PKR" => Some(Currency::PKR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents
/// for USD). All arithmetic is checked; currency mismatch and overflow
/// both surface as `None` from the `try_` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from minor units.
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Parse a decimal price string as sent by the backend.
    ///
    /// ```
    /// use shop_commerce::money::{Currency, Money};
    /// let price = Money::parse("19.99", Currency::USD).unwrap();
    /// assert_eq!(price.minor, 1999);
    /// ```
    ///
    /// Rejects empty input, non-digit characters, and fraction digits
    /// beyond the currency's minor unit.
    pub fn parse(s: &str, currency: Currency) -> Result<Self, CommerceError> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (unsigned, ""),
        };

        let places = currency.decimal_places() as usize;
        if whole.is_empty() && fraction.is_empty() {
            return Err(CommerceError::InvalidPrice(s.to_string()));
        }
        if fraction.len() > places {
            return Err(CommerceError::InvalidPrice(s.to_string()));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CommerceError::InvalidPrice(s.to_string()));
        }

        let mut minor: i64 = 0;
        for digit in whole.bytes().map(|b| (b - b'0') as i64) {
            minor = minor
                .checked_mul(10)
                .and_then(|m| m.checked_add(digit))
                .ok_or_else(|| CommerceError::InvalidPrice(s.to_string()))?;
        }
        for position in 0..places {
            let digit = fraction
                .as_bytes()
                .get(position)
                .map(|b| (b - b'0') as i64)
                .unwrap_or(0);
            minor = minor
                .checked_mul(10)
                .and_then(|m| m.checked_add(digit))
                .ok_or_else(|| CommerceError::InvalidPrice(s.to_string()))?;
        }

        if negative {
            minor = -minor;
        }
        Ok(Self::from_minor(minor, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.minor < 0
    }

    /// Add another Money value; `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.minor
            .checked_add(other.minor)
            .map(|m| Money::from_minor(m, self.currency))
    }

    /// Subtract another Money value; `None` on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.minor
            .checked_sub(other.minor)
            .map(|m| Money::from_minor(m, self.currency))
    }

    /// Multiply by a scalar quantity; `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.minor
            .checked_mul(factor)
            .map(|m| Money::from_minor(m, self.currency))
    }

    /// Sum an iterator of Money values; `None` on mismatch or overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut acc = Money::zero(currency);
        for m in iter {
            acc = acc.try_add(m)?;
        }
        Some(acc)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            return format!("{}", self.minor);
        }
        let divisor = 10_i64.pow(places);
        let sign = if self.minor < 0 { "-" } else { "" };
        let magnitude = self.minor.unsigned_abs();
        let whole = magnitude / divisor as u64;
        let fraction = magnitude % divisor as u64;
        format!(
            "{}{}.{:0width$}",
            sign,
            whole,
            fraction,
            width = places as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(4999, Currency::USD);
        assert_eq!(m.minor, 4999);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_parse_decimal_string() {
        let m = Money::parse("49.99", Currency::USD).unwrap();
        assert_eq!(m.minor, 4999);

        let m = Money::parse("250", Currency::USD).unwrap();
        assert_eq!(m.minor, 25000);

        let m = Money::parse("0.5", Currency::USD).unwrap();
        assert_eq!(m.minor, 50);

        let m = Money::parse(".5", Currency::USD).unwrap();
        assert_eq!(m.minor, 50);

        let m = Money::parse("-3.50", Currency::USD).unwrap();
        assert_eq!(m.minor, -350);

        let m = Money::parse("100", Currency::JPY).unwrap();
        assert_eq!(m.minor, 100);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Money::parse("", Currency::USD).is_err());
        assert!(Money::parse("abc", Currency::USD).is_err());
        assert!(Money::parse("1.2.3", Currency::USD).is_err());
        assert!(Money::parse("19.999", Currency::USD).is_err());
        assert!(Money::parse("1.5", Currency::JPY).is_err());
        assert!(Money::parse("-", Currency::USD).is_err());
    }

    #[test]
    fn test_money_display() {
        let m = Money::from_minor(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
        assert_eq!(m.display_amount(), "49.99");

        let m = Money::from_minor(905, Currency::USD);
        assert_eq!(m.display_amount(), "9.05");

        let m = Money::from_minor(-350, Currency::USD);
        assert_eq!(m.display_amount(), "-3.50");

        let m = Money::from_minor(100, Currency::JPY);
        assert_eq!(m.display(), "\u{00a5}100");
    }

    #[test]
    fn test_try_add() {
        let a = Money::from_minor(1000, Currency::USD);
        let b = Money::from_minor(500, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap().minor, 1500);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let usd = Money::from_minor(1000, Currency::USD);
        let eur = Money::from_minor(1000, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::from_minor(i64::MAX, Currency::USD);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_try_sum() {
        let values = [
            Money::from_minor(1000, Currency::USD),
            Money::from_minor(250, Currency::USD),
        ];
        let sum = Money::try_sum(values.iter(), Currency::USD).unwrap();
        assert_eq!(sum.minor, 1250);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("pkr"), Some(Currency::PKR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
