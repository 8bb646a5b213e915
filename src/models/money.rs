//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing. On disk an amount is a plain decimal JSON number (`30.5`), which is
//! rounded to the nearest cent when loaded.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units, saturating at the i64 bounds
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create a Money amount from a decimal value, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values too large to hold in cents.
    pub fn try_from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        let in_range = cents >= i64::MIN as f64 && cents < i64::MAX as f64;
        (cents.is_finite() && in_range).then(|| Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal value
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5", "1e2".
    /// Digits past the cents are rounded half away from zero, the same way
    /// amounts read from the data file are.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        if rest.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let magnitude = if rest.contains(['e', 'E']) {
            let value: f64 = rest.parse().map_err(|_| invalid())?;
            Self::try_from_decimal(value).ok_or_else(invalid)?.0
        } else {
            parse_cents(rest).ok_or_else(invalid)?
        };

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }
}

/// Unsigned `units[.fraction]` to cents, rounding past the second decimal
fn parse_cents(s: &str) -> Option<i64> {
    let (units, fraction) = s.split_once('.').unwrap_or((s, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (units.is_empty() && fraction.is_empty()) || !is_digits(units) || !is_digits(fraction) {
        return None;
    }

    let whole: i64 = if units.is_empty() { 0 } else { units.parse().ok()? };

    let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    whole
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths + i64::from(round_up))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::try_from_decimal(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        Self(iter.map(|m| m.0).sum())
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-5).format_with_symbol("€"), "-€0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("-0.50").unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("inf").is_err());
    }

    #[test]
    fn test_parse_rejects_doubled_sign() {
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-+5").is_err());
        assert!(Money::parse("+-5").is_err());
        assert!(Money::parse("++1e2").is_err());
        assert!(Money::parse("-$-5").is_err());
        assert_eq!(Money::parse("+5").unwrap().cents(), 500);
    }

    #[test]
    fn test_parse_rounds_like_stored_amounts() {
        let parsed = Money::parse("3.999").unwrap();
        let loaded: Money = serde_json::from_str("3.999").unwrap();
        assert_eq!(parsed, loaded);
        assert_eq!(parsed.cents(), 400);

        assert_eq!(Money::parse("2.344").unwrap().cents(), 234);
        assert_eq!(Money::parse("2.345").unwrap().cents(), 235);
        assert_eq!(Money::parse("-2.345").unwrap().cents(), -235);
        assert_eq!(Money::parse("0.009").unwrap().cents(), 1);
    }

    #[test]
    fn test_parse_exponent_form() {
        assert_eq!(Money::parse("1e2").unwrap().cents(), 10_000);
        assert_eq!(Money::parse("-2.5E1").unwrap().cents(), -2_500);
        assert_eq!(Money::parse("1e-2").unwrap().cents(), 1);
        assert!(Money::parse("1e400").is_err());
    }

    #[test]
    fn test_parse_out_of_range_is_error() {
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("-99999999999999999").is_err());
        assert!(Money::parse("99999999999999999999999").is_err());
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().cents(),
            i64::MAX
        );
        assert!(Money::parse("92233720368547758.075").is_err());
    }

    #[test]
    fn test_decimal_conversion_bounds() {
        assert_eq!(Money::try_from_decimal(3.999), Some(Money::from_cents(400)));
        assert!(Money::try_from_decimal(f64::NAN).is_none());
        assert!(Money::try_from_decimal(f64::INFINITY).is_none());
        assert!(Money::try_from_decimal(1e18).is_none());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert_eq!(Money::from_units(i64::MAX), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let m = Money::from_cents(1050);
        assert_eq!(serde_json::to_string(&m).unwrap(), "10.5");

        let whole: Money = serde_json::from_str("30").unwrap();
        assert_eq!(whole.cents(), 3000);

        // Float noise from other writers rounds to the nearest cent
        let noisy: Money = serde_json::from_str("0.30000000000000004").unwrap();
        assert_eq!(noisy.cents(), 30);
    }
}
