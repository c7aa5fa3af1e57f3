//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The ledger is currency-agnostic: the symbol and decimal separator
//! come from the user's settings at display time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use monthly_ledger::models::Money;
    /// let amount = Money::from_cents(35080); // 350.80
    /// assert_eq!(amount.whole(), 350);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The amount as a floating-point number of units, for ratios and charts
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Largest amount accepted on input: ten billion units
    pub const MAX_INPUT: Money = Money(1_000_000_000_000);

    /// Whether the amount exceeds what a user may enter
    pub const fn exceeds_input_limit(&self) -> bool {
        self.0.abs() > Self::MAX_INPUT.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "350.80", "350,80", "R$ 350,80", "$10", "1.234,56",
    /// "1,234.56" and "R$ 1.500". The last separator is the decimal
    /// separator unless exactly three digits follow it and no different
    /// separator comes before it, in which case it groups thousands.
    /// More than two decimal digits are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        if original.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, rest) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, original),
        };

        // Drop a leading currency symbol such as "R$" or "$"
        let rest = rest
            .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.' && c != ',')
            .trim();

        let (units_str, cents_str) = match rest.rfind(['.', ',']) {
            Some(pos) => {
                let separator = rest.as_bytes()[pos] as char;
                let fraction = &rest[pos + 1..];
                let mixed = rest[..pos].contains(|c: char| (c == '.' || c == ',') && c != separator);
                if fraction.len() == 3 && !mixed {
                    (rest, "")
                } else {
                    (&rest[..pos], fraction)
                }
            }
            None => (rest, ""),
        };

        let units_digits: String = units_str.chars().filter(|c| *c != '.' && *c != ',').collect();
        if units_digits.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }
        if !units_digits.chars().all(|c| c.is_ascii_digit())
            || !cents_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if units_digits.is_empty() {
            0
        } else {
            units_digits.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => cents_str.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        let total = units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol and decimal separator, e.g. "R$ 350,80"
    pub fn format_with(&self, symbol: &str, decimal_separator: char) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let body = format!(
            "{}{}{:02}",
            self.whole().abs(),
            decimal_separator,
            self.cents_part()
        );
        if symbol.is_empty() {
            format!("{}{}", sign, body)
        } else {
            format!("{}{} {}", sign, symbol, body)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.whole().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.whole(), self.cents_part())
        }
    }
}

// Arithmetic saturates at the i64 bounds so report totals never overflow

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(35080);
        assert_eq!(m.cents(), 35080);
        assert_eq!(m.whole(), 350);
        assert_eq!(m.cents_part(), 80);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(35080).to_string(), "350.80");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
    }

    #[test]
    fn test_format_with_symbol() {
        let m = Money::from_cents(35080);
        assert_eq!(m.format_with("R$", ','), "R$ 350,80");
        assert_eq!(m.format_with("$", '.'), "$ 350.80");
        assert_eq!(m.format_with("", ','), "350,80");
        assert_eq!(Money::from_cents(-500).format_with("R$", ','), "-R$ 5,00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("350.80").unwrap().cents(), 35080);
        assert_eq!(Money::parse("350,80").unwrap().cents(), 35080);
        assert_eq!(Money::parse("R$ 350,80").unwrap().cents(), 35080);
        assert_eq!(Money::parse("$10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1.234,56").unwrap().cents(), 123456);
        assert_eq!(Money::parse("1,234.56").unwrap().cents(), 123456);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
    }

    #[test]
    fn test_parse_thousands_grouping() {
        assert_eq!(Money::parse("R$ 1.500").unwrap().cents(), 150000);
        assert_eq!(Money::parse("1.500,00").unwrap().cents(), 150000);
        assert_eq!(Money::parse("10.999").unwrap().cents(), 1099900);
        assert_eq!(Money::parse("1.234.567").unwrap().cents(), 123456700);
        assert_eq!(Money::parse("2,500").unwrap().cents(), 250000);
    }

    #[test]
    fn test_parse_rejects_extra_decimals() {
        assert!(Money::parse("10.9999").is_err());
        assert!(Money::parse("1,234.567").is_err());
        assert!(Money::parse("1.234,5678").is_err());
    }

    #[test]
    fn test_input_limit() {
        assert!(!Money::MAX_INPUT.exceeds_input_limit());
        assert!(Money::from_cents(Money::MAX_INPUT.cents() + 1).exceeds_input_limit());
    }

    #[test]
    fn test_sum_saturates() {
        let big = Money::parse("90000000000000000").unwrap();
        let total: Money = vec![big, big].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - big).cents(), i64::MIN);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12x.50").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(50000);
        let b = Money::from_cents(15000);
        assert_eq!((a - b).cents(), 35000);
        assert_eq!((b - a).cents(), -35000);

        let total: Money = vec![a, b].into_iter().sum();
        assert_eq!(total.cents(), 65000);
    }

    #[test]
    fn test_as_f64() {
        assert!((Money::from_cents(12345).as_f64() - 123.45).abs() < f64::EPSILON);
    }
}
