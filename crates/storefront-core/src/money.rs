//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing catalog prices as floats:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Catalog "109.95" ──parse──► 10995 cents                              │
//! │    Cart total = Σ cents × quantity, rendered as "219.90"               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(550); // 5.50
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.to_string(), "16.50");
//!
//! // Decimal text (e.g. a JSON price) is parsed exactly, never via f64
//! let parsed = Money::parse_decimal("109.95").unwrap();
//! assert_eq!(parsed.cents(), 10995);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::error::ValidationError;

/// Number of minor units in one major unit.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never has to think about underflow;
///   catalog validation is what keeps prices non-negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.price ──► LineItem.price (copied at add time)
///                              │
///                              ▼
///                   LineItem.line_total() ──► Cart.total() ──► "20.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (10.99 → 10).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion, always 0-99 (10.99 → 99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(225); // 2.25
    /// assert_eq!(unit_price.multiply_quantity(4).cents(), 900);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Parses a decimal amount such as `"10"`, `"5.5"` or `"109.95"`.
    ///
    /// ## Rules
    /// - Optional leading `-`
    /// - At least one integer digit
    /// - At most two fractional digits (a price cannot carry fractions of a cent)
    /// - No exponent, no thousands separators
    ///
    /// The text is parsed digit by digit; no floating point value is ever
    /// involved.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("5.5").unwrap().cents(), 550);
    /// assert_eq!(Money::parse_decimal("22.30").unwrap().cents(), 2230);
    /// assert!(Money::parse_decimal("1.999").is_err());
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> Result<Money, ValidationError> {
        parse_cents(text, false).map(Money)
    }

    /// Like [`parse_decimal`](Self::parse_decimal), but extra fractional
    /// digits are rounded half-up (away from zero) to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal_rounded("1.999").unwrap().cents(), 200);
    /// assert_eq!(Money::parse_decimal_rounded("1.994").unwrap().cents(), 199);
    /// assert_eq!(Money::parse_decimal_rounded("-0.005").unwrap().cents(), -1);
    /// ```
    pub fn parse_decimal_rounded(text: &str) -> Result<Money, ValidationError> {
        parse_cents(text, true).map(Money)
    }
}

fn parse_cents(text: &str, round: bool) -> Result<i64, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: format!("'{}' {}", text, reason),
    };

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("is not a decimal number"));
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("is not a decimal number"));
    }
    if unsigned.contains('.') && fraction.is_empty() {
        return Err(invalid("has no digits after the decimal point"));
    }

    let (kept, dropped) = fraction.split_at(fraction.len().min(2));
    if !dropped.is_empty() && !round {
        return Err(invalid("has more than two decimal places"));
    }
    let round_up = dropped.bytes().next().is_some_and(|d| d >= b'5');

    let major: i64 = whole.parse().map_err(|_| invalid("is out of range"))?;
    let minor: i64 = match kept.len() {
        0 => 0,
        1 => kept.parse::<i64>().map_err(|_| invalid("is out of range"))? * 10,
        _ => kept.parse().map_err(|_| invalid("is out of range"))?,
    };

    let cents = major
        .checked_mul(MINOR_PER_MAJOR)
        .and_then(|c| c.checked_add(minor))
        .and_then(|c| c.checked_add(i64::from(round_up)))
        .ok_or_else(|| invalid("is out of range"))?;

    Ok(if negative { -cents } else { cents })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering: `2000` cents → `"20.00"`.
///
/// ## Note
/// No currency symbol. The shell decorates amounts with the configured
/// symbol when printing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Lets totals be written as `items.map(|i| i.line_total()).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2000).to_string(), "20.00");
        assert_eq!(Money::from_cents(550).to_string(), "5.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_parse_decimal_accepts_catalog_prices() {
        assert_eq!(Money::parse_decimal("109.95").unwrap().cents(), 10995);
        assert_eq!(Money::parse_decimal("22.3").unwrap().cents(), 2230);
        assert_eq!(Money::parse_decimal("7.95").unwrap().cents(), 795);
        assert_eq!(Money::parse_decimal("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal("0.01").unwrap().cents(), 1);
        assert_eq!(Money::parse_decimal(" 5.50 ").unwrap().cents(), 550);
        assert_eq!(Money::parse_decimal("-5.5").unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_decimal_rejects_malformed_text() {
        for bad in ["", "-", ".5", "5.", "1.999", "1e3", "12,50", "abc", "1.2.3", "99999999999999999999"] {
            assert!(Money::parse_decimal(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_decimal_rounded_rounds_half_up() {
        assert_eq!(Money::parse_decimal_rounded("1.999").unwrap().cents(), 200);
        assert_eq!(Money::parse_decimal_rounded("1.995").unwrap().cents(), 200);
        assert_eq!(Money::parse_decimal_rounded("1.9949").unwrap().cents(), 199);
        assert_eq!(Money::parse_decimal_rounded("0.005").unwrap().cents(), 1);
        assert_eq!(Money::parse_decimal_rounded("0.004").unwrap().cents(), 0);
        assert_eq!(Money::parse_decimal_rounded("-2.675").unwrap().cents(), -268);
        assert_eq!(Money::parse_decimal_rounded("22.3").unwrap().cents(), 2230);

        for bad in ["", "1.", "1e3", "abc", "1.99x"] {
            assert!(Money::parse_decimal_rounded(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(550);
        let b = Money::from_cents(225);
        assert_eq!((a + b).cents(), 775);

        let mut running = Money::zero();
        running += a;
        assert_eq!(running, a);

        let total: Money = vec![a, b, Money::from_cents(25)].into_iter().sum();
        assert_eq!(total.cents(), 800);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
        assert_eq!(unit_price.multiply_quantity(0), Money::zero());
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_panicking() {
        let huge = Money::parse_decimal("50000000000000000").unwrap();

        assert_eq!(huge.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MAX) + Money::from_cents(1)).cents(), i64::MAX);

        let total: Money = vec![huge.multiply_quantity(2), huge].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert!(!total.to_string().is_empty());
    }

    /// 0.1 + 0.2 in cents is exactly 0.30, unlike the float sum.
    #[test]
    fn test_no_float_drift() {
        let a = Money::parse_decimal("0.1").unwrap();
        let b = Money::parse_decimal("0.2").unwrap();
        assert_eq!((a + b).to_string(), "0.30");
    }
}
