//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The store and all arithmetic use integer cents (499 = $4.99).       │
//! │    Only serialization converts to a decimal number, because the API    │
//! │    contract says rental_rate is a decimal (4.99), never "499" or a     │
//! │    fixed-point string.                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(499); // $4.99
//! assert_eq!(rate.to_decimal(), 4.99);
//! ```

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Custom serde**: Serializes as a decimal number (`4.99`), matching the
///   wire contract for `rental_rate` and payment amounts
///
/// ## Where Money is Used
/// ```text
/// film.rental_rate_cents ──► Money ──► serialized as 4.99 in every report
/// payment.amount_cents   ──► Money ──► same decimal rendering
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let rate = Money::from_cents(499); // Represents $4.99
    /// assert_eq!(rate.cents(), 499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let rate = Money::from_major_minor(4, 99); // $4.99
    /// assert_eq!(rate.cents(), 499);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a decimal number.
    ///
    /// This is the serialization form: 499 cents becomes `4.99`. Values up
    /// to ~$70 trillion convert exactly; rental rates are nowhere near the
    /// precision limit of f64.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(499).to_decimal(), 4.99);
    /// assert_eq!(Money::from_cents(0).to_decimal(), 0.0);
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. API responses go through serde.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Serializes as a decimal number (499 cents -> 4.99).
///
/// The endpoint contract requires monetary fields to be decimal numbers,
/// not integer-scaled values or fixed-point strings.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_decimal())
    }
}

/// Deserializes from a decimal number (4.99 -> 499 cents).
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let decimal = f64::deserialize(deserializer)?;
        Ok(Money::from_cents((decimal * 100.0).round() as i64))
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
        let money = Money::from_cents(499);
        assert_eq!(money.cents(), 499);
        assert_eq!(money.dollars(), 4);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(4, 99);
        assert_eq!(money.cents(), 499);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(499)), "$4.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
        c -= b;
        assert_eq!(c.cents(), 1000);
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let json = serde_json::to_string(&Money::from_cents(499)).unwrap();
        assert_eq!(json, "4.99");

        let json = serde_json::to_string(&Money::from_cents(200)).unwrap();
        // 2.0, not "2.00" or 200
        assert_eq!(json, "2.0");
    }

    #[test]
    fn test_deserializes_from_decimal_number() {
        let money: Money = serde_json::from_str("4.99").unwrap();
        assert_eq!(money.cents(), 499);

        let money: Money = serde_json::from_str("2").unwrap();
        assert_eq!(money.cents(), 200);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert_eq!(zero, Money::default());

        let rate = Money::from_cents(99);
        assert!(!rate.is_zero());
    }
}
