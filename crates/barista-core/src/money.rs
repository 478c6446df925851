//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Folding add-on prices as floats:                                       │
//! │    2.0 + 0.5 + 0.3 = 2.8                  (lucky)                      │
//! │    0.1 + 0.2       = 0.30000000000000004  ❌                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    200 + 50 + 30 = 280 cents → "2.80"                                   │
//! │    Every registry price is a whole number of cents, so the fold is     │
//! │    exact and "round half-up to 2 decimals" never changes the value.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barista_core::money::Money;
//!
//! let latte = Money::from_cents(300);
//! let total = latte + Money::from_cents(50) + Money::from_cents(30);
//! assert_eq!(total.fixed(), "3.80");
//! assert_eq!(total.to_string(), "$3.80");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Beverage::base_price ──┐
///                        ├──► Composition::derive_result ──► cost.fixed()
/// Additive::price_delta ─┘                                   "3.80" in UI
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let price = Money::from_cents(325); // $3.25
    /// assert_eq!(price.cents(), 325);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cent portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Fixed two-decimal rendering without a currency symbol.
    ///
    /// This is the string the order card shows next to the `$` sign.
    ///
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(200).fixed(), "2.00");
    /// assert_eq!(Money::from_cents(5).fixed(), "0.05");
    /// ```
    pub fn fixed(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
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
        let money = Money::from_cents(325);
        assert_eq!(money.cents(), 325);
        assert_eq!(money.dollars(), 3);
        assert_eq!(money.cents_part(), 25);
    }

    #[test]
    fn test_display_and_fixed() {
        assert_eq!(Money::from_cents(380).to_string(), "$3.80");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(0).fixed(), "0.00");
        assert_eq!(Money::from_cents(280).fixed(), "2.80");
        assert_eq!(Money::from_cents(-5).fixed(), "-0.05");
    }

    #[test]
    fn test_addition_is_exact() {
        let total = Money::from_cents(10) + Money::from_cents(20);
        assert_eq!(total.fixed(), "0.30");

        // Black Coffee + Milk + Sugar: every term is whole cents.
        let coffee = Money::from_cents(200) + Money::from_cents(50) + Money::from_cents(30);
        assert_eq!(coffee.cents(), 280);
        assert_eq!(coffee.to_string(), "$2.80");
    }
}
