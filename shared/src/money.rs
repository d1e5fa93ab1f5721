//! # Money Arithmetic
//!
//! Integer-cents money type used by the quote and sale builders.
//!
//! All monetary values on the wire are integer cents and all percentages are
//! basis points (825 = 8.25%). Arithmetic stays in integers the whole way:
//! percentage math widens to `i128` and rounds half up, so totals computed on
//! the client match what the backend stores.
//!
//! ## Usage
//!
//! ```rust
//! use shared::money::{Money, Totals};
//!
//! let lines = [Money::from_cents(2 * 1099), Money::from_cents(550)];
//! let totals = Totals::compute(lines.iter().copied(), 1000, 825);
//! assert_eq!(totals.total, totals.subtotal - totals.discount + totals.tax);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A monetary value in cents. Serializes as a plain integer.
///
/// Signed so credits and corrections can go negative; display formatting
/// lives in [`fmt::Display`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-currency portion, truncated toward zero.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Returns `bps` basis points of this amount, rounded half up.
    ///
    /// Widens to `i128` before multiplying so large subtotals cannot
    /// overflow. `10_000` bps returns the amount unchanged.
    ///
    /// ```rust
    /// use shared::money::Money;
    ///
    /// // $10.00 at 8.25% rounds 82.5 cents up to 83.
    /// assert_eq!(Money::from_cents(1000).percentage(825).cents(), 83);
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        let part = (self.0 as i128 * bps as i128 + 5000) / 10_000;
        Money(part as i64)
    }

    /// Line total for a quantity of this unit price.
    #[inline]
    pub const fn times(&self, quantity: i64) -> Self {
        Money(self.0 * quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

/// Document totals: `total = subtotal - discount + tax`.
///
/// The discount applies to the subtotal; tax applies to the discounted
/// amount. Both quote and sale builders recompute through this one path so
/// the figures shown on screen always agree with what gets submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
}

impl Totals {
    pub fn compute<I>(line_totals: I, discount_bps: u32, tax_bps: u32) -> Totals
    where
        I: IntoIterator<Item = Money>,
    {
        let subtotal: Money = line_totals.into_iter().sum();
        let discount = subtotal.percentage(discount_bps);
        let tax = (subtotal - discount).percentage(tax_bps);
        Totals {
            subtotal,
            discount,
            tax,
            total: subtotal - discount + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.units(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
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
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.times(4).cents(), 4000);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // $10.00 at 8.25% = 82.5 cents, rounds to 83
        assert_eq!(Money::from_cents(1000).percentage(825).cents(), 83);
        // $10.00 at 10% = exactly 100
        assert_eq!(Money::from_cents(1000).percentage(1000).cents(), 100);
        // 10000 bps is the whole amount
        assert_eq!(Money::from_cents(1234).percentage(10_000).cents(), 1234);
        assert_eq!(Money::from_cents(1234).percentage(0).cents(), 0);
    }

    #[test]
    fn test_percentage_large_amounts() {
        // Near-i64 subtotals must not overflow the intermediate product
        let big = Money::from_cents(i64::MAX / 20_000);
        let part = big.percentage(825);
        assert!(part.cents() > 0);
    }

    #[test]
    fn test_sum() {
        let lines = vec![
            Money::from_cents(100),
            Money::from_cents(250),
            Money::from_cents(650),
        ];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total.cents(), 1000);
    }

    #[test]
    fn test_totals_no_discount_no_tax() {
        let totals = Totals::compute([Money::from_cents(1000)], 0, 0);
        assert_eq!(totals.subtotal.cents(), 1000);
        assert_eq!(totals.discount.cents(), 0);
        assert_eq!(totals.tax.cents(), 0);
        assert_eq!(totals.total.cents(), 1000);
    }

    #[test]
    fn test_totals_discount_then_tax() {
        // $100.00 subtotal, 10% discount, 8.25% tax on the discounted amount
        let totals = Totals::compute([Money::from_cents(10_000)], 1000, 825);
        assert_eq!(totals.subtotal.cents(), 10_000);
        assert_eq!(totals.discount.cents(), 1000);
        assert_eq!(totals.tax.cents(), 743); // 9000 * 0.0825 = 742.5 -> 743
        assert_eq!(totals.total.cents(), 9743);
        assert_eq!(totals.total, totals.subtotal - totals.discount + totals.tax);
    }

    #[test]
    fn test_totals_multiple_lines() {
        let lines = [
            Money::from_cents(1099).times(2), // 2198
            Money::from_cents(550),           // 550
        ];
        let totals = Totals::compute(lines, 0, 1000);
        assert_eq!(totals.subtotal.cents(), 2748);
        assert_eq!(totals.tax.cents(), 275); // 274.8 -> 275
        assert_eq!(totals.total.cents(), 3023);
    }

    #[test]
    fn test_totals_empty_lines() {
        let totals = Totals::compute(std::iter::empty(), 1500, 825);
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let money = Money::from_cents(1099);
        assert_eq!(serde_json::to_string(&money).unwrap(), "1099");
        let back: Money = serde_json::from_str("1099").unwrap();
        assert_eq!(back, money);
    }
}
