//! Amount type for representing expense values
//!
//! Amounts are non-negative whole numbers of the currency's minor unit.
//! They are printed bare (`6000`), exactly as they appear in every report
//! format. Addition saturates at `u64::MAX` instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A non-negative expense amount in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from minor units
    ///
    /// # Examples
    /// ```
    /// use tdd_katas::models::Amount;
    /// let amount = Amount::new(1500);
    /// assert_eq!(amount.value(), 1500);
    /// ```
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add two amounts, clamping at the largest representable amount
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(Amount::new(6000).to_string(), "6000");
        assert_eq!(Amount::zero().to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Amount::new(1000);
        a += Amount::new(500);
        assert_eq!(a.value(), 1500);
        assert_eq!((a + Amount::new(1)).value(), 1501);
    }

    #[test]
    fn test_addition_saturates() {
        let max = Amount::new(u64::MAX);
        assert_eq!(max + Amount::new(1), max);

        let mut a = Amount::new(u64::MAX - 1);
        a += Amount::new(5);
        assert_eq!(a, max);

        let total: Amount = [max, max, Amount::new(7)].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(6000), Amount::new(800), Amount::new(3000)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total, Amount::new(9800));

        let empty: Vec<Amount> = Vec::new();
        assert!(empty.into_iter().sum::<Amount>().is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!("15000".parse::<Amount>().unwrap(), Amount::new(15000));
        assert_eq!(" 42 ".parse::<Amount>().unwrap(), Amount::new(42));
        assert!("-5".parse::<Amount>().is_err());
        assert!("12.50".parse::<Amount>().is_err());
    }
}
