//! Currency amounts in minor units.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// An amount of rupees held as whole paise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    pub fn paise(&self) -> i64 {
        self.0
    }

    /// Value in rupees, for analytics payloads.
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}₹{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_rupees() {
        assert_eq!(Money::from_paise(12345).to_string(), "₹123.45");
        assert_eq!(Money::from_rupees(50).to_string(), "₹50.00");
        assert_eq!(Money::from_paise(-5).to_string(), "-₹0.05");
    }

    #[test]
    fn arithmetic() {
        let total = Money::from_paise(4000).times(3) + Money::from_paise(50);
        assert_eq!(total.paise(), 12050);
        assert_eq!(total.as_major(), 120.5);
    }
}
