//! Core value types shared by the store, seed data and screens.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use strum_macros::EnumIter;

/// A SOL quantity. The single parse boundary for the balance/amount strings
/// the rest of the app carries as text.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SolAmount(f64);

impl SolAmount {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        // Quantities are never negative
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    /// Parses free text; anything that is not a number counts as zero.
    /// Seed balances are trusted display strings, so a bad one must never
    /// poison an aggregate.
    pub fn parse_lossy(text: &str) -> Self {
        text.trim().parse::<f64>().map_or(Self::ZERO, Self::new)
    }

    /// Strict variant for user-entered amounts: only a positive number is a
    /// submittable quantity.
    pub fn parse_positive(text: &str) -> Option<Self> {
        let v = text.trim().parse::<f64>().ok()?;
        if v > 0.0 { Some(Self(v)) } else { None }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Add for SolAmount {
    type Output = SolAmount;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for SolAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for SolAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

impl std::fmt::Display for SolAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::utils::format_sol(self.0))
    }
}

/// Chart timeframes offered by the selector row. Cosmetic only: the mock
/// candle series is not resampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
pub enum Timeframe {
    S1,
    #[default]
    M1,
    M5,
    M15,
    H1,
    H4,
    D1,
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::S1 => write!(f, "1s"),
            Self::M1 => write!(f, "1m"),
            Self::M5 => write!(f, "5m"),
            Self::M15 => write!(f, "15m"),
            Self::H1 => write!(f, "1h"),
            Self::H4 => write!(f, "4h"),
            Self::D1 => write!(f, "1D"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lossy_reads_plain_decimals() {
        assert_eq!(SolAmount::parse_lossy("0.775").value(), 0.775);
        assert_eq!(SolAmount::parse_lossy(" 12.5 ").value(), 12.5);
    }

    #[test]
    fn parse_lossy_maps_garbage_to_zero() {
        assert_eq!(SolAmount::parse_lossy("").value(), 0.0);
        assert_eq!(SolAmount::parse_lossy("abc").value(), 0.0);
        assert_eq!(SolAmount::parse_lossy("1.2.3").value(), 0.0);
    }

    #[test]
    fn parse_positive_rejects_zero_and_junk() {
        assert!(SolAmount::parse_positive("0.1").is_some());
        assert!(SolAmount::parse_positive("0").is_none());
        assert!(SolAmount::parse_positive("-1").is_none());
        assert!(SolAmount::parse_positive("lots").is_none());
    }

    #[test]
    fn sum_over_iterator() {
        let total: SolAmount = ["0.5", "1.5", "junk"]
            .iter()
            .map(|s| SolAmount::parse_lossy(s))
            .sum();
        assert_eq!(total.value(), 2.0);
    }
}
