//! Percentage growth rate applied once per period.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer percent increase per period. May be zero or negative.
///
/// The multiplicative factor is `1 + percent / 100`, computed in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrowthRate(i32);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid growth rate {0:?} (expected an integer percent such as 30 or 30%)")]
pub struct GrowthRateParseError(pub String);

impl GrowthRate {
    /// A rate that leaves every value unchanged.
    pub const FLAT: GrowthRate = GrowthRate(0);

    pub fn new(percent: i32) -> Self {
        Self(percent)
    }

    pub fn percent(self) -> i32 {
        self.0
    }

    /// Multiplicative factor applied per period.
    pub fn factor(self) -> f64 {
        1.0 + f64::from(self.0) / 100.0
    }

    pub fn is_flat(self) -> bool {
        self.0 == 0
    }

    /// Apply one compounding step: multiply in `f64`, then floor.
    ///
    /// A flat rate returns `value` untouched, so values above 2^53 do not
    /// drift through the `f64` round trip. Products below zero (only
    /// reachable for rates under -100%) clamp to 0 and products past
    /// `u64::MAX` saturate.
    pub fn apply(self, value: u64) -> u64 {
        if self.is_flat() {
            return value;
        }
        let grown = (value as f64 * self.factor()).floor();
        // `as` saturates at both ends and maps NaN to 0.
        grown as u64
    }
}

impl From<i32> for GrowthRate {
    fn from(percent: i32) -> Self {
        Self(percent)
    }
}

impl fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for GrowthRate {
    type Err = GrowthRateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        digits
            .parse::<i32>()
            .map(GrowthRate)
            .map_err(|_| GrowthRateParseError(s.to_string()))
    }
}
