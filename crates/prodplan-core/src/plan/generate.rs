//! Compounded production plan generation.
//!
//! A plan starts from a current production value and, for each month,
//! multiplies the running value by the growth factor and floors the result.
//! The floored value is both the month's goal and the base for the next
//! month, so rounding losses compound along with the growth.
//!
//! The multiply step uses IEEE 754 double precision followed by `floor`.
//! For example, at 30% growth from 10 the running values are
//! `13.0 -> 13`, `16.9 -> 16`, `20.8 -> 20`, `26.0 -> 26`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::growth::GrowthRate;

/// Longest plan accepted from user input (100 years).
pub const MAX_MONTHS: usize = 1200;

/// Generate `periods` successive compounded-and-floored production goals.
///
/// Returns an empty vector when `periods` is zero, all zeros when
/// `initial_production` is zero, and `initial_production` repeated when
/// `percent` is zero.
///
/// The result holds `periods` values, so memory grows linearly with it.
/// Callers taking `periods` from user input should reject anything above
/// [`MAX_MONTHS`]; the batch parser and the CLI both do.
pub fn generate_plan(initial_production: u64, periods: usize, percent: i32) -> Vec<u64> {
    // `collect`/`extend` would reserve from the size hint, which overflows
    // for oversized counts. Pushing grows the buffer by doubling instead.
    let mut goals = Vec::with_capacity(periods.min(MAX_MONTHS));
    for goal in Projection::new(initial_production, GrowthRate::new(percent)).take(periods) {
        goals.push(goal);
    }
    goals
}

/// Unbounded iterator over the monthly goals of a plan.
///
/// Each call to `next` applies one compounding step to the running value
/// and yields the floored result.
#[derive(Debug, Clone)]
pub struct Projection {
    current: u64,
    rate: GrowthRate,
}

impl Projection {
    pub fn new(initial_production: u64, rate: GrowthRate) -> Self {
        Self {
            current: initial_production,
            rate,
        }
    }

    /// The running value: the last goal yielded, or the initial value.
    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn rate(&self) -> GrowthRate {
        self.rate
    }
}

impl Iterator for Projection {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.current = self.rate.apply(self.current);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Inputs for one plan.
///
/// Use [`PlanRequest::new`] with the starting value, then chain the
/// builder-style setters before calling [`PlanRequest::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Production at the start of the plan.
    pub initial: u64,
    /// Number of monthly goals to produce.
    pub months: usize,
    /// Growth applied each month.
    pub percent: GrowthRate,
}

impl PlanRequest {
    /// Default plan length when none is given.
    pub const DEFAULT_MONTHS: usize = 12;

    /// Create a request with `DEFAULT_MONTHS` and a flat rate.
    pub fn new(initial: u64) -> Self {
        Self {
            initial,
            months: Self::DEFAULT_MONTHS,
            percent: GrowthRate::FLAT,
        }
    }

    pub fn months(mut self, months: usize) -> Self {
        self.months = months;
        self
    }

    pub fn percent(mut self, rate: impl Into<GrowthRate>) -> Self {
        self.percent = rate.into();
        self
    }

    pub fn generate(&self) -> GeneratedPlan {
        let goals = generate_plan(self.initial, self.months, self.percent.percent());
        debug!(
            initial = self.initial,
            months = self.months,
            percent = self.percent.percent(),
            last = goals.last().copied(),
            "generated plan"
        );
        GeneratedPlan {
            initial: self.initial,
            months: self.months,
            percent: self.percent,
            goals,
        }
    }
}

/// A request together with its generated goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub initial: u64,
    pub months: usize,
    pub percent: GrowthRate,
    pub goals: Vec<u64>,
}

impl GeneratedPlan {
    /// Goal for the final month, or the initial value for an empty plan.
    pub fn final_goal(&self) -> u64 {
        self.goals.last().copied().unwrap_or(self.initial)
    }

    /// Per-month change relative to the previous month's goal.
    pub fn deltas(&self) -> Vec<i128> {
        let mut prev = self.initial;
        self.goals
            .iter()
            .map(|&goal| {
                let delta = i128::from(goal) - i128::from(prev);
                prev = goal;
                delta
            })
            .collect()
    }
}
