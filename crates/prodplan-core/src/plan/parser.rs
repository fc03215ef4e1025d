//! Batch TOML parser with validation.
//!
//! Parses a `plans.toml` string into a [`BatchToml`] and validates:
//! - At least one plan is present.
//! - Plan names are non-empty and unique.
//! - Plan lengths stay within [`MAX_MONTHS`].
//! - Growth rates do not fall below -100%.

use std::collections::HashSet;

use thiserror::Error;

use super::generate::MAX_MONTHS;
use super::toml_format::BatchToml;

/// Lowest growth rate accepted from a batch file.
pub const MIN_PERCENT: i32 = -100;

/// Errors that can occur during batch parsing and validation.
#[derive(Debug, Error)]
pub enum BatchParseError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("batch must contain at least one plan")]
    NoPlans,

    #[error("plan #{0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate plan name: {0:?}")]
    DuplicatePlanName(String),

    #[error("plan {plan:?} asks for {months} months (maximum is {max})", max = MAX_MONTHS)]
    TooManyMonths { plan: String, months: usize },

    #[error("plan {plan:?} has growth rate {percent}% (minimum is {min}%)", min = MIN_PERCENT)]
    RateBelowTotalLoss { plan: String, percent: i32 },
}

/// Parse and validate a `plans.toml` string.
pub fn parse_batch_toml(content: &str) -> Result<BatchToml, BatchParseError> {
    let batch: BatchToml = toml::from_str(content)?;
    validate(&batch)?;
    Ok(batch)
}

fn validate(batch: &BatchToml) -> Result<(), BatchParseError> {
    if batch.plans.is_empty() {
        return Err(BatchParseError::NoPlans);
    }

    let mut seen = HashSet::new();
    for (idx, plan) in batch.plans.iter().enumerate() {
        if plan.name.trim().is_empty() {
            return Err(BatchParseError::EmptyName(idx + 1));
        }
        if !seen.insert(plan.name.as_str()) {
            return Err(BatchParseError::DuplicatePlanName(plan.name.clone()));
        }
        if plan.months > MAX_MONTHS {
            return Err(BatchParseError::TooManyMonths {
                plan: plan.name.clone(),
                months: plan.months,
            });
        }
        if plan.percent < MIN_PERCENT {
            return Err(BatchParseError::RateBelowTotalLoss {
                plan: plan.name.clone(),
                percent: plan.percent,
            });
        }
    }

    Ok(())
}
