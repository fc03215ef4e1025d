//! TOML format types for batch plan files.
//!
//! These types map directly to the `plans.toml` on-disk format and are
//! deserialized via `serde` + the `toml` crate.

use serde::{Deserialize, Serialize};

use super::generate::PlanRequest;
use super::growth::GrowthRate;

/// Top-level structure of a `plans.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchToml {
    /// Batch metadata.
    #[serde(default)]
    pub batch: BatchMeta,
    /// Plans to generate, in file order.
    #[serde(default)]
    pub plans: Vec<PlanToml>,
}

/// Batch-level metadata in `[batch]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchMeta {
    /// Human-readable batch name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A single `[[plans]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanToml {
    /// Unique plan name within the batch.
    pub name: String,
    /// Current production, the starting value of the plan.
    pub current: u64,
    /// Number of monthly goals.
    #[serde(default = "default_months")]
    pub months: usize,
    /// Growth per month in percent.
    #[serde(default)]
    pub percent: i32,
}

impl PlanToml {
    pub fn request(&self) -> PlanRequest {
        PlanRequest::new(self.current)
            .months(self.months)
            .percent(GrowthRate::new(self.percent))
    }
}

fn default_months() -> usize {
    PlanRequest::DEFAULT_MONTHS
}
