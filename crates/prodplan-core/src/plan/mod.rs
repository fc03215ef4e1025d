//! Plan generation: compounding, batch TOML parsing, rendering.

pub mod generate;
pub mod growth;
pub mod parser;
pub mod render;
pub mod toml_format;

pub use generate::{GeneratedPlan, MAX_MONTHS, PlanRequest, Projection, generate_plan};
pub use growth::{GrowthRate, GrowthRateParseError};
pub use parser::{BatchParseError, MIN_PERCENT, parse_batch_toml};
pub use render::{NamedPlan, OutputFormat, RenderError, render, render_batch};
pub use toml_format::{BatchMeta, BatchToml, PlanToml};
