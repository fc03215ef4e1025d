//! `prodplan generate` command: project goals for one starting value.

use std::path::Path;

use anyhow::{Context, Result};

use prodplan_core::plan::{GrowthRate, OutputFormat, PlanRequest, render};

use crate::config::PlanDefaults;
use crate::output::write_output;

/// Build and render the plan without writing it anywhere.
pub fn render_generate(
    current: u64,
    months: Option<usize>,
    percent: Option<GrowthRate>,
    format: OutputFormat,
) -> Result<String> {
    let defaults = PlanDefaults::resolve(months, percent)?;
    let plan = PlanRequest::new(current)
        .months(defaults.months)
        .percent(defaults.percent)
        .generate();
    render(&plan, format).context("failed to render plan")
}

/// Run the generate command.
pub fn run_generate(
    current: u64,
    months: Option<usize>,
    percent: Option<GrowthRate>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = render_generate(current, months, percent, format)?;
    write_output(&rendered, output)
}
