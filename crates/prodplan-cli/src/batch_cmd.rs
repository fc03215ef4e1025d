//! `prodplan batch` command: generate every plan in a batch TOML file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use prodplan_core::plan::{NamedPlan, OutputFormat, parse_batch_toml, render_batch};

use crate::output::write_output;

/// Read, validate, and render a batch file.
pub fn render_batch_file(file: &Path, format: OutputFormat) -> Result<String> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read batch file: {}", file.display()))?;
    let batch = parse_batch_toml(&content)
        .with_context(|| format!("invalid batch file: {}", file.display()))?;

    let plans: Vec<NamedPlan> = batch
        .plans
        .iter()
        .map(|entry| NamedPlan {
            name: entry.name.clone(),
            plan: entry.request().generate(),
        })
        .collect();

    info!(
        batch = batch.batch.name.as_deref().unwrap_or("unnamed"),
        plans = plans.len(),
        "generated batch"
    );

    render_batch(&plans, format).context("failed to render batch")
}

/// Run the batch command.
pub fn run_batch(file: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let rendered = render_batch_file(file, format)?;
    write_output(&rendered, output)
}
