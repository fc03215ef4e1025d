//! Text rendering of generated plans: aligned table, JSON, and CSV.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::generate::GeneratedPlan;

/// Output format for a rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(s)
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown output format {0:?} (expected table, json, or csv)")]
    UnknownFormat(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("formatting failed")]
    Fmt(#[from] fmt::Error),
}

/// Render `plan` in the requested format. The result ends with a newline.
pub fn render(plan: &GeneratedPlan, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => render_table(plan),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(plan)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => render_csv(plan),
    }
}

/// A generated plan labelled with its batch entry name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPlan {
    pub name: String,
    #[serde(flatten)]
    pub plan: GeneratedPlan,
}

/// Render every plan of a batch.
///
/// Tables are separated by a `== name ==` banner, JSON is a single array,
/// and CSV gains a leading `plan` column under one shared header.
pub fn render_batch(plans: &[NamedPlan], format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => {
            let mut out = String::new();
            for (idx, named) in plans.iter().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "== {} ==", named.name)?;
                out.push_str(&render_table(&named.plan)?);
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(plans)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut out = String::new();
            writeln!(out, "plan,month,goal")?;
            for named in plans {
                for (idx, goal) in named.plan.goals.iter().enumerate() {
                    writeln!(out, "{},{},{}", csv_field(&named.name), idx + 1, goal)?;
                }
            }
            Ok(out)
        }
    }
}

fn render_table(plan: &GeneratedPlan) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(
        out,
        "Starting production {} at {} per month over {} months",
        plan.initial, plan.percent, plan.months
    )?;
    writeln!(out)?;
    writeln!(out, "{:>6} {:>20} {:>20}", "MONTH", "GOAL", "CHANGE")?;
    writeln!(out, "{}", "-".repeat(48))?;

    for (idx, (goal, delta)) in plan.goals.iter().zip(plan.deltas()).enumerate() {
        writeln!(out, "{:>6} {:>20} {:>+20}", idx + 1, goal, delta)?;
    }

    if plan.goals.is_empty() {
        writeln!(out, "(no months planned)")?;
    }
    Ok(out)
}

/// Quote a CSV field when it holds a delimiter, quote, or line break.
/// Embedded quotes are doubled (RFC 4180).
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn render_csv(plan: &GeneratedPlan) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "month,goal")?;
    for (idx, goal) in plan.goals.iter().enumerate() {
        writeln!(out, "{},{}", idx + 1, goal)?;
    }
    Ok(out)
}
