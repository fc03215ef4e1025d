mod batch_cmd;
mod config;
mod generate_cmd;
mod output;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;

use prodplan_core::plan::{GrowthRate, MAX_MONTHS, OutputFormat, PlanRequest};

#[derive(Parser)]
#[command(name = "prodplan", about = "Compounded monthly production target planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a prodplan config file with default months and growth rate
    Init {
        /// Default number of months per plan
        #[arg(long, default_value_t = PlanRequest::DEFAULT_MONTHS)]
        months: usize,
        /// Default growth per month in percent (e.g. 30 or 30%)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        percent: GrowthRate,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Project monthly goals from a current production value
    Generate {
        /// Current production
        current: u64,
        /// Number of months (overrides PRODPLAN_MONTHS and the config file)
        #[arg(long)]
        months: Option<usize>,
        /// Growth per month in percent (overrides PRODPLAN_PERCENT and the config file)
        #[arg(long, allow_hyphen_values = true)]
        percent: Option<GrowthRate>,
        /// Output format: table, json, or csv
        #[arg(long, default_value = "table")]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate every plan in a batch TOML file
    Batch {
        /// Path to the batch TOML file
        file: PathBuf,
        /// Output format: table, json, or csv
        #[arg(long, default_value = "table")]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Execute the `prodplan init` command: write config file.
fn cmd_init(months: usize, percent: GrowthRate, force: bool) -> anyhow::Result<()> {
    if months > MAX_MONTHS {
        bail!("--months {months} exceeds the maximum of {MAX_MONTHS}");
    }

    let path = config::config_path();

    if path.exists() && !force {
        bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        defaults: config::DefaultsSection {
            months,
            percent: percent.percent(),
        },
    };
    config::save_config_to(&cfg, &path)?;
    info!(path = %path.display(), "wrote config file");

    println!("Config written to {}", path.display());
    println!("  defaults.months = {months}");
    println!("  defaults.percent = {}", percent.percent());

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            months,
            percent,
            force,
        } => {
            cmd_init(months, percent, force)?;
        }
        Commands::Generate {
            current,
            months,
            percent,
            format,
            output,
        } => {
            generate_cmd::run_generate(current, months, percent, format, output.as_deref())?;
        }
        Commands::Batch {
            file,
            format,
            output,
        } => {
            batch_cmd::run_batch(&file, format, output.as_deref())?;
        }
    }

    Ok(())
}
