//! Configuration file management for prodplan.
//!
//! Provides a TOML-based config file at `~/.config/prodplan/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use prodplan_core::plan::{GrowthRate, MAX_MONTHS, PlanRequest};

/// Env var overriding the default plan length.
pub const MONTHS_ENV: &str = "PRODPLAN_MONTHS";
/// Env var overriding the default growth rate.
pub const PERCENT_ENV: &str = "PRODPLAN_PERCENT";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    pub defaults: DefaultsSection,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DefaultsSection {
    /// Plan length used when `--months` is not given.
    #[serde(default = "default_months")]
    pub months: usize,
    /// Growth rate used when `--percent` is not given.
    #[serde(default)]
    pub percent: i32,
}

fn default_months() -> usize {
    PlanRequest::DEFAULT_MONTHS
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the prodplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/prodplan` or `~/.config/prodplan`.
/// An empty `XDG_CONFIG_HOME` counts as unset.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("prodplan");
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("prodplan")
}

/// Return the path to the prodplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Load the config file, or `None` if it does not exist.
pub fn load_config() -> Result<Option<ConfigFile>> {
    let path = config_path();
    if !path.exists() {
        return Ok(None);
    }
    load_config_from(&path).map(Some)
}

/// Serialize and write the config file to `path`, creating parent dirs.
pub fn save_config_to(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Plan parameters left after applying the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDefaults {
    pub months: usize,
    pub percent: GrowthRate,
}

impl PlanDefaults {
    /// Resolve plan parameters using the chain: CLI flag > env var > config file > default.
    ///
    /// - months: `cli_months` > `PRODPLAN_MONTHS` > `defaults.months` > 12
    /// - percent: `cli_percent` > `PRODPLAN_PERCENT` > `defaults.percent` > 0
    ///
    /// The config file is only read when a value falls through to it. A
    /// malformed env var or config file is an error rather than a silent
    /// fallback, and so is a month count above [`MAX_MONTHS`] from any source.
    pub fn resolve(cli_months: Option<usize>, cli_percent: Option<GrowthRate>) -> Result<Self> {
        let mut file_config: Option<Option<ConfigFile>> = None;

        let (months, source) = if let Some(months) = cli_months {
            (months, "--months")
        } else if let Ok(raw) = std::env::var(MONTHS_ENV) {
            let months = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{MONTHS_ENV} is not a valid month count: {raw:?}"))?;
            (months, MONTHS_ENV)
        } else if let Some(defaults) = file_defaults(&mut file_config)? {
            (defaults.months, "config file defaults.months")
        } else {
            (PlanRequest::DEFAULT_MONTHS, "built-in default")
        };

        if months > MAX_MONTHS {
            bail!("{source} asks for {months} months (maximum is {MAX_MONTHS})");
        }

        let percent = if let Some(rate) = cli_percent {
            rate
        } else if let Ok(raw) = std::env::var(PERCENT_ENV) {
            raw.parse::<GrowthRate>()
                .with_context(|| format!("{PERCENT_ENV} is not a valid growth rate"))?
        } else if let Some(defaults) = file_defaults(&mut file_config)? {
            GrowthRate::new(defaults.percent)
        } else {
            GrowthRate::FLAT
        };

        debug!(months, percent = percent.percent(), "resolved plan defaults");
        Ok(Self { months, percent })
    }
}

/// Load the config file on first use and return its `[defaults]` section.
fn file_defaults(cache: &mut Option<Option<ConfigFile>>) -> Result<Option<&DefaultsSection>> {
    if cache.is_none() {
        *cache = Some(load_config()?);
    }
    Ok(cache.as_ref().and_then(Option::as_ref).map(|cfg| &cfg.defaults))
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
