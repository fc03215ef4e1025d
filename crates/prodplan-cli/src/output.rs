//! Destination handling for rendered plans.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Write `contents` to `output`, or to stdout when no path is given.
pub fn write_output(contents: &str, output: Option<&Path>) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {}", path.display()))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };

    writer
        .write_all(contents.as_bytes())
        .context("failed to write plan output")?;
    writer.flush().context("failed to flush plan output")?;

    if let Some(path) = output {
        info!(path = %path.display(), bytes = contents.len(), "wrote plan output");
    }
    Ok(())
}
