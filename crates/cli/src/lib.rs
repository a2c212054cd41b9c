use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flick_core::{FlickOutcome, RitualReport};

pub mod logging;

/// Resolve the `--root` argument to an absolute path.
///
/// `.` maps to the current working directory; relative paths are joined onto
/// it. The path is not required to exist yet; the core reports a missing
/// directory when it canonicalizes.
pub fn resolve_base_dir(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        return env::current_dir().context("Failed to get current directory");
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(path))
}

/// Line printed as soon as a folder finishes.
pub fn render_outcome(outcome: &FlickOutcome) -> String {
    match outcome {
        FlickOutcome::Flicked { message, .. } => format!("✅ {message}"),
        FlickOutcome::Failed { folder, error } => {
            format!("❌ Failed in {}: {error}", folder.display())
        }
    }
}

/// Closing line of a run.
pub fn render_summary(report: &RitualReport) -> String {
    format!(
        "🌿 Ritual complete: {} of {} folders received their entropy.",
        report.flicked, report.total
    )
}
