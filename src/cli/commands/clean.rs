//! CLI implementation for `sharpbuild clean` command
//!
//! Removes the log directory of one build request. Other configurations of
//! the same solution keep their logs.

use anyhow::{Context, Result};
use serde::Serialize;

use super::{CommandContext, RequestArgs};
use crate::cli::output::status;
use crate::infra::filesystem;

#[derive(Serialize)]
struct CleanReport {
    dir: String,
    removed: bool,
}

/// Execute the clean command
pub fn execute(ctx: &CommandContext, request: &RequestArgs) -> Result<()> {
    let info = request.to_build_info(&ctx.config)?;
    let paths = ctx.log_paths(&info)?;
    let dir = paths.dir();

    let removed = filesystem::remove_dir_all(dir)
        .with_context(|| format!("Failed to clean logs for {info}"))?;

    let message = if removed {
        format!("{} Removed {}", status::SUCCESS, dir.display())
    } else {
        format!("{} Nothing to clean", status::SUCCESS)
    };

    let report = CleanReport {
        dir: dir.display().to_string(),
        removed,
    };
    ctx.output.emit(&report, &[message])
}
