//! CLI implementation for `sharpbuild logs` command
//!
//! Prints the log directory and log files of a build request. With
//! `--create`, also creates the directory the way an orchestrator would
//! right before launching the toolchain.

use anyhow::{Context, Result};
use serde::Serialize;

use super::{CommandContext, RequestArgs};
use crate::cli::output::status;
use crate::infra::filesystem;

#[derive(Serialize)]
struct LogsReport {
    dir: String,
    log_file: String,
    issues_file: String,
    exists: bool,
}

/// Execute the logs command
pub fn execute(ctx: &CommandContext, request: &RequestArgs, create: bool) -> Result<()> {
    let info = request.to_build_info(&ctx.config)?;
    let paths = ctx.log_paths(&info)?;

    if create {
        filesystem::create_dir_all(paths.dir())
            .with_context(|| format!("Failed to prepare logs for {info}"))?;
        ctx.output.status(
            status::SUCCESS,
            &format!("Created {}", paths.dir().display()),
        );
    }

    let report = LogsReport {
        dir: paths.dir().display().to_string(),
        log_file: paths.log_file().display().to_string(),
        issues_file: paths.issues_file().display().to_string(),
        exists: paths.dir().is_dir(),
    };

    let lines = if ctx.output.verbose > 0 {
        vec![
            report.dir.clone(),
            format!("  log:    {}", report.log_file),
            format!("  issues: {}", report.issues_file),
        ]
    } else {
        vec![report.dir.clone()]
    };

    ctx.output.emit(&report, &lines)
}
