//! CLI implementation for `sharpbuild key` command
//!
//! Shows the (solution, configuration) key a build request is deduplicated on.

use anyhow::Result;
use serde::Serialize;

use super::{CommandContext, RequestArgs};
use crate::core::logs::{log_dir_name, solution_digest};

#[derive(Serialize)]
struct KeyReport<'a> {
    solution: &'a str,
    configuration: &'a str,
    digest: String,
    log_dir_name: String,
}

/// Execute the key command
pub fn execute(ctx: &CommandContext, request: &RequestArgs) -> Result<()> {
    let info = request.to_build_info(&ctx.config)?;

    let report = KeyReport {
        solution: info.solution(),
        configuration: info.configuration(),
        digest: solution_digest(info.solution()),
        log_dir_name: log_dir_name(info.solution(), info.configuration()),
    };

    ctx.output.emit(
        &report,
        &[
            format!("key:    {}", info.key()),
            format!("digest: {}", report.digest),
            format!("logs:   {}", report.log_dir_name),
        ],
    )
}
