//! CLI implementation for `sharpbuild args` command

use anyhow::Result;

use super::{CommandContext, RequestArgs};
use crate::core::invocation::msbuild_args;

/// Execute the args command
///
/// Prints one argument per line so the output survives paths with spaces.
pub fn execute(ctx: &CommandContext, request: &RequestArgs) -> Result<()> {
    let info = request.to_build_info(&ctx.config)?;
    let args = msbuild_args(&info);
    ctx.output.emit(&args, &args)
}
