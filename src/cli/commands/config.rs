//! CLI implementation for `sharpbuild config` command

use anyhow::{Context, Result};
use serde::Serialize;

use super::CommandContext;
use crate::cli::output::status;

#[derive(Serialize)]
struct ConfigReport<'a> {
    path: String,
    configuration: &'a str,
    restore: bool,
    properties: &'a [String],
    logs_dir: String,
}

/// Execute the config command
pub fn execute(ctx: &CommandContext, path_only: bool, init: bool) -> Result<()> {
    let config_path = ctx.dirs.global_config_path();

    if path_only {
        let path = config_path.display().to_string();
        return ctx.output.emit(&path, &[path.clone()]);
    }

    if init {
        if config_path.exists() {
            ctx.output.status(
                status::INFO,
                &format!("Config already exists at {}", config_path.display()),
            );
        } else {
            ctx.config
                .save_to_path(&config_path)
                .context("Failed to write global configuration")?;
            ctx.output.status(
                status::SUCCESS,
                &format!("Wrote {}", config_path.display()),
            );
        }
    }

    let report = ConfigReport {
        path: config_path.display().to_string(),
        configuration: ctx.config.configuration(),
        restore: ctx.config.restore(),
        properties: &ctx.config.build.properties,
        logs_dir: ctx.logs_root.display().to_string(),
    };

    let mut lines = vec![
        format!("config file:   {}", report.path),
        format!("configuration: {}", report.configuration),
        format!("restore:       {}", report.restore),
        format!("logs dir:      {}", report.logs_dir),
    ];
    for property in report.properties {
        lines.push(format!("property:      {property}"));
    }

    ctx.output.emit(&report, &lines)
}
