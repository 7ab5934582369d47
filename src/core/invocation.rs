//! Toolchain argument rendering
//!
//! Turns a [`BuildInfo`] into the argument vector passed to `msbuild`
//! (or `dotnet msbuild`). Spawning the process is up to the caller.

use crate::core::build_info::BuildInfo;

/// Render the toolchain arguments for a build request
///
/// Order: solution, targets, configuration, restore, custom properties.
/// Targets and custom properties keep the order they were given in.
pub fn msbuild_args(info: &BuildInfo) -> Vec<String> {
    let mut args = Vec::with_capacity(3 + info.custom_properties().len());

    args.push(info.solution().to_string());

    if !info.targets().is_empty() {
        args.push(format!("-t:{}", info.targets().join(";")));
    }

    args.push(format!("-p:Configuration={}", info.configuration()));

    if info.restore() {
        args.push("-restore".to_string());
    }

    for property in info.custom_properties() {
        args.push(format!("-p:{property}"));
    }

    args
}
