// jsqueeze/src/commands/mod.rs
//! Command implementations and the top-level dispatcher.

pub mod cache;
pub mod minify;

use anyhow::{Context, Result};
use jsqueeze_core::{merge_config, JsqueezeError, MinifyConfig};
use std::path::Path;

use crate::cli::{Cli, Commands};

/// Exit status for input the transducer rejected.
pub const EXIT_MALFORMED_SOURCE: i32 = 2;
/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Runs the parsed command line.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Minify(cmd) => minify::run_minify_command(cmd, cli.quiet),
        Commands::Cache(cmd) => cache::run_cache_command(cmd, cli.quiet),
    }
}

/// Malformed JavaScript gets its own exit status so scripts can tell it
/// apart from I/O or configuration trouble.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<JsqueezeError>() {
        Some(JsqueezeError::Minify(_)) => EXIT_MALFORMED_SOURCE,
        _ => EXIT_FAILURE,
    }
}

/// Embedded defaults, with the file at `path` merged over them.
pub fn load_config(path: Option<&Path>) -> Result<MinifyConfig> {
    let defaults = MinifyConfig::load_default().context("Failed to load default configuration")?;
    let user = path.map(MinifyConfig::load_from_file).transpose()?;
    Ok(merge_config(defaults, user))
}
