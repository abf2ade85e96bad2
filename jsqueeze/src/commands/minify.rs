// jsqueeze/src/commands/minify.rs
//! The `minify` command: read, run the pipeline, write.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use jsqueeze_core::{MinifyConfig, MinifyOutcome, Pipeline};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::MinifyCommand;
use crate::commands::load_config;
use crate::ui::output_format::{info_msg, success_msg};
use crate::ui::size_summary::print_size_summary;

/// Everything `run_minify` needs once configuration has been settled.
#[derive(Debug, Default)]
pub struct MinifyRunOptions {
    /// Raw source bytes; no encoding is assumed.
    pub input: Vec<u8>,
    pub output_path: Option<PathBuf>,
    pub stats: bool,
    pub quiet: bool,
}

/// Layers the command-line switches over the loaded configuration. Flags
/// only ever switch behaviour on (or the cache off); they never reset a
/// value the config file set.
pub fn apply_overrides(mut config: MinifyConfig, cmd: &MinifyCommand) -> MinifyConfig {
    if cmd.dry_run {
        config.dry_run = Some(true);
    }
    if cmd.no_cache {
        config.cache.enabled = Some(false);
    }
    if let Some(dir) = &cmd.cache_dir {
        config.cache.dir = Some(dir.clone());
    }
    if cmd.suppress_result {
        config.suppress_result = Some(true);
    }
    if cmd.regex_after_keywords {
        config.lexer.regex_after_keywords = Some(true);
    }
    config
}

/// Reads the whole input from `path`, or stdin when there is none. The
/// bytes are taken as-is, so Latin-1 or otherwise non-UTF-8 sources work.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read(path).with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            info!("Reading input from stdin.");
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Runs `pipeline` over the prepared input and delivers the result.
///
/// The minified bytes go to `output_path` or stdout byte for byte, with no
/// trailing newline added. A suppressed result prints the cache path on
/// stdout instead.
pub fn run_minify<W: Write>(pipeline: &Pipeline, opts: &MinifyRunOptions, stdout: &mut W) -> Result<MinifyOutcome> {
    let outcome = pipeline.run(&opts.input)?;
    debug!(
        "Minified {} -> {} bytes with engine '{}'",
        outcome.original_len,
        outcome.minified_len,
        pipeline.engine().name()
    );

    match (&outcome.payload, &opts.output_path) {
        (Some(text), Some(path)) => {
            fs::write(path, text).with_context(|| format!("Failed to write output file {}", path.display()))?;
            success_msg(format!("Minified output written to {}", path.display()), opts.quiet);
        }
        (Some(text), None) => {
            stdout.write_all(text).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
        (None, _) => {
            // Suppression is only accepted with a cache, so the path is always set.
            if let Some(path) = &outcome.cached_path {
                writeln!(stdout, "{}", path.display()).context("Failed to write to stdout")?;
            }
            if opts.output_path.is_some() {
                info_msg("Result suppressed; the output file was not written.", opts.quiet);
            }
        }
    }

    if opts.stats {
        let mut stderr = io::stderr();
        let color = stderr.is_terminal();
        print_size_summary(&mut stderr, &outcome, pipeline.engine().name(), color)
            .context("Failed to print size summary")?;
    }

    Ok(outcome)
}

pub fn run_minify_command(cmd: &MinifyCommand, quiet: bool) -> Result<()> {
    let config = apply_overrides(load_config(cmd.config.as_deref())?, cmd);
    let pipeline = Pipeline::from_config(&config)?;
    if let Some(store) = pipeline.store() {
        debug!("Using cache at {}", store.root().display());
    }

    let opts = MinifyRunOptions {
        input: read_input(cmd.input_file.as_deref())?,
        output_path: cmd.output.clone(),
        stats: cmd.stats,
        quiet,
    };
    let outcome = run_minify(&pipeline, &opts, &mut io::stdout().lock())?;
    if outcome.cache_hit {
        info_msg("Served from cache.", quiet);
    }
    Ok(())
}
