// jsqueeze/src/commands/cache.rs
//! `jsqueeze cache path|list|clear`.

use anyhow::{Context, Result, anyhow};
use is_terminal::IsTerminal;
use jsqueeze_core::CacheStore;
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::{CacheCommand, CacheLocation};
use crate::commands::load_config;
use crate::ui::output_format::{info_msg, success_msg};
use crate::ui::size_summary::print_cache_listing;

/// `--cache-dir`, then the configured location.
pub fn resolve_cache_dir(location: &CacheLocation) -> Result<PathBuf> {
    if let Some(dir) = &location.cache_dir {
        return Ok(dir.clone());
    }
    load_config(location.config.as_deref())?
        .cache_dir()
        .ok_or_else(|| anyhow!("No cache directory is available on this platform; pass --cache-dir."))
}

/// Reads a yes/no answer. Anything but `y` or `yes` declines.
pub fn confirm<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> Result<bool> {
    write!(writer, "{} [y/N] ", question)?;
    writer.flush()?;
    let mut answer = String::new();
    reader.read_line(&mut answer).context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

pub fn run_cache_command(cmd: &CacheCommand, quiet: bool) -> Result<()> {
    match cmd {
        CacheCommand::Path(location) => {
            let dir = resolve_cache_dir(location)?;
            println!("{}", dir.display());
        }
        CacheCommand::List(location) => {
            let store = CacheStore::open(resolve_cache_dir(location)?)?;
            let entries = store.entries()?;
            debug!("Found {} cache entries in {}", entries.len(), store.root().display());
            if entries.is_empty() {
                info_msg(format!("Cache at {} is empty.", store.root().display()), quiet);
                return Ok(());
            }
            let mut stdout = io::stdout().lock();
            let color = stdout.is_terminal();
            print_cache_listing(&mut stdout, &entries, color)?;
        }
        CacheCommand::Clear { location, yes } => {
            let store = CacheStore::open(resolve_cache_dir(location)?)?;
            if !*yes {
                let question = format!("Remove every cached output under {}?", store.root().display());
                if !confirm(&mut io::stdin().lock(), &mut io::stderr(), &question)? {
                    info_msg("Cache left untouched.", quiet);
                    return Ok(());
                }
            }
            let removed = store.clear()?;
            success_msg(format!("Removed {} cached output(s).", removed), quiet);
        }
    }
    Ok(())
}
