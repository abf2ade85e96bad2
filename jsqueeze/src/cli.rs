// jsqueeze/src/cli.rs
//! Command-line interface definition for `jsqueeze`: the global logging
//! switches plus the `minify` and `cache` subcommands.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "jsqueeze",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip comments and redundant whitespace from JavaScript",
    long_about = "jsqueeze is a single-pass JavaScript minifier. It removes comments and collapses whitespace while leaving string, template and regular expression literals untouched, and keeps a line break wherever one could be significant. Results can be cached on disk keyed by the SHA-256 of the source.",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the jsqueeze crates)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minifies an input file or stdin.
    #[command(about = "Minify JavaScript read from a file or stdin.")]
    Minify(MinifyCommand),

    /// Inspects or empties the output cache.
    #[command(subcommand, about = "Inspect or clear the minified output cache.")]
    Cache(CacheCommand),
}

/// Arguments for the `minify` command.
#[derive(Parser, Debug, Default)]
pub struct MinifyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a YAML configuration file merged over the defaults.
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom configuration file (YAML).")]
    pub config: Option<PathBuf>,

    #[arg(long = "dry-run", help = "Pass the input through unchanged and skip the cache.")]
    pub dry_run: bool,

    #[arg(long = "no-cache", help = "Neither read nor write the output cache.")]
    pub no_cache: bool,

    #[arg(long = "cache-dir", value_name = "DIR", help = "Use this directory for the output cache.")]
    pub cache_dir: Option<PathBuf>,

    /// Persist the output and print its cache path instead of the text.
    #[arg(long = "suppress-result", help = "Store the output in the cache and print its path instead of the text.")]
    pub suppress_result: bool,

    #[arg(long = "regex-after-keywords", help = "Treat '/' after keywords such as 'return' or 'typeof' as a regex start.")]
    pub regex_after_keywords: bool,

    #[arg(long = "stats", help = "Print a size summary to stderr.")]
    pub stats: bool,
}

/// Cache location shared by the `cache` subcommands.
#[derive(Args, Debug, Default, Clone)]
pub struct CacheLocation {
    #[arg(long = "cache-dir", value_name = "DIR", help = "Cache directory to operate on.")]
    pub cache_dir: Option<PathBuf>,

    #[arg(long = "config", value_name = "FILE", help = "Read the cache directory from this configuration file.")]
    pub config: Option<PathBuf>,
}

/// Subcommands of `jsqueeze cache`.
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    #[command(about = "Print the cache directory.")]
    Path(CacheLocation),

    #[command(about = "List cached outputs.")]
    List(CacheLocation),

    #[command(about = "Remove every cached output.")]
    Clear {
        #[command(flatten)]
        location: CacheLocation,

        /// Proceed without confirmation.
        #[arg(long, short = 'y', help = "Clear the cache without a confirmation prompt.")]
        yes: bool,
    },
}
