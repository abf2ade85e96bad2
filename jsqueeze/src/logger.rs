// jsqueeze/src/logger.rs
//! Logger setup for the CLI. Logs always go to stderr so stdout stays
//! reserved for minified output.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::cli::Cli;

const CRATES: [&str; 3] = ["jsqueeze", "jsqueeze_core", "jsqueeze_lexer"];

/// Initializes `env_logger`. `RUST_LOG` is honoured unless `level` overrides
/// it for the jsqueeze crates. Calling this twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);
    if let Some(level) = level {
        for name in CRATES {
            builder.filter_module(name, level);
        }
    }
    let _ = builder.try_init();
}

/// Maps the global flags to a level override. `--quiet` wins over
/// `--debug`, and `--disable-debug` caps the level at `Info`.
pub fn level_for(cli: &Cli) -> Option<LevelFilter> {
    if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.disable_debug {
        Some(LevelFilter::Info)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("jsqueeze").chain(args.iter().copied()))
    }

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(&parse(&["minify"])), None);
        assert_eq!(level_for(&parse(&["-d", "minify"])), Some(LevelFilter::Debug));
        assert_eq!(level_for(&parse(&["minify", "-q", "-d"])), Some(LevelFilter::Off));
        assert_eq!(
            level_for(&parse(&["--debug", "--disable-debug", "cache", "path"])),
            Some(LevelFilter::Info)
        );
    }
}
