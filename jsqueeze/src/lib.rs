// jsqueeze/src/lib.rs
//! # jsqueeze CLI
//!
//! Terminal front end for `jsqueeze-core`: argument parsing, logging setup,
//! the `minify` and `cache` commands, and coloured stderr reporting.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
