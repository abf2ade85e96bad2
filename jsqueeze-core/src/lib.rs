// jsqueeze-core/src/lib.rs
//! # jsqueeze Core Library
//!
//! `jsqueeze-core` provides the platform-independent logic around the
//! minification transducer: configuration, pluggable engines, and a
//! content-addressed cache for minified output. It has no notion of files to
//! minify, terminals or argument parsing; that lives in the `jsqueeze` CLI.
//!
//! ## Modules
//!
//! * `config`: `MinifyConfig`, loaded from YAML and merged over embedded defaults.
//! * `engine`: the `MinificationEngine` trait and engine selection.
//! * `engines`: the transducer engine and the pass-through (dry run) engine.
//! * `cache`: SHA-256 cache keys and the on-disk `CacheStore`.
//! * `pipeline`: hash, look up, minify, persist.
//! * `headless`: one-shot minification without a cache, over bytes or strings.
//! * `errors`: the `JsqueezeError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use jsqueeze_core::{headless_minify_string, MinifyConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = MinifyConfig::load_default()?;
//!     let out = headless_minify_string(&config, "var greeting = 'hi';  // say hi\n")?;
//!     assert_eq!(out, "var greeting='hi';");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Engine, cache and pipeline operations return `JsqueezeError`, which keeps
//! the lexer's `MinifyError` reachable through `JsqueezeError::Minify`.
//! Configuration loading returns `anyhow::Result` with file context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod cache;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod pipeline;

/// Re-exports the configuration types.
pub use config::{merge_config, CacheConfig, LexerConfig, MinifyConfig, CACHE_DIR_ENV};

/// Re-exports the custom error type and the lexer failure it wraps.
pub use errors::JsqueezeError;
pub use jsqueeze_lexer::{MinifyError, MinifyOptions};

/// Re-exports the engine trait and its implementations.
pub use engine::{build_engine, EngineType, MinificationEngine};
pub use engines::passthrough_engine::PassthroughEngine;
pub use engines::transducer_engine::TransducerEngine;

pub use cache::{CacheEntryMeta, CacheKey, CacheStore};
pub use pipeline::{MinifyOutcome, Pipeline};
pub use headless::{headless_minify_bytes, headless_minify_string};
