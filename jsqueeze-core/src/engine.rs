// jsqueeze-core/src/engine.rs
//! Defines the core `MinificationEngine` trait.
//!
//! The pipeline only talks to this trait, so the real transducer and the
//! pass-through engine used for dry runs are interchangeable.
//!
//! License: MIT OR APACHE 2.0

use jsqueeze_lexer::MinifyOptions;

use crate::config::MinifyConfig;
use crate::engines::passthrough_engine::PassthroughEngine;
use crate::engines::transducer_engine::TransducerEngine;
use crate::errors::JsqueezeError;

/// A trait that defines the core functionality of a minification engine.
pub trait MinificationEngine: Send + Sync {
    /// Produces the minified form of `source`, or fails without partial output.
    /// Works on raw bytes; the source need not be UTF-8.
    fn minify(&self, source: &[u8]) -> Result<Vec<u8>, JsqueezeError>;

    /// Short identifier used in logs and the size summary.
    fn name(&self) -> &'static str;

    /// Transducer options the output depends on; folded into cache keys.
    fn options(&self) -> &MinifyOptions;

    /// Whether the output of this engine is worth persisting. Engines that
    /// return their input unchanged answer `false`.
    fn caches_output(&self) -> bool {
        true
    }
}

/// Selects which engine to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineType {
    Transducer,
    Passthrough,
}

impl EngineType {
    /// Dry runs get the pass-through engine, everything else the transducer.
    pub fn for_config(config: &MinifyConfig) -> Self {
        if config.dry_run() {
            EngineType::Passthrough
        } else {
            EngineType::Transducer
        }
    }
}

/// Instantiates the selected engine behind the trait.
pub fn build_engine(engine_type: EngineType, options: MinifyOptions) -> Box<dyn MinificationEngine> {
    match engine_type {
        EngineType::Transducer => Box::new(TransducerEngine::with_options(options)),
        EngineType::Passthrough => Box::new(PassthroughEngine::new()),
    }
}
