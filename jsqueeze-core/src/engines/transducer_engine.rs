// jsqueeze-core/src/engines/transducer_engine.rs
//! A `MinificationEngine` backed by the single-pass transducer in
//! `jsqueeze-lexer`.
//! License: MIT OR APACHE 2.0

use jsqueeze_lexer::{minify_bytes_with_options, MinifyOptions};
use log::debug;

use crate::engine::MinificationEngine;
use crate::errors::JsqueezeError;

#[derive(Debug, Default, Clone)]
pub struct TransducerEngine {
    options: MinifyOptions,
}

impl TransducerEngine {
    pub fn new() -> Self {
        Self::with_options(MinifyOptions::default())
    }

    pub fn with_options(options: MinifyOptions) -> Self {
        Self { options }
    }
}

impl MinificationEngine for TransducerEngine {
    fn minify(&self, source: &[u8]) -> Result<Vec<u8>, JsqueezeError> {
        let minified = minify_bytes_with_options(source, &self.options)?;
        debug!(
            "Transducer minified {} bytes to {} bytes.",
            source.len(),
            minified.len()
        );
        Ok(minified)
    }

    fn name(&self) -> &'static str {
        "transducer"
    }

    fn options(&self) -> &MinifyOptions {
        &self.options
    }
}
