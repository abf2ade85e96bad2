// jsqueeze-core/src/engines/passthrough_engine.rs
//! The dry-run engine: returns its input untouched.

use jsqueeze_lexer::MinifyOptions;
use log::debug;

use crate::engine::MinificationEngine;
use crate::errors::JsqueezeError;

#[derive(Debug, Default, Clone)]
pub struct PassthroughEngine {
    options: MinifyOptions,
}

impl PassthroughEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MinificationEngine for PassthroughEngine {
    fn minify(&self, source: &[u8]) -> Result<Vec<u8>, JsqueezeError> {
        debug!("Dry run: returning {} bytes unchanged.", source.len());
        Ok(source.to_vec())
    }

    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn options(&self) -> &MinifyOptions {
        &self.options
    }

    fn caches_output(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_returns_input_even_when_malformed() {
        let engine = PassthroughEngine::new();
        assert_eq!(engine.minify(b"/* open  ").unwrap(), b"/* open  ");
        assert!(!engine.caches_output());
    }
}
