// jsqueeze-core/src/headless.rs

//! `headless.rs`
//! One-shot, cache-free minification for callers that just want a string
//! back (build scripts, tests, embedding).

use crate::config::MinifyConfig;
use crate::engine::{build_engine, EngineType};
use crate::errors::JsqueezeError;

/// Minifies `content` with the engine and lexer options `config` selects.
/// The cache section of `config` is ignored.
pub fn headless_minify_bytes(config: &MinifyConfig, content: &[u8]) -> Result<Vec<u8>, JsqueezeError> {
    let engine = build_engine(EngineType::for_config(config), config.lexer_options());
    engine.minify(content)
}

/// String form of `headless_minify_bytes`. UTF-8 in gives UTF-8 out, since
/// only ASCII bytes are ever dropped or inserted.
pub fn headless_minify_string(config: &MinifyConfig, content: &str) -> Result<String, JsqueezeError> {
    let bytes = headless_minify_bytes(config, content.as_bytes())?;
    String::from_utf8(bytes).map_err(|e| JsqueezeError::AnyhowWrapper(e.into()))
}
