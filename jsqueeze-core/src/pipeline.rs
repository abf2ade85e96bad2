// jsqueeze-core/src/pipeline.rs
//! Hash, look up, minify, persist.
//!
//! `Pipeline` wraps a `MinificationEngine` with the optional output cache:
//! the key comes from the raw source, a hit skips the engine entirely, and a
//! miss runs the engine and stores its output. Engine failures abort the run
//! before anything is written.

use log::{debug, info};
use std::path::PathBuf;

use crate::cache::{CacheKey, CacheStore};
use crate::config::MinifyConfig;
use crate::engine::{build_engine, EngineType, MinificationEngine};
use crate::errors::JsqueezeError;

/// What one pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyOutcome {
    pub key: CacheKey,
    /// The output bytes, or `None` when the result was suppressed and must be
    /// read back from `cached_path`.
    pub payload: Option<Vec<u8>>,
    pub cache_hit: bool,
    /// Location of the persisted output, when a cache is attached.
    pub cached_path: Option<PathBuf>,
    pub original_len: usize,
    pub minified_len: usize,
}

pub struct Pipeline {
    engine: Box<dyn MinificationEngine>,
    store: Option<CacheStore>,
    suppress_result: bool,
}

impl Pipeline {
    /// A pipeline without a cache.
    pub fn new(engine: Box<dyn MinificationEngine>) -> Self {
        Self {
            engine,
            store: None,
            suppress_result: false,
        }
    }

    pub fn with_store(mut self, store: CacheStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Return no payload after persisting. Ignored without a store.
    pub fn suppress_result(mut self, suppress: bool) -> Self {
        self.suppress_result = suppress;
        self
    }

    /// Builds the engine and (unless disabled or dry-running) the store that
    /// `config` describes.
    pub fn from_config(config: &MinifyConfig) -> Result<Self, JsqueezeError> {
        config
            .validate()
            .map_err(|e| JsqueezeError::Config(e.to_string()))?;

        let engine_type = EngineType::for_config(config);
        let pipeline = Pipeline::new(build_engine(engine_type, config.lexer_options()))
            .suppress_result(config.suppress_result());

        if engine_type == EngineType::Passthrough || !config.cache_enabled() {
            return Ok(pipeline);
        }
        let dir = config
            .cache_dir()
            .ok_or_else(|| JsqueezeError::Cache("no cache directory available on this platform".to_string()))?;
        Ok(pipeline.with_store(CacheStore::open(dir)?))
    }

    pub fn engine(&self) -> &dyn MinificationEngine {
        self.engine.as_ref()
    }

    pub fn store(&self) -> Option<&CacheStore> {
        self.store.as_ref()
    }

    pub fn run(&self, source: &[u8]) -> Result<MinifyOutcome, JsqueezeError> {
        let key = CacheKey::derive(source, self.engine.options());
        let store = self.store.as_ref().filter(|_| self.engine.caches_output());

        let Some(store) = store else {
            let text = self.engine.minify(source)?;
            return Ok(MinifyOutcome {
                key,
                minified_len: text.len(),
                payload: Some(text),
                cache_hit: false,
                cached_path: None,
                original_len: source.len(),
            });
        };

        let (text, cache_hit) = match store.get(&key)? {
            Some(text) => (text, true),
            None => {
                let text = self.engine.minify(source)?;
                store.put(&key, source.len(), &text)?;
                info!("Stored minified output for {}", key);
                (text, false)
            }
        };
        debug!(
            "Pipeline run for {}: {} -> {} bytes (cache {})",
            key,
            source.len(),
            text.len(),
            if cache_hit { "hit" } else { "miss" }
        );

        Ok(MinifyOutcome {
            cached_path: Some(store.path_for(&key)),
            minified_len: text.len(),
            payload: if self.suppress_result { None } else { Some(text) },
            key,
            cache_hit,
            original_len: source.len(),
        })
    }
}
