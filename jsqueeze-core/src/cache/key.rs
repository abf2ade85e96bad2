// jsqueeze-core/src/cache/key.rs
use jsqueeze_lexer::MinifyOptions;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

// Bumped whenever the transducer's output changes for the same input, so that
// stale entries stop matching.
const CACHE_FORMAT_SALT: &[u8] = b"jsqueeze-cache-v1";

/// Lowercase hex SHA-256 identifying one (source, options) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for `source` under the default transducer options.
    pub fn from_source(source: impl AsRef<[u8]>) -> Self {
        Self::derive(source, &MinifyOptions::default())
    }

    /// Key for `source` minified with `options`. Options occupy a fixed-width
    /// slot ahead of the source, so no source text can mimic another option set.
    pub fn derive(source: impl AsRef<[u8]>, options: &MinifyOptions) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(CACHE_FORMAT_SALT);
        hasher.update([options.regex_after_keywords as u8]);
        hasher.update(source.as_ref());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-character fan-out directory.
    pub fn shard(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
