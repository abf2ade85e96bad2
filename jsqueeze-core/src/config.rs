//! Configuration management for `jsqueeze-core`.
//!
//! This module defines the configuration consumed by the minification
//! pipeline. It handles YAML (de)serialization, merging a user file over the
//! embedded defaults, and validating switch combinations.
//!
//! Every field is optional in the file format so that a merge can tell "not
//! set" apart from "set to the default value". Resolved values are read
//! through the accessor methods.
//!
//! License: MIT OR Apache-2.0

use anyhow::{bail, Context, Result};
use jsqueeze_lexer::MinifyOptions;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that relocates the cache when the config leaves
/// `cache.dir` unset.
pub const CACHE_DIR_ENV: &str = "JSQUEEZE_CACHE_DIR";

/// Directory name used under the platform cache directory.
pub const CACHE_DIR_NAME: &str = "jsqueeze";

/// Settings for the content-addressed output cache.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether minified output is looked up and persisted at all.
    pub enabled: Option<bool>,
    /// Cache root. Falls back to `$JSQUEEZE_CACHE_DIR`, then the platform
    /// cache directory.
    pub dir: Option<PathBuf>,
}

/// Settings passed straight through to the transducer.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LexerConfig {
    pub regex_after_keywords: Option<bool>,
}

/// Represents the top-level configuration structure for jsqueeze.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MinifyConfig {
    /// Skip minification and hand back the original text.
    pub dry_run: Option<bool>,
    /// Persist the result but return no payload; needs an enabled cache.
    pub suppress_result: Option<bool>,
    pub cache: CacheConfig,
    pub lexer: LexerConfig,
}

impl MinifyConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: MinifyConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Loads the defaults embedded in the binary.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default.yaml");
        serde_yml::from_str(default_yaml).context("Failed to parse default configuration")
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    pub fn suppress_result(&self) -> bool {
        self.suppress_result.unwrap_or(false)
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.enabled.unwrap_or(true)
    }

    /// Resolves the cache root: explicit `cache.dir`, then `$JSQUEEZE_CACHE_DIR`,
    /// then `<platform cache dir>/jsqueeze`. `None` only when the platform
    /// offers no cache directory at all.
    pub fn cache_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.cache.dir {
            return Some(dir.clone());
        }
        if let Some(dir) = std::env::var_os(CACHE_DIR_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(dir));
        }
        dirs::cache_dir().map(|base| base.join(CACHE_DIR_NAME))
    }

    /// Transducer options derived from the `lexer` section.
    pub fn lexer_options(&self) -> MinifyOptions {
        MinifyOptions {
            regex_after_keywords: self.lexer.regex_after_keywords.unwrap_or(false),
        }
    }

    /// Rejects switch combinations that cannot do anything useful.
    pub fn validate(&self) -> Result<()> {
        if self.suppress_result() && !self.cache_enabled() {
            bail!("`suppress_result` requires the cache to be enabled; the result would be lost.");
        }
        if self.suppress_result() && self.dry_run() {
            bail!("`suppress_result` cannot be combined with `dry_run`; a dry run never writes the cache.");
        }
        Ok(())
    }
}

/// Overlays every value the user config sets on top of the defaults.
pub fn merge_config(default_config: MinifyConfig, user_config: Option<MinifyConfig>) -> MinifyConfig {
    let Some(user) = user_config else {
        debug!("No user configuration provided; using defaults.");
        return default_config;
    };

    debug!("Merging user configuration over defaults.");
    MinifyConfig {
        dry_run: user.dry_run.or(default_config.dry_run),
        suppress_result: user.suppress_result.or(default_config.suppress_result),
        cache: CacheConfig {
            enabled: user.cache.enabled.or(default_config.cache.enabled),
            dir: user.cache.dir.or(default_config.cache.dir),
        },
        lexer: LexerConfig {
            regex_after_keywords: user
                .lexer
                .regex_after_keywords
                .or(default_config.lexer.regex_after_keywords),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = MinifyConfig::load_default().unwrap();
        assert!(!config.dry_run());
        assert!(!config.suppress_result());
        assert!(config.cache_enabled());
        assert_eq!(config.lexer_options(), MinifyOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_prefers_user_values() {
        let defaults = MinifyConfig::load_default().unwrap();
        let user = MinifyConfig {
            dry_run: Some(true),
            lexer: LexerConfig { regex_after_keywords: Some(true) },
            ..Default::default()
        };
        let merged = merge_config(defaults, Some(user));
        assert!(merged.dry_run());
        assert!(merged.lexer_options().regex_after_keywords);
        assert_eq!(merged.cache.enabled, Some(true));
        assert_eq!(merged.suppress_result, Some(false));
    }

    #[test]
    fn test_explicit_cache_dir_wins() {
        let config = MinifyConfig {
            cache: CacheConfig { enabled: None, dir: Some(PathBuf::from("/tmp/jsq")) },
            ..Default::default()
        };
        assert_eq!(config.cache_dir(), Some(PathBuf::from("/tmp/jsq")));
    }

    #[test]
    fn test_suppress_without_cache_is_rejected() {
        let config = MinifyConfig {
            suppress_result: Some(true),
            cache: CacheConfig { enabled: Some(false), dir: None },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_suppress_with_dry_run_is_rejected() {
        let config = MinifyConfig {
            dry_run: Some(true),
            suppress_result: Some(true),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
