// jsqueeze-core/src/cache/store.rs
//! On-disk store for minified output.
//!
//! Layout under the root: `<shard>/<key>.js` holds the minified text and
//! `<shard>/<key>.json` its metadata, where `<shard>` is the first two hex
//! characters of the key. Files are written to a locked temporary sibling and
//! renamed into place, and read under a shared lock.

use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::cache::key::CacheKey;
use crate::errors::JsqueezeError;

const OUTPUT_EXTENSION: &str = "js";
const META_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = ".tmp";

/// Metadata written next to every cached output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryMeta {
    pub key: CacheKey,
    pub source_len: usize,
    pub minified_len: usize,
    /// RFC3339 timestamp of when the entry was written.
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Opens (creating if needed) the store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, JsqueezeError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            JsqueezeError::Cache(format!("cannot create cache directory {}: {}", root.display(), e))
        })?;
        debug!("Opened cache store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the minified text for `key` lives (whether or not it exists yet).
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root
            .join(key.shard())
            .join(format!("{}.{}", key, OUTPUT_EXTENSION))
    }

    fn meta_path_for(&self, key: &CacheKey) -> PathBuf {
        self.root
            .join(key.shard())
            .join(format!("{}.{}", key, META_EXTENSION))
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.path_for(key).is_file()
    }

    /// Reads the cached output for `key`, if any.
    pub fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>, JsqueezeError> {
        let path = self.path_for(key);
        if !path.is_file() {
            debug!("Cache miss for {}", key);
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        fs2::FileExt::lock_shared(&file)?;
        let mut bytes = Vec::new();
        let read = file.read_to_end(&mut bytes);
        fs2::FileExt::unlock(&file)?;
        read?;

        debug!("Cache hit for {} ({} bytes)", key, bytes.len());
        Ok(Some(bytes))
    }

    /// Persists `minified` under `key` and returns the output path.
    pub fn put(&self, key: &CacheKey, source_len: usize, minified: &[u8]) -> Result<PathBuf, JsqueezeError> {
        let shard_dir = self.root.join(key.shard());
        fs::create_dir_all(&shard_dir)?;

        let path = self.path_for(key);
        write_atomic(&path, minified)?;

        let meta = CacheEntryMeta {
            key: key.clone(),
            source_len,
            minified_len: minified.len(),
            created_at: Utc::now().to_rfc3339(),
        };
        write_atomic(&self.meta_path_for(key), &serde_json::to_vec_pretty(&meta)?)?;

        debug!("Cached {} bytes under {}", minified.len(), path.display());
        Ok(path)
    }

    /// Metadata of every entry, sorted by key. Unreadable metadata is skipped
    /// with a warning.
    pub fn entries(&self) -> Result<Vec<CacheEntryMeta>, JsqueezeError> {
        let mut entries = Vec::new();
        for shard in fs::read_dir(&self.root)? {
            let shard = shard?.path();
            if !shard.is_dir() {
                continue;
            }
            for file in fs::read_dir(&shard)? {
                let path = file?.path();
                if path.extension().and_then(|e| e.to_str()) != Some(META_EXTENSION) {
                    continue;
                }
                match read_meta(&path) {
                    Ok(meta) => entries.push(meta),
                    Err(e) => warn!("Skipping unreadable cache metadata {}: {}", path.display(), e),
                }
            }
        }
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    /// Removes every entry and returns how many outputs were deleted.
    pub fn clear(&self) -> Result<usize, JsqueezeError> {
        let mut removed = 0;
        for shard in fs::read_dir(&self.root)? {
            let shard = shard?.path();
            let is_shard = shard
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| n.len() == 2 && n.bytes().all(|b| b.is_ascii_hexdigit()));
            if !shard.is_dir() || !is_shard {
                continue;
            }
            removed += fs::read_dir(&shard)?
                .filter_map(|f| f.ok())
                .filter(|f| f.path().extension().and_then(|e| e.to_str()) == Some(OUTPUT_EXTENSION))
                .count();
            fs::remove_dir_all(&shard)?;
        }
        info!("Cleared {} cached outputs from {}", removed, self.root.display());
        Ok(removed)
    }
}

fn read_meta(path: &Path) -> Result<CacheEntryMeta, JsqueezeError> {
    let raw = fs::read(path)?;
    Ok(serde_json::from_slice(&raw)?)
}

/// Writes through a locked temporary sibling, then renames over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), JsqueezeError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| JsqueezeError::Cache(format!("invalid cache path {}", path.display())))?;
    let tmp_path = path.with_file_name(format!("{}.{}{}", file_name, std::process::id(), TMP_SUFFIX));
    {
        let mut tmp = OpenOptions::new().create(true).write(true).truncate(true).open(&tmp_path)?;
        fs2::FileExt::lock_exclusive(&tmp)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        fs2::FileExt::unlock(&tmp)?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_put_then_get() {
        let dir = tempdir().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        let key = CacheKey::from_source("var a = 1;");

        assert!(!store.contains(&key));
        assert_eq!(store.get(&key).unwrap(), None);

        let path = store.put(&key, 10, b"var a=1;").unwrap();
        assert!(path.ends_with(format!("{}/{}.js", key.shard(), key)));
        assert!(store.contains(&key));
        assert_eq!(store.get(&key).unwrap().as_deref(), Some(&b"var a=1;"[..]));
    }

    #[test]
    fn test_entries_and_clear() {
        let dir = tempdir().unwrap();
        let store = CacheStore::open(dir.path().join("nested")).unwrap();
        let a = CacheKey::from_source("a");
        let b = CacheKey::from_source("b");
        store.put(&a, 1, b"a").unwrap();
        store.put(&b, 1, b"b").unwrap();

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].key < entries[1].key);
        assert_eq!(entries[0].minified_len, 1);

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.entries().unwrap().is_empty());
        assert!(!store.contains(&a));
    }

    #[test]
    fn test_overwrite_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        let key = CacheKey::from_source("x");
        store.put(&key, 1, b"first").unwrap();
        store.put(&key, 1, b"second").unwrap();
        assert_eq!(store.get(&key).unwrap().as_deref(), Some(&b"second"[..]));

        let leftovers = fs::read_dir(dir.path().join(key.shard()))
            .unwrap()
            .filter_map(|f| f.ok())
            .filter(|f| f.file_name().to_string_lossy().ends_with(TMP_SUFFIX))
            .count();
        assert_eq!(leftovers, 0);
    }
}
