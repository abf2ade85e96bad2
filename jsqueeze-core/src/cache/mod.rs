//! Content-addressed storage for minified output.
//!
//! * `key`: derives the SHA-256 cache key from raw source text.
//! * `store`: the on-disk store, with locked atomic writes.

pub mod key;
pub mod store;

pub use key::CacheKey;
pub use store::{CacheEntryMeta, CacheStore};
