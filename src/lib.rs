//! Composable document text-extraction pipeline.
//!
//! A base document capability (`parse` → text) is wrapped by independent,
//! stackable behavioral layers — timing instrumentation and persistent
//! result caching — without modifying the base implementation or each
//! other. Any decorator can wrap, or be wrapped by, any other.
//!
//! The cache is one fixed key/value table in SQLite: no eviction, no TTL,
//! no invalidation. Concurrent misses for the same key may each run the
//! inner parse and both write; last write wins.

pub mod config;
pub mod decorators;
pub mod document;
pub mod errors;
pub mod storage;

pub use config::CacheConfig;
pub use decorators::{CachedDocument, Passthrough, TimedDocument};
pub use document::Document;
pub use errors::{DocumentError, ExtractionError, StoreError};
pub use storage::CacheStore;
