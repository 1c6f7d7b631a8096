use crate::document::Document;
use crate::errors::DocumentError;
use crate::storage::CacheStore;

/// Memoizes the inner chain's output under one fixed, caller-chosen key.
///
/// A hit short-circuits the wrapped chain entirely: no inner side effects
/// (timing events, nested caches) occur. Inner failures propagate and are
/// never cached. Concurrent misses for the same key may each run the
/// inner parse and both write; last write wins.
///
/// The key is opaque to the store. Callers are expected to pick keys such
/// that identical keys imply identical expected output; no content
/// hashing or validation is performed.
pub struct CachedDocument {
    inner: Box<dyn Document>,
    key: String,
    store: CacheStore,
}

impl CachedDocument {
    pub fn new(inner: Box<dyn Document>, key: impl Into<String>, store: CacheStore) -> Self {
        Self {
            inner,
            key: key.into(),
            store,
        }
    }
}

impl Document for CachedDocument {
    fn parse(&self) -> Result<String, DocumentError> {
        if let Some(text) = self.store.get(&self.key)? {
            tracing::info!(key = %self.key, "cache hit");
            return Ok(text);
        }

        tracing::info!(key = %self.key, "cache miss");
        let text = self.inner.parse()?;
        self.store.put(&self.key, &text)?;
        Ok(text)
    }
}
