use std::env;
use std::path::PathBuf;

/// Environment variable overriding where the file-backed cache lives.
pub const CACHE_PATH_ENV: &str = "DOCFLOW_CACHE_PATH";

const DEFAULT_CACHE_PATH: &str = "document_cache.db";

/// Location of the file-backed cache. Fixed at startup; not
/// reconfigurable after a store handle has been built from it.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub path: PathBuf,
}

impl CacheConfig {
    /// Read the cache path from `DOCFLOW_CACHE_PATH`, falling back to
    /// `document_cache.db` in the working directory.
    pub fn from_env() -> Self {
        let path = env::var(CACHE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_PATH));
        Self { path }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CACHE_PATH),
        }
    }
}
