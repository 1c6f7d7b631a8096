use std::path::PathBuf;
use thiserror::Error;

/// Raised by the innermost document capability when the underlying source
/// cannot be read. Decorators never catch, translate, or cache it.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("source unreachable: {0}")]
    SourceUnreachable(String),

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("extraction timed out after {0} ms")]
    Timeout(u64),
}

/// Raised by the cache store on I/O failure. Fatal: the store never
/// silently degrades to a no-op cache.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open cache database at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("cache database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// What `Document::parse` returns. Both variants are transparent so
/// decorators propagate failures without altering their identity.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
