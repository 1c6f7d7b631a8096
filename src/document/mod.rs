//! The document capability contract.
//!
//! Implementations are externally supplied (e.g. backed by a remote
//! extraction/vision service); the pipeline only depends on this trait.

pub mod fake;

use crate::errors::DocumentError;

/// The minimal capability of producing extracted text from some source.
///
/// `parse` is a blocking call end-to-end and must be safe to invoke from
/// multiple threads. The contract itself guarantees no side effects;
/// those are introduced only by decorators.
pub trait Document: Send + Sync {
    fn parse(&self) -> Result<String, DocumentError>;
}
