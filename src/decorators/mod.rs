//! Stackable behavioral layers over the document capability.
//!
//! Each decorator owns exactly one inner capability and implements
//! [`Document`] itself, so arbitrary nesting orders compose at runtime.
//! Decorators only observe or wrap the inner output; they never mutate
//! the inner capability or alter failure identity.

mod cached;
mod timed;

pub use cached::CachedDocument;
pub use timed::TimedDocument;

use crate::document::Document;
use crate::errors::DocumentError;

/// Pure delegation: forwards `parse` to the inner capability and returns
/// its result unchanged, propagating any failure unmodified.
pub struct Passthrough {
    inner: Box<dyn Document>,
}

impl Passthrough {
    pub fn new(inner: Box<dyn Document>) -> Self {
        Self { inner }
    }
}

impl Document for Passthrough {
    fn parse(&self) -> Result<String, DocumentError> {
        self.inner.parse()
    }
}
