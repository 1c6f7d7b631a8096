//! Deterministic document doubles for tests and demos.

use super::Document;
use crate::errors::{DocumentError, ExtractionError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Returns fixed content, optionally after an injected delay.
///
/// The call counter is shared: clone a handle with [`call_counter`]
/// before boxing the document into a chain.
///
/// [`call_counter`]: FakeDocument::call_counter
#[derive(Debug)]
pub struct FakeDocument {
    content: String,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl FakeDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Handle to the number of times `parse` has been invoked.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Document for FakeDocument {
    fn parse(&self) -> Result<String, DocumentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        Ok(self.content.clone())
    }
}

/// Always fails with [`ExtractionError::SourceUnreachable`].
#[derive(Debug)]
pub struct FailingDocument {
    message: String,
    calls: Arc<AtomicUsize>,
}

impl FailingDocument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Document for FailingDocument {
    fn parse(&self) -> Result<String, DocumentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ExtractionError::SourceUnreachable(self.message.clone()).into())
    }
}
