use crate::document::Document;
use crate::errors::DocumentError;
use std::time::Instant;

/// Measures wall-clock duration of the call chain from this layer inward.
///
/// The duration event fires on every exit path, including inner failure.
/// The result or error itself passes through unchanged.
pub struct TimedDocument {
    inner: Box<dyn Document>,
}

impl TimedDocument {
    pub fn new(inner: Box<dyn Document>) -> Self {
        Self { inner }
    }
}

impl Document for TimedDocument {
    fn parse(&self) -> Result<String, DocumentError> {
        let start = Instant::now();
        let result = self.inner.parse();
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(duration_ms, "parse duration"),
            Err(e) => tracing::info!(duration_ms, error = %e, "parse duration"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fake::{FailingDocument, FakeDocument};
    use crate::errors::ExtractionError;
    use std::sync::atomic::Ordering;

    #[test]
    fn timed_preserves_content() {
        let doc = TimedDocument::new(Box::new(FakeDocument::new("Timed content")));
        assert_eq!(doc.parse().unwrap(), "Timed content");
    }

    #[test]
    fn timed_propagates_failure_and_calls_inner_once() {
        let inner = FailingDocument::new("vision api unavailable");
        let calls = inner.call_counter();
        let doc = TimedDocument::new(Box::new(inner));

        let err = doc.parse().unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Extraction(ExtractionError::SourceUnreachable(_))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
