//! Composition-root demo: builds the pipeline in several nesting orders
//! over fake documents with an injected delay.

use anyhow::Result;
use docflow::document::fake::FakeDocument;
use docflow::{CacheConfig, CacheStore, CachedDocument, Document, TimedDocument};
use std::time::Duration;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = CacheStore::from_config(&CacheConfig::from_env())?;

    // Timing only
    let timed = TimedDocument::new(Box::new(
        FakeDocument::new("Sample document content").with_delay(Duration::from_millis(100)),
    ));
    println!("timed: {}", timed.parse()?);

    // Caching only: first call misses, second hits
    let cached = CachedDocument::new(
        Box::new(FakeDocument::new("Content to cache").with_delay(Duration::from_millis(100))),
        "cache-key-1",
        store.clone(),
    );
    cached.parse()?;
    println!("cached, second call: {}", cached.parse()?);

    // Timing over caching: both calls are timed, only the first reaches
    // the document
    let combined = TimedDocument::new(Box::new(CachedDocument::new(
        Box::new(
            FakeDocument::new("Combined decorator content").with_delay(Duration::from_millis(100)),
        ),
        "cache-key-2",
        store.clone(),
    )));
    combined.parse()?;
    println!("combined, second call: {}", combined.parse()?);

    // Deep nesting: cache over timing over cache over timing
    let multi = CachedDocument::new(
        Box::new(TimedDocument::new(Box::new(CachedDocument::new(
            Box::new(TimedDocument::new(Box::new(
                FakeDocument::new("Multi-layer content").with_delay(Duration::from_millis(100)),
            ))),
            "inner-cache",
            store.clone(),
        )))),
        "outer-cache",
        store,
    );
    println!("multi-layer: {}", multi.parse()?);

    Ok(())
}
