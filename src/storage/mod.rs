//! Persistent key/value cache backed by SQLite.

pub mod schema;
pub mod store;

pub use store::CacheStore;

pub(crate) fn now_epoch_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}
