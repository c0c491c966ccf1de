//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, Utc};

use ember_core::entities::ConfessionKind;
use ember_service::dto::CreateConfessionRequest;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A text confession expiring after the given time-to-live
pub fn text_confession(ttl: Duration) -> CreateConfessionRequest {
    let suffix = unique_suffix();
    CreateConfessionRequest {
        title: Some(format!("confession {suffix}")),
        content: Some(format!("something I never told anyone #{suffix}")),
        kind: ConfessionKind::Text,
        tags: vec!["test".to_string()],
        burn_after: Utc::now() + ttl,
    }
}

/// A confession that lives long enough for any test to finish
pub fn long_lived_confession() -> CreateConfessionRequest {
    text_confession(Duration::hours(1))
}
