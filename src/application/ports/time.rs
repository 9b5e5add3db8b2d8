// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for publication filters. Posts dated after it stay hidden
/// from every listing.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
