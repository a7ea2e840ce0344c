// Time Provider Port (for testability)

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock used by the store to stamp `create_time`
pub trait TimeProvider: Send + Sync {
    /// Current time in milliseconds since epoch
    fn now_millis(&self) -> i64;

    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_millis()).unwrap_or_default()
    }
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that advances by a fixed step on every reading.
///
/// Gives strictly increasing creation times in tests without sleeping.
pub struct SteppingTimeProvider {
    next: AtomicI64,
    step_millis: i64,
}

impl SteppingTimeProvider {
    pub fn new(start_millis: i64, step_millis: i64) -> Self {
        Self {
            next: AtomicI64::new(start_millis),
            step_millis,
        }
    }
}

impl TimeProvider for SteppingTimeProvider {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(self.step_millis, Ordering::SeqCst)
    }
}
