// ID Provider Port (for deterministic testing)

use crate::domain::JobId;
use std::sync::atomic::{AtomicU64, Ordering};

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new unique job ID
    fn generate_id(&self) -> JobId;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> JobId {
        uuid::Uuid::new_v4()
    }
}

/// Counter-backed IDs: `00000000-0000-0000-0000-000000000001`, `...0002`, ...
#[derive(Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl IdProvider for SequentialIdProvider {
    fn generate_id(&self) -> JobId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        uuid::Uuid::from_u128(n as u128)
    }
}
