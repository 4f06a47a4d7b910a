use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::id::RecordId;
use crate::domain::ports::IdGenerator;

/// Random 32-character hex ids.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Monotonic numeric ids, handy for local runs and tests.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl SequentialIdGenerator {
    /// Starts past the largest numeric id among `taken`, so generated ids
    /// never collide with preloaded ones. Non-numeric ids are ignored.
    pub fn after<'a>(taken: impl IntoIterator<Item = &'a RecordId>) -> Self {
        let max = taken
            .into_iter()
            .filter_map(|id| id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(max.saturating_add(1))
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}
