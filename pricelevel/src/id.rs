//! Order identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A monotonically assigned, process-wide unique order identifier.
///
/// Ids are handed out by [`OrderId::next`] and are never reused. The counter
/// is process-wide rather than scoped to a single [`crate::Order`] or book,
/// matching the source simulator's `Order._id_counter` class attribute: two
/// orders constructed anywhere in the process compare by construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(u64);

impl OrderId {
    /// Allocates the next id in sequence.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Rewinds the global counter back to 1.
    ///
    /// Intended for test harnesses that need a deterministic id sequence,
    /// mirroring the Python test fixtures that reset `Order._id_counter`
    /// between scenarios. Not meant for use outside tests: rewinding while
    /// other live orders exist will eventually mint a duplicate id.
    pub fn reset_for_tests() {
        NEXT_ID.store(1, Ordering::Relaxed);
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
