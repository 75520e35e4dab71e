//! Monotonic millisecond clock abstraction.

use std::time::Instant;

/// Read-only monotonic millisecond counter supplied by the environment.
///
/// Abstracting the clock keeps the state machines testable: tests hand
/// explicit timestamps to [`crate::Mount::tick`] and friends instead of
/// sleeping.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;
}

/// Clock backed by [`std::time::Instant`], anchored at construction.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
