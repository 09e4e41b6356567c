//! Millisecond timestamps with wraparound-safe arithmetic.
//!
//! The hardware counter behind [`Clock`] is allowed to wrap. Every elapsed
//! time in the crate is computed with [`Timestamp::elapsed_since`], which
//! subtracts modulo 2^32, so a wrap between two readings still yields the
//! real (small) distance between them.

use embassy_time::{Duration, Instant};

/// Monotonic millisecond counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp(u32);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`
    pub const fn millis_since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Time elapsed from `earlier` to `self`
    #[allow(clippy::cast_lossless)]
    pub const fn elapsed_since(self, earlier: Self) -> Duration {
        Duration::from_millis(self.millis_since(earlier) as u64)
    }

    /// Advance the timestamp, wrapping at the counter bound
    #[must_use]
    pub const fn wrapping_add_millis(self, millis: u32) -> Self {
        Self(self.0.wrapping_add(millis))
    }
}

impl From<Instant> for Timestamp {
    #[allow(clippy::cast_possible_truncation)]
    fn from(instant: Instant) -> Self {
        // Keep the low 32 bits; the wrap is handled by `elapsed_since`.
        Self(instant.as_millis() as u32)
    }
}

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Timestamp {
        Instant::now().into()
    }
}
