//! Integer helpers shared by the scheduler and the patterns.

/// Scale an interval by a signed percentage
///
/// Computes `base - base * percent / 100` in integer arithmetic, truncating
/// toward zero. Positive percentages shorten the interval, negative ones
/// lengthen it, +100 reaches zero.
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale_interval(base_ms: u32, percent: i16) -> u32 {
    let base = base_ms as i64;
    let scaled = base - base * percent as i64 / 100;
    if scaled < 0 {
        0
    } else if scaled > u32::MAX as i64 {
        u32::MAX
    } else {
        scaled as u32
    }
}

/// Xorshift32 pseudo-random generator
///
/// Small and allocation free; quality is plenty for picking lights.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator; a zero seed is replaced since it would stall
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9 } else { seed },
        }
    }

    pub const fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Value in `0..bound`, `bound` must not be zero
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn below(&mut self, bound: u32) -> u32 {
        // Multiply-shift keeps the high bits, which are the better ones.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}
