//! Single moving light
//!
//! - `RampMode`: the light walks from the first to the last position and
//!   jumps back to the first
//! - `PingPongMode`: the light bounces between both ends without lingering
//!   on either of them

use super::Mode;
use crate::mask::{Bitmask, LightCount};

/// Ramp mode - one light stepping forward, wrapping at the end
#[derive(Debug, Clone, Copy, Default)]
pub struct RampMode;

impl Mode for RampMode {
    fn tick(&mut self, tick: u32, lights: LightCount) -> Bitmask {
        lights.single(tick)
    }
}

/// Ping-pong mode - one light sweeping back and forth
///
/// With `n` lights the sweep visits `0..n` and then `n-2..=1`, a period of
/// `2n - 2` ticks, so neither end is shown twice in a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct PingPongMode;

impl Mode for PingPongMode {
    fn tick(&mut self, tick: u32, lights: LightCount) -> Bitmask {
        let count = u32::from(lights.get());
        if count < 2 {
            return lights.single(0);
        }

        let period = 2 * count - 2;
        let phase = tick % period;
        let position = if phase < count { phase } else { period - phase };
        lights.single(position)
    }
}
