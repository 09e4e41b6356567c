//! Random sparkle patterns driven by a xorshift generator.

use super::Mode;
use crate::mask::{Bitmask, LightCount};
use crate::math::XorShift32;

/// One randomly chosen light per tick
#[derive(Debug, Clone)]
pub struct RandomSingleMode {
    rng: XorShift32,
}

impl RandomSingleMode {
    pub const fn new(seed: u32) -> Self {
        Self {
            rng: XorShift32::new(seed),
        }
    }
}

impl Mode for RandomSingleMode {
    fn tick(&mut self, _tick: u32, lights: LightCount) -> Bitmask {
        let position = self.rng.below(u32::from(lights.get()));
        lights.single(position)
    }
}

/// Random on/off state for every light, every tick
#[derive(Debug, Clone)]
pub struct RandomMultiMode {
    rng: XorShift32,
}

impl RandomMultiMode {
    pub const fn new(seed: u32) -> Self {
        Self {
            rng: XorShift32::new(seed),
        }
    }
}

impl Mode for RandomMultiMode {
    fn tick(&mut self, _tick: u32, lights: LightCount) -> Bitmask {
        lights.clip(self.rng.next_u32())
    }
}
