//! Constant output: every light off, or every light on.

use super::Mode;
use crate::mask::{Bitmask, LightCount};

/// Solid mode - the same mask on every tick
#[derive(Debug, Clone, Copy)]
pub struct SolidMode {
    lit: bool,
}

impl SolidMode {
    pub const fn off() -> Self {
        Self { lit: false }
    }

    pub const fn on() -> Self {
        Self { lit: true }
    }
}

impl Mode for SolidMode {
    fn tick(&mut self, _tick: u32, lights: LightCount) -> Bitmask {
        if self.lit { lights.full_mask() } else { 0 }
    }
}
