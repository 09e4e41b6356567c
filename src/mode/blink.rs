use super::Mode;
use crate::mask::{Bitmask, LightCount};

/// Blink mode - all lights on for even ticks, off for odd ones
#[derive(Debug, Clone, Copy, Default)]
pub struct BlinkMode;

impl Mode for BlinkMode {
    fn tick(&mut self, tick: u32, lights: LightCount) -> Bitmask {
        if tick.is_multiple_of(2) {
            lights.full_mask()
        } else {
            0
        }
    }
}
