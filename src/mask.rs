//! Light masks: one bit per light, bit `i` drives light `i`.

/// Output word written to the light array
pub type Bitmask = u32;

/// Widest supported light row
#[allow(clippy::cast_possible_truncation)]
pub const MAX_LIGHTS: u8 = Bitmask::BITS as u8;

/// Number of lights in the row, always within `1..=MAX_LIGHTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCount(u8);

impl LightCount {
    /// Create a light count, clamping into the supported range
    pub const fn new(count: u8) -> Self {
        if count == 0 {
            Self(1)
        } else if count > MAX_LIGHTS {
            Self(MAX_LIGHTS)
        } else {
            Self(count)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Mask with every light on
    pub const fn full_mask(self) -> Bitmask {
        if self.0 >= MAX_LIGHTS {
            Bitmask::MAX
        } else {
            (1 << self.0) - 1
        }
    }

    /// Mask with only light `index` on (wrapped into the row)
    #[allow(clippy::cast_lossless)]
    pub const fn single(self, index: u32) -> Bitmask {
        1 << (index % self.0 as u32)
    }

    /// Shift that centers an item `height` lights tall within the row
    pub const fn center_shift(self, height: u8) -> u8 {
        self.0.saturating_sub(height) / 2
    }

    /// Drop bits beyond the end of the row
    pub const fn clip(self, mask: Bitmask) -> Bitmask {
        mask & self.full_mask()
    }
}

impl Default for LightCount {
    fn default() -> Self {
        Self::new(crate::config::LIGHT_COUNT)
    }
}
