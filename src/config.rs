//! Build-time constants and the controller configuration built from them.

use embassy_time::Duration;

use crate::font::{BUILTIN_FONT, Font};
use crate::mask::LightCount;
use crate::mode::ModeId;

/// Number of lights in the row
pub const LIGHT_COUNT: u8 = 8;

/// Minimum time between accepted level changes of one button
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(5);

/// Hold time after which a pressed button starts repeating
pub const REPEAT_WINDOW: Duration = Duration::from_millis(200);

/// Velocity bound in percent, applied symmetrically
pub const VELOCITY_LIMIT: i16 = 100;

/// Velocity change per Slower/Faster event
pub const VELOCITY_STEP: i16 = 1;

/// Longest hold time before blanking, in milliseconds
pub const MAX_HOLD_TIME_MS: u16 = 100;

/// Hold time change per Slower/Faster event while Mode is held
pub const HOLD_TIME_STEP_MS: u16 = 1;

/// Repeat count of a held Mode button that advances to the next mode
pub const MODE_ADVANCE_REPEAT: u16 = 3;

/// Height of a font glyph in lights
pub const FONT_GLYPH_HEIGHT: u8 = 8;

/// Blank columns appended after every glyph
pub const INTER_CHAR_SPACING: u8 = 1;

/// Capacity of the scroll text buffer in characters
pub const SCROLL_TEXT_CAPACITY: usize = 100;

/// Text shown by the scroll mode after startup
pub const DEFAULT_SCROLL_TEXT: &str = "HELLO WORLD";

/// Mode selected after startup
pub const DEFAULT_MODE: ModeId = ModeId::Scroll;

/// Seed of the pattern random generator
pub const DEFAULT_RANDOM_SEED: u32 = 0x2545_f491;

/// Debounce and repeat timing of the button inputs
#[derive(Debug, Clone, Copy)]
pub struct InputTimings {
    /// Minimum time between accepted transitions
    pub debounce: Duration,
    /// Time between repeat events while a button is held
    pub repeat: Duration,
}

impl Default for InputTimings {
    fn default() -> Self {
        Self {
            debounce: DEBOUNCE_WINDOW,
            repeat: REPEAT_WINDOW,
        }
    }
}

/// Configuration for the controller
#[derive(Clone, Copy)]
pub struct ControllerConfig {
    pub lights: LightCount,
    pub timings: InputTimings,
    pub mode: ModeId,
    pub scroll_text: &'static str,
    pub font: &'static dyn Font,
    pub random_seed: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            lights: LightCount::new(LIGHT_COUNT),
            timings: InputTimings::default(),
            mode: DEFAULT_MODE,
            scroll_text: DEFAULT_SCROLL_TEXT,
            font: &BUILTIN_FONT,
            random_seed: DEFAULT_RANDOM_SEED,
        }
    }
}
