//! Pattern modes with compile-time known variants
//!
//! Every mode implements the [`Mode`] trait. The [`ModeTable`] owns one
//! generator per [`ModeId`] and dispatches to it, so no heap is needed and
//! per-mode state (scroll text, random generators) survives mode switches.

mod blink;
mod random;
mod scroll;
mod solid;
mod sweep;

use embassy_time::Duration;

pub use blink::BlinkMode;
pub use random::{RandomMultiMode, RandomSingleMode};
pub use scroll::{ScrollState, ScrollText, ScrollTextMode};
pub use solid::SolidMode;
pub use sweep::{PingPongMode, RampMode};

use crate::config::ControllerConfig;
use crate::mask::{Bitmask, LightCount};

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_ON: &str = "on";
const MODE_NAME_BLINK: &str = "blink";
const MODE_NAME_RAMP: &str = "ramp";
const MODE_NAME_PING_PONG: &str = "ping_pong";
const MODE_NAME_RANDOM_SINGLE: &str = "random_single";
const MODE_NAME_RANDOM_MULTI: &str = "random_multi";
const MODE_NAME_SCROLL: &str = "scroll";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_ON: u8 = 1;
const MODE_ID_BLINK: u8 = 2;
const MODE_ID_RAMP: u8 = 3;
const MODE_ID_PING_PONG: u8 = 4;
const MODE_ID_RANDOM_SINGLE: u8 = 5;
const MODE_ID_RANDOM_MULTI: u8 = 6;
const MODE_ID_SCROLL: u8 = 7;

/// Pattern generator
pub trait Mode {
    /// Produce the mask for tick number `tick` since the last reset
    fn tick(&mut self, tick: u32, lights: LightCount) -> Bitmask;

    /// Restart the pattern
    fn reset(&mut self) {}
}

/// Known modes, in the order the Mode button cycles through them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Off = MODE_ID_OFF,
    On = MODE_ID_ON,
    Blink = MODE_ID_BLINK,
    Ramp = MODE_ID_RAMP,
    PingPong = MODE_ID_PING_PONG,
    RandomSingle = MODE_ID_RANDOM_SINGLE,
    RandomMulti = MODE_ID_RANDOM_MULTI,
    Scroll = MODE_ID_SCROLL,
}

impl ModeId {
    pub const ALL: [Self; 8] = [
        Self::Off,
        Self::On,
        Self::Blink,
        Self::Ramp,
        Self::PingPong,
        Self::RandomSingle,
        Self::RandomMulti,
        Self::Scroll,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_ON => Self::On,
            MODE_ID_BLINK => Self::Blink,
            MODE_ID_RAMP => Self::Ramp,
            MODE_ID_PING_PONG => Self::PingPong,
            MODE_ID_RANDOM_SINGLE => Self::RandomSingle,
            MODE_ID_RANDOM_MULTI => Self::RandomMulti,
            MODE_ID_SCROLL => Self::Scroll,
            _ => return None,
        })
    }

    /// Next mode in cycling order, wrapping after the last one
    pub const fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::COUNT]
    }

    /// Tick interval at zero velocity
    pub const fn base_interval(self) -> Duration {
        let millis = match self {
            Self::Off | Self::On => 1_000,
            Self::Blink => 500,
            Self::Ramp | Self::PingPong => 100,
            Self::RandomSingle => 100,
            Self::RandomMulti => 200,
            Self::Scroll => 120,
        };
        Duration::from_millis(millis)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::On => MODE_NAME_ON,
            Self::Blink => MODE_NAME_BLINK,
            Self::Ramp => MODE_NAME_RAMP,
            Self::PingPong => MODE_NAME_PING_PONG,
            Self::RandomSingle => MODE_NAME_RANDOM_SINGLE,
            Self::RandomMulti => MODE_NAME_RANDOM_MULTI,
            Self::Scroll => MODE_NAME_SCROLL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_ON => Some(Self::On),
            MODE_NAME_BLINK => Some(Self::Blink),
            MODE_NAME_RAMP => Some(Self::Ramp),
            MODE_NAME_PING_PONG => Some(Self::PingPong),
            MODE_NAME_RANDOM_SINGLE => Some(Self::RandomSingle),
            MODE_NAME_RANDOM_MULTI => Some(Self::RandomMulti),
            MODE_NAME_SCROLL => Some(Self::Scroll),
            _ => None,
        }
    }
}

/// One generator per mode
pub struct ModeTable {
    off: SolidMode,
    on: SolidMode,
    blink: BlinkMode,
    ramp: RampMode,
    ping_pong: PingPongMode,
    random_single: RandomSingleMode,
    random_multi: RandomMultiMode,
    scroll: ScrollTextMode,
}

impl ModeTable {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            off: SolidMode::off(),
            on: SolidMode::on(),
            blink: BlinkMode,
            ramp: RampMode,
            ping_pong: PingPongMode,
            random_single: RandomSingleMode::new(config.random_seed),
            random_multi: RandomMultiMode::new(config.random_seed.rotate_left(16)),
            scroll: ScrollTextMode::new(ScrollText::truncated(config.scroll_text), config.font),
        }
    }

    /// Advance the generator of `id`
    pub fn tick(&mut self, id: ModeId, tick: u32, lights: LightCount) -> Bitmask {
        match id {
            ModeId::Off => self.off.tick(tick, lights),
            ModeId::On => self.on.tick(tick, lights),
            ModeId::Blink => self.blink.tick(tick, lights),
            ModeId::Ramp => self.ramp.tick(tick, lights),
            ModeId::PingPong => self.ping_pong.tick(tick, lights),
            ModeId::RandomSingle => self.random_single.tick(tick, lights),
            ModeId::RandomMulti => self.random_multi.tick(tick, lights),
            ModeId::Scroll => self.scroll.tick(tick, lights),
        }
    }

    /// Restart the generator of `id`
    pub fn reset(&mut self, id: ModeId) {
        match id {
            ModeId::Off => Mode::reset(&mut self.off),
            ModeId::On => Mode::reset(&mut self.on),
            ModeId::Blink => Mode::reset(&mut self.blink),
            ModeId::Ramp => Mode::reset(&mut self.ramp),
            ModeId::PingPong => Mode::reset(&mut self.ping_pong),
            ModeId::RandomSingle => Mode::reset(&mut self.random_single),
            ModeId::RandomMulti => Mode::reset(&mut self.random_multi),
            ModeId::Scroll => Mode::reset(&mut self.scroll),
        }
    }

    pub fn scroll(&self) -> &ScrollTextMode {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollTextMode {
        &mut self.scroll
    }
}
