//! Mode scheduling and timing.
//!
//! Advances the active pattern at its base interval scaled by the velocity,
//! and blanks the output once the hold time has passed since the last tick.
//! The caller decides how often to call [`ModeScheduler::advance`]; missed
//! ticks are caught up on the next call, so the pattern keeps a constant
//! virtual rate regardless of loop jitter.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Timestamp;
use crate::config::ControllerConfig;
use crate::mask::{Bitmask, LightCount};
use crate::math::scale_interval;
use crate::mode::{ModeId, ModeTable};
use crate::navigation::ControlState;
use crate::output::LightArray;

/// Shortest tick interval, keeps velocity +100 from stalling the catch-up loop
pub const MIN_INTERVAL_MS: u32 = 1;

/// Scheduler bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerState {
    pub active_mode: ModeId,
    /// Ticks since the active mode was last reset
    pub tick_index: u32,
    pub last_tick: Timestamp,
}

/// Drives the active mode and writes its output
pub struct ModeScheduler<O: LightArray> {
    output: O,
    modes: ModeTable,
    lights: LightCount,
    state: SchedulerState,
    blanked: bool,
}

impl<O: LightArray> ModeScheduler<O> {
    /// Create a scheduler and show the first tick of the configured mode
    pub fn new(output: O, config: &ControllerConfig, now: Timestamp) -> Self {
        let mut scheduler = Self {
            output,
            modes: ModeTable::new(config),
            lights: config.lights,
            state: SchedulerState {
                active_mode: config.mode,
                tick_index: 0,
                last_tick: now,
            },
            blanked: false,
        };
        scheduler.reset(now);
        scheduler
    }

    /// Tick interval of `mode` in milliseconds at the given velocity
    #[allow(clippy::cast_possible_truncation)]
    pub fn effective_interval(mode: ModeId, velocity_percent: i16) -> u32 {
        let base_ms = mode.base_interval().as_millis() as u32;
        scale_interval(base_ms, velocity_percent).max(MIN_INTERVAL_MS)
    }

    /// Run all ticks that are due by `now` and apply hold-time blanking
    pub fn advance(&mut self, control: &ControlState, now: Timestamp) {
        let interval = Self::effective_interval(self.state.active_mode, control.velocity_percent);

        while now.millis_since(self.state.last_tick) >= interval {
            self.state.last_tick = self.state.last_tick.wrapping_add_millis(interval);
            self.tick();
        }

        let hold_time = u32::from(control.hold_time_ms);
        if hold_time > 0 && !self.blanked && now.millis_since(self.state.last_tick) > hold_time {
            self.output.write(0);
            self.blanked = true;
        }
    }

    /// Restart the active mode
    ///
    /// The first tick is shown immediately, the next one follows after a
    /// full interval from `now`.
    pub fn reset(&mut self, now: Timestamp) {
        #[cfg(feature = "esp32-log")]
        println!("[scheduler] reset mode {}", self.state.active_mode.as_str());

        self.modes.reset(self.state.active_mode);
        self.state.tick_index = 0;
        self.state.last_tick = now;
        self.tick();
    }

    /// Switch to `mode` and restart it
    pub fn select(&mut self, mode: ModeId, now: Timestamp) {
        self.state.active_mode = mode;
        self.reset(now);
    }

    /// Replace the scroll text; the scroll mode restarts if it is active
    pub fn set_scroll_text(&mut self, text: &str, now: Timestamp) {
        self.modes.scroll_mut().set_text(text);
        if self.state.active_mode == ModeId::Scroll {
            self.reset(now);
        }
    }

    fn tick(&mut self) {
        let mask: Bitmask = self
            .modes
            .tick(self.state.active_mode, self.state.tick_index, self.lights);
        self.state.tick_index = self.state.tick_index.wrapping_add(1);
        self.output.write(mask);
        self.blanked = false;
    }

    pub const fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub const fn lights(&self) -> LightCount {
        self.lights
    }

    pub fn modes(&self) -> &ModeTable {
        &self.modes
    }

    /// Get a reference to the output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
