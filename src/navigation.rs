//! Button navigation
//!
//! Maps key events onto the control state. Slower and Faster adjust the
//! velocity, or the hold time while Mode is held. Tapping Mode restarts the
//! current pattern; holding it for a few repeats selects the next one.
//!
//! Once Slower/Faster has been used with Mode held, navigation is locked to
//! hold-time adjustment until Mode is released, so the held Mode button does
//! not also advance the mode.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{
    HOLD_TIME_STEP_MS, MAX_HOLD_TIME_MS, MODE_ADVANCE_REPEAT, VELOCITY_LIMIT, VELOCITY_STEP,
};
use crate::input::{ButtonId, KeyEvent, Level};
use crate::mode::ModeId;

/// User adjustable control values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub selected_mode: ModeId,
    /// Tick rate adjustment in percent, within `-100..=100`
    pub velocity_percent: i16,
    /// Blanking timeout in milliseconds, within `0..=100`, 0 disables it
    pub hold_time_ms: u16,
    pub nav_locked: bool,
}

impl ControlState {
    pub const fn new(mode: ModeId) -> Self {
        Self {
            selected_mode: mode,
            velocity_percent: 0,
            hold_time_ms: 0,
            nav_locked: false,
        }
    }

    fn adjust_velocity(&mut self, delta: i16) {
        self.velocity_percent = self
            .velocity_percent
            .saturating_add(delta)
            .clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT);
        #[cfg(feature = "esp32-log")]
        println!("[nav] velocity {}%", self.velocity_percent);
    }

    fn adjust_hold_time(&mut self, faster: bool) {
        self.hold_time_ms = if faster {
            self.hold_time_ms.saturating_add(HOLD_TIME_STEP_MS).min(MAX_HOLD_TIME_MS)
        } else {
            self.hold_time_ms.saturating_sub(HOLD_TIME_STEP_MS)
        };
        #[cfg(feature = "esp32-log")]
        println!("[nav] hold time {}ms", self.hold_time_ms);
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MODE)
    }
}

/// Request for the mode scheduler produced by navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Restart the active mode
    ResetMode,
    /// Switch to a new mode
    SelectMode(ModeId),
}

/// Navigation state machine
#[derive(Debug, Clone)]
pub struct NavigationController {
    state: ControlState,
    /// Mode button level as of the last Mode event
    mode_level: Level,
}

impl NavigationController {
    pub const fn new(state: ControlState) -> Self {
        Self {
            state,
            mode_level: Level::Low,
        }
    }

    pub const fn state(&self) -> &ControlState {
        &self.state
    }

    /// Apply one key event
    ///
    /// Returns the scheduler request the event triggers, if any.
    pub fn handle(&mut self, event: &KeyEvent) -> Option<NavigationAction> {
        if event.button == ButtonId::Mode && event.repeat_count == 0 {
            self.mode_level = event.level;
        }

        if self.state.nav_locked {
            self.handle_locked(event);
            None
        } else {
            self.handle_unlocked(event)
        }
    }

    fn handle_locked(&mut self, event: &KeyEvent) {
        match event.button {
            ButtonId::Mode if event.is_release() => {
                self.state.nav_locked = false;
                #[cfg(feature = "esp32-log")]
                println!("[nav] unlocked");
            }
            ButtonId::Slower | ButtonId::Faster if event.level.is_high() => {
                self.state.adjust_hold_time(event.button == ButtonId::Faster);
            }
            _ => {}
        }
    }

    fn handle_unlocked(&mut self, event: &KeyEvent) -> Option<NavigationAction> {
        if !event.level.is_high() {
            return None;
        }
        match event.button {
            ButtonId::Mode => match event.repeat_count {
                0 => Some(NavigationAction::ResetMode),
                MODE_ADVANCE_REPEAT => {
                    self.state.selected_mode = self.state.selected_mode.next();
                    Some(NavigationAction::SelectMode(self.state.selected_mode))
                }
                _ => None,
            },
            ButtonId::Slower | ButtonId::Faster => {
                let faster = event.button == ButtonId::Faster;
                if self.mode_level.is_high() {
                    self.state.adjust_hold_time(faster);
                    self.state.nav_locked = true;
                    #[cfg(feature = "esp32-log")]
                    println!("[nav] locked");
                } else if faster {
                    self.state.adjust_velocity(VELOCITY_STEP);
                } else {
                    self.state.adjust_velocity(-VELOCITY_STEP);
                }
                None
            }
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(ControlState::default())
    }
}
