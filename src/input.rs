//! Button debouncing and key repeat
//!
//! Turns raw button levels into key events. A level change is reported once,
//! and only if the previous accepted change of that button is at least the
//! debounce window old. A button held High keeps producing repeat events
//! every repeat window, with a growing repeat count.

use heapless::Vec;

use crate::clock::Timestamp;
use crate::config::InputTimings;

/// Number of physical buttons
pub const BUTTON_COUNT: usize = 3;

/// Physical buttons, in polling order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonId {
    Slower = 0,
    Mode = 1,
    Faster = 2,
}

impl ButtonId {
    pub const ALL: [Self; BUTTON_COUNT] = [Self::Slower, Self::Mode, Self::Faster];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Digital input level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

/// Abstract button source
///
/// Implement this trait on top of the board's GPIO inputs.
pub trait ButtonInput {
    /// Read the instantaneous level of a button (High = pressed)
    fn read(&mut self, id: ButtonId) -> Level;
}

/// Debounced key event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub button: ButtonId,
    pub level: Level,
    /// 0 for a level change, 1.. for the repeats of a held button
    pub repeat_count: u16,
}

impl KeyEvent {
    /// Level went High (not a repeat)
    pub const fn is_press(&self) -> bool {
        self.level.is_high() && self.repeat_count == 0
    }

    pub const fn is_release(&self) -> bool {
        !self.level.is_high()
    }
}

/// Events produced by one poll, at most one per button
pub type KeyEvents = Vec<KeyEvent, BUTTON_COUNT>;

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    last_transition: Timestamp,
    level: Level,
    repeat_count: u16,
}

/// Debouncer for all buttons
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    timings: InputTimings,
    buttons: [ButtonState; BUTTON_COUNT],
}

impl InputDebouncer {
    pub fn new(timings: InputTimings) -> Self {
        Self {
            timings,
            buttons: [ButtonState::default(); BUTTON_COUNT],
        }
    }

    /// Last accepted level of a button
    pub fn level(&self, id: ButtonId) -> Level {
        self.buttons[id.index()].level
    }

    /// Sample every button once and return the resulting events
    pub fn poll<B: ButtonInput>(&mut self, input: &mut B, now: Timestamp) -> KeyEvents {
        let mut events = KeyEvents::new();
        for id in ButtonId::ALL {
            if let Some(event) = self.poll_button(input, id, now) {
                // One slot per button, cannot overflow
                let _ = events.push(event);
            }
        }
        events
    }

    fn poll_button<B: ButtonInput>(
        &mut self,
        input: &mut B,
        id: ButtonId,
        now: Timestamp,
    ) -> Option<KeyEvent> {
        let state = &mut self.buttons[id.index()];
        let elapsed = now.elapsed_since(state.last_transition);
        if elapsed < self.timings.debounce {
            return None;
        }

        let level = input.read(id);
        if level != state.level {
            state.level = level;
            state.repeat_count = 0;
        } else if level.is_high() && elapsed >= self.timings.repeat {
            state.repeat_count = state.repeat_count.saturating_add(1);
        } else {
            return None;
        }
        state.last_transition = now;

        Some(KeyEvent {
            button: id,
            level,
            repeat_count: state.repeat_count,
        })
    }
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new(InputTimings::default())
    }
}
