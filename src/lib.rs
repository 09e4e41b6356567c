#![no_std]

pub mod clock;
pub mod config;
pub mod controller;
pub mod font;
pub mod input;
pub mod mask;
pub mod math;
pub mod mode;
pub mod navigation;
pub mod output;
pub mod queue;
pub mod scheduler;

pub use clock::{Clock, EmbassyClock, Timestamp};
pub use config::{ControllerConfig, InputTimings};
pub use controller::Controller;
pub use font::{BUILTIN_FONT, BuiltinFont, Font};
pub use input::{ButtonId, ButtonInput, InputDebouncer, KeyEvent, Level};
pub use mask::{Bitmask, LightCount};
pub use mode::{Mode, ModeId, ModeTable};
pub use navigation::{ControlState, NavigationAction, NavigationController};
pub use output::{LightArray, SmartLedsArray};
pub use queue::{KeyEventQueue, TrySendError};
pub use scheduler::{ModeScheduler, SchedulerState};

pub use embassy_time::{Duration, Instant};
