use crate::clock::Timestamp;
use crate::config::ControllerConfig;
use crate::input::{ButtonInput, InputDebouncer, KeyEvent};
use crate::navigation::{ControlState, NavigationAction, NavigationController};
use crate::output::LightArray;
use crate::queue::KeyEventQueue;
use crate::scheduler::ModeScheduler;

/// Control loop - the main orchestrator
///
/// One call to [`Controller::step`] is one loop iteration: poll the
/// buttons, apply the resulting key events, then advance the pattern.
///
/// # Usage
///
/// ```ignore
/// let clock = EmbassyClock;
/// let mut controller = Controller::new(lights, &ControllerConfig::default(), clock.now());
///
/// loop {
///     controller.step(&mut buttons, clock.now());
/// }
/// ```
pub struct Controller<O: LightArray> {
    debouncer: InputDebouncer,
    navigation: NavigationController,
    scheduler: ModeScheduler<O>,
}

impl<O: LightArray> Controller<O> {
    /// Create a controller; the configured mode is shown right away
    pub fn new(output: O, config: &ControllerConfig, now: Timestamp) -> Self {
        Self {
            debouncer: InputDebouncer::new(config.timings),
            navigation: NavigationController::new(ControlState::new(config.mode)),
            scheduler: ModeScheduler::new(output, config, now),
        }
    }

    /// Run one loop iteration, polling `buttons` for input
    pub fn step<B: ButtonInput>(&mut self, buttons: &mut B, now: Timestamp) {
        let events = self.debouncer.poll(buttons, now);
        for event in &events {
            self.handle_event(event, now);
        }
        self.scheduler.advance(self.navigation.state(), now);
    }

    /// Run one loop iteration with events sampled elsewhere
    ///
    /// Drains `queue` in order. Use this when the buttons are polled from an
    /// interrupt that owns its own [`InputDebouncer`].
    pub fn step_queued<const SIZE: usize>(&mut self, queue: &KeyEventQueue<SIZE>, now: Timestamp) {
        while let Some(event) = queue.try_pop() {
            self.handle_event(&event, now);
        }
        self.scheduler.advance(self.navigation.state(), now);
    }

    /// Apply one key event to navigation and the scheduler
    pub fn handle_event(&mut self, event: &KeyEvent, now: Timestamp) {
        match self.navigation.handle(event) {
            Some(NavigationAction::ResetMode) => self.scheduler.reset(now),
            Some(NavigationAction::SelectMode(mode)) => self.scheduler.select(mode, now),
            None => {}
        }
    }

    pub const fn control(&self) -> &ControlState {
        self.navigation.state()
    }

    pub fn scheduler(&self) -> &ModeScheduler<O> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut ModeScheduler<O> {
        &mut self.scheduler
    }

    pub fn debouncer(&self) -> &InputDebouncer {
        &self.debouncer
    }
}
