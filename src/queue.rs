//! Key event queue for interrupt-driven input.
//!
//! When buttons are sampled outside the control loop (a timer interrupt or a
//! second task), the sampler pushes its events here and the control loop
//! drains them in order. Access is serialized with `critical-section`, so
//! the single consumer sees events in exactly the order they were produced.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::input::KeyEvent;

/// Error returned when the queue has no room for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Bounded multi-producer, single-consumer queue of key events
pub struct KeyEventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<KeyEvent, SIZE>>>,
}

impl<const SIZE: usize> KeyEventQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Push one event.
    ///
    /// Returns `Err(TrySendError(event))` if the queue is full.
    pub fn try_push(&self, event: KeyEvent) -> Result<(), TrySendError<KeyEvent>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(TrySendError)
        })
    }

    /// Push a batch of events atomically, in order.
    ///
    /// Nothing is queued if the whole batch does not fit; the first event is
    /// returned in that case.
    pub fn push_all(&self, events: &[KeyEvent]) -> Result<(), TrySendError<KeyEvent>> {
        let Some(&first) = events.first() else {
            return Ok(());
        };
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.capacity() - queue.len() < events.len() {
                return Err(TrySendError(first));
            }
            for &event in events {
                queue.push_back(event).map_err(TrySendError)?;
            }
            Ok(())
        })
    }

    /// Take the oldest event, if any
    pub fn try_pop(&self) -> Option<KeyEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for KeyEventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
