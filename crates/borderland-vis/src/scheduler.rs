//! Frame-tick scheduler.
//!
//! Callbacks registered here run once per tick with the new frame number.
//! Frames start at 1 and only ever increase.

use std::fmt;
use std::time::Duration;

/// Shortest period [`FrameScheduler::run_for`] ticks at.
pub const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// Identifies a registered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

type Callback = Box<dyn FnMut(u64)>;

/// Drives recurring per-frame callbacks.
#[derive(Default)]
pub struct FrameScheduler {
    frame: u64,
    next_id: u64,
    callbacks: Vec<(CallbackId, Callback)>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` on every future tick.
    pub fn register<F>(&mut self, callback: F) -> CallbackId
    where
        F: FnMut(u64) + 'static,
    {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Stop running a callback. Returns whether it was registered.
    pub fn unregister(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(registered, _)| *registered != id);
        self.callbacks.len() != before
    }

    /// Advance one frame and run every callback with it.
    pub fn tick(&mut self) -> u64 {
        self.frame += 1;
        for (_, callback) in &mut self.callbacks {
            callback(self.frame);
        }
        self.frame
    }

    /// Tick `frames` times, `period` apart. Returns the last frame.
    ///
    /// Periods shorter than [`MIN_TICK_PERIOD`] are raised to it.
    pub async fn run_for(&mut self, frames: u64, period: Duration) -> u64 {
        let mut interval = tokio::time::interval(period.max(MIN_TICK_PERIOD));
        for _ in 0..frames {
            interval.tick().await;
            let frame = self.tick();
            tracing::trace!(frame, "Frame");
        }
        self.frame
    }

    /// Last frame ticked, 0 before the first tick.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("frame", &self.frame)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_see_increasing_frames() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = FrameScheduler::new();

        let sink = Rc::clone(&seen);
        scheduler.register(move |frame| sink.borrow_mut().push(frame));

        for _ in 0..3 {
            scheduler.tick();
        }
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
        assert_eq!(scheduler.frame(), 3);
    }

    #[test]
    fn unregistered_callbacks_stop_running() {
        let count = Rc::new(RefCell::new(0));
        let mut scheduler = FrameScheduler::new();

        let counter = Rc::clone(&count);
        let id = scheduler.register(move |_| *counter.borrow_mut() += 1);
        scheduler.tick();
        assert!(scheduler.unregister(id));
        assert!(!scheduler.unregister(id));
        scheduler.tick();

        assert_eq!(*count.borrow(), 1);
        assert_eq!(scheduler.callback_count(), 0);
    }

    #[test]
    fn run_for_ticks_the_requested_frames() {
        let mut scheduler = FrameScheduler::new();
        let last = tokio_test::block_on(scheduler.run_for(5, Duration::from_millis(1)));
        assert_eq!(last, 5);

        let last = tokio_test::block_on(scheduler.run_for(0, Duration::from_millis(1)));
        assert_eq!(last, 5);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut scheduler = FrameScheduler::new();
        let last = tokio_test::block_on(scheduler.run_for(3, Duration::ZERO));
        assert_eq!(last, 3);
    }
}
