//! Timer bookkeeping
//!
//! Every delayed callback the transition layer schedules is tracked here so the
//! owning component can cancel all of them when it unmounts.

use dioxus::core::Task;
use std::collections::HashMap;
use std::time::Duration;

/// Handle to something that can be stopped before it fires.
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for Task {
    fn cancel(self) {
        Task::cancel(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
pub struct TimerSet<H: Cancel> {
    next_id: u64,
    pending: HashMap<TimerId, H>,
}

impl<H: Cancel> Default for TimerSet<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: HashMap::new(),
        }
    }
}

impl<H: Cancel> TimerSet<H> {
    /// Id for a timer about to be started.
    pub fn reserve(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId(self.next_id)
    }

    pub fn track(&mut self, id: TimerId, handle: H) {
        self.pending.insert(id, handle);
    }

    /// Timer fired; forget its handle.
    pub fn finish(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancel every timer that has not fired yet. Returns how many were stopped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        for (_, handle) in self.pending.drain() {
            handle.cancel();
        }
        count
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for FakeTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_cancel_all_stops_only_pending_timers() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut timers = TimerSet::default();

        let commit = timers.reserve();
        timers.track(commit, FakeTimer { id: 1, cancelled: cancelled.clone() });
        let settle = timers.reserve();
        timers.track(settle, FakeTimer { id: 2, cancelled: cancelled.clone() });
        assert_ne!(commit, settle);
        assert_eq!(timers.len(), 2);

        timers.finish(commit);
        assert_eq!(timers.cancel_all(), 1);
        assert_eq!(*cancelled.borrow(), vec![2]);
        assert!(timers.is_empty());
        assert_eq!(timers.cancel_all(), 0);
    }

    #[test]
    fn test_finish_unknown_id_is_harmless() {
        let mut timers: TimerSet<FakeTimer> = TimerSet::default();
        let id = timers.reserve();
        timers.finish(id);
        assert!(timers.is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_sleep_waits() {
        let start = std::time::Instant::now();
        sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
