use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    task::{Wake, Waker},
};

use parking_lot::Mutex;

/// Waker handed to root render passes.
///
/// Waking schedules one render pass and wakes the task driving the root, if any.
/// Wakes arriving while a pass is already scheduled are merged.
#[derive(Debug)]
pub struct RootSignal {
    scheduled: AtomicBool,
    driver: Mutex<Option<Waker>>,
}

impl RootSignal {
    pub fn new() -> Self {
        Self {
            scheduled: AtomicBool::new(true),
            driver: Mutex::new(None),
        }
    }

    /// Register waker of the task driving the root
    pub fn register(&self, waker: &Waker) {
        let mut driver = self.driver.lock();

        match *driver {
            Some(ref current) if current.will_wake(waker) => {}
            _ => *driver = Some(waker.clone()),
        }
    }

    /// Consume scheduled pass. Returns true if a pass was scheduled.
    pub fn take_scheduled(&self) -> bool {
        self.scheduled
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled.load(Ordering::Acquire)
    }
}

impl Default for RootSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl Wake for RootSignal {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref()
    }

    fn wake_by_ref(self: &Arc<Self>) {
        if self
            .scheduled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            if let Some(ref waker) = *self.driver.lock() {
                waker.wake_by_ref();
            }
        }
    }
}
