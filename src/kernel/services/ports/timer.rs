use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::kernel::TimerEvent;

/// Schedules a one-shot completion. The implementation delivers `event` back to
/// the owner once `delay` has elapsed, unless the returned handle was cancelled.
pub trait TimerScheduler {
    fn schedule(&self, delay: Duration, event: TimerEvent) -> TimerHandle;
}

/// Cancelable handle to a scheduled timer. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    event: TimerEvent,
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn new(event: TimerEvent) -> Self {
        Self {
            event,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn event(&self) -> TimerEvent {
        self.event
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
