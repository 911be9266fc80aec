use std::sync::mpsc::Sender;
use std::time::Duration;

use super::runtime::AppMessage;
use crate::kernel::services::ports::{TimerHandle, TimerScheduler};
use crate::kernel::TimerEvent;

/// Sleeps on a tokio runtime, then reports `AppMessage::TimerFired` unless cancelled.
#[derive(Clone)]
pub struct TokioTimerScheduler {
    runtime: tokio::runtime::Handle,
    tx: Sender<AppMessage>,
}

impl TokioTimerScheduler {
    pub fn new(runtime: tokio::runtime::Handle, tx: Sender<AppMessage>) -> Self {
        Self { runtime, tx }
    }
}

impl TimerScheduler for TokioTimerScheduler {
    fn schedule(&self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle::new(event);
        let watch = handle.clone();
        let tx = self.tx.clone();

        tracing::debug!(flip_id = event.flip_id, timer = ?event.timer, delay_ms = delay.as_millis() as u64, "timer scheduled");

        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if watch.is_cancelled() {
                tracing::debug!(flip_id = event.flip_id, timer = ?event.timer, "timer cancelled");
                return;
            }
            if tx.send(AppMessage::TimerFired(event)).is_err() {
                tracing::debug!(flip_id = event.flip_id, "timer receiver dropped");
            }
        });

        handle
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/timer.rs"]
mod tests;
