use super::*;
use crate::kernel::services::ports::TimerScheduler;
use crate::kernel::{FlipTimer, TimerEvent};
use std::sync::mpsc;
use std::time::Duration;

#[test]
fn scheduled_timer_reports_through_channel() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    let event = TimerEvent {
        flip_id: 1,
        timer: FlipTimer::Spin,
    };

    let _handle = runtime
        .timer_scheduler()
        .schedule(Duration::from_millis(10), event);

    let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(msg, AppMessage::TimerFired(event));
}

#[test]
fn cancelled_timer_is_silent() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    let event = TimerEvent {
        flip_id: 2,
        timer: FlipTimer::Consult,
    };

    let handle = runtime
        .timer_scheduler()
        .schedule(Duration::from_millis(50), event);
    handle.cancel();

    assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
}

#[test]
fn current_thread_runtime_still_delivers_timers() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::current_thread(tx).unwrap();
    let event = TimerEvent {
        flip_id: 3,
        timer: FlipTimer::Spin,
    };

    let _handle = runtime
        .timer_scheduler()
        .schedule(Duration::from_millis(10), event);

    let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(msg, AppMessage::TimerFired(event));
}

#[test]
fn current_thread_runtime_shuts_down_on_drop() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::current_thread(tx).unwrap();
    let _handle = runtime.timer_scheduler().schedule(
        Duration::from_secs(60),
        TimerEvent {
            flip_id: 4,
            timer: FlipTimer::Consult,
        },
    );

    drop(runtime);
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}
