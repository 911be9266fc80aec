use super::*;
use crate::kernel::FlipTimer;
use std::sync::mpsc;

fn spin(flip_id: u64) -> TimerEvent {
    TimerEvent {
        flip_id,
        timer: FlipTimer::Spin,
    }
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn timer_fires_after_delay() {
    let (tx, rx) = mpsc::channel();
    let scheduler = TokioTimerScheduler::new(tokio::runtime::Handle::current(), tx);

    let handle = scheduler.schedule(Duration::from_millis(3000), spin(1));
    assert_eq!(handle.event(), spin(1));

    tokio::time::sleep(Duration::from_millis(2999)).await;
    settle().await;
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(1)).await;
    settle().await;
    match rx.try_recv() {
        Ok(AppMessage::TimerFired(event)) => assert_eq!(event, spin(1)),
        other => panic!("expected timer message, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_delivers() {
    let (tx, rx) = mpsc::channel();
    let scheduler = TokioTimerScheduler::new(tokio::runtime::Handle::current(), tx);

    let handle = scheduler.schedule(Duration::from_millis(100), spin(7));
    handle.cancel();
    assert!(handle.is_cancelled());

    tokio::time::sleep(Duration::from_millis(500)).await;
    settle().await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn dropped_receiver_is_tolerated() {
    let (tx, rx) = mpsc::channel();
    let scheduler = TokioTimerScheduler::new(tokio::runtime::Handle::current(), tx);
    drop(rx);

    let _handle = scheduler.schedule(Duration::from_millis(10), spin(2));
    tokio::time::sleep(Duration::from_millis(20)).await;
    settle().await;
}
