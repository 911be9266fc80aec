use super::message::AppMessage;
use crate::kernel::services::adapters::timer::TokioTimerScheduler;
use std::io;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::oneshot;

enum Driver {
    /// Multi-thread runtime; its worker drives the timers.
    Worker(Runtime),
    /// Current-thread runtime parked in `block_on` on a thread of its own,
    /// since spawned tasks only make progress while something blocks on it.
    Dedicated {
        shutdown: Option<oneshot::Sender<()>>,
        thread: Option<JoinHandle<()>>,
    },
}

/// Background runtime for flip timers. Only the timer driver is enabled;
/// nothing here does IO.
pub struct AsyncRuntime {
    handle: Handle,
    driver: Driver,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        match Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name(THREAD_NAME)
            .enable_time()
            .build()
        {
            Ok(runtime) => Ok(Self {
                handle: runtime.handle().clone(),
                driver: Driver::Worker(runtime),
                tx,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "timer worker unavailable, driving a current-thread runtime");
                Self::current_thread(tx)
            }
        }
    }

    /// A current-thread runtime driven from a dedicated OS thread.
    pub fn current_thread(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_time().build()?;
        let handle = runtime.handle().clone();
        let (shutdown, stop) = oneshot::channel::<()>();

        let thread = std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                // Resolves on shutdown or when the sender is dropped.
                let _ = runtime.block_on(stop);
            })?;

        Ok(Self {
            handle,
            driver: Driver::Dedicated {
                shutdown: Some(shutdown),
                thread: Some(thread),
            },
            tx,
        })
    }

    pub fn tokio_handle(&self) -> Handle {
        self.handle.clone()
    }

    /// A scheduler whose timers run on this runtime and report through its channel.
    pub fn timer_scheduler(&self) -> TokioTimerScheduler {
        TokioTimerScheduler::new(self.tokio_handle(), self.tx.clone())
    }
}

impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        if let Driver::Dedicated { shutdown, thread } = &mut self.driver {
            if let Some(shutdown) = shutdown.take() {
                let _ = shutdown.send(());
            }
            if let Some(thread) = thread.take() {
                if thread.join().is_err() {
                    tracing::warn!("timer driver thread panicked");
                }
            }
        }
    }
}

const THREAD_NAME: &str = "decision-coin-timers";

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
