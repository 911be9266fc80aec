use std::io;
use std::path::{Path, PathBuf};

use decision_coin::kernel::services::adapters::ensure_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "decision-coin.log";
const DEFAULT_DIRECTIVES: &str = "decision_coin=info";

/// Holds the log writer open; lines still buffered are flushed on drop.
pub struct LoggingGuard {
    _writer: WorkerGuard,
    dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.dir
    }
}

fn fallback_log_dir() -> io::Result<PathBuf> {
    let dir = std::env::temp_dir().join("decision-coin").join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// `RUST_LOG` wins; otherwise only this crate at info.
fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Routes `tracing` to a daily rolling file. The terminal belongs to the UI,
/// so nothing is ever written to stdout or stderr.
///
/// Returns `None` when no log directory can be created or a subscriber is
/// already installed; the app runs without logs in that case.
pub fn init() -> Option<LoggingGuard> {
    let dir = ensure_log_dir().or_else(|_| fallback_log_dir()).ok()?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "panicked");
    }));

    tracing::info!(dir = %dir.display(), version = env!("CARGO_PKG_VERSION"), "logging started");

    Some(LoggingGuard {
        _writer: guard,
        dir,
    })
}
