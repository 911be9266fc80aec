//! Service adapters: OS/runtime specific implementations (randomness, timers, IO).

pub mod paths;
pub mod random;
pub mod runtime;
pub mod settings;
pub mod timer;

pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use random::{SeededRandom, SequenceRandom, ThreadRandom};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{get_settings_path, load_settings, load_settings_from, SettingsError};
pub use timer::TokioTimerScheduler;
