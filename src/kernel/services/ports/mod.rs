//! Service ports: traits + data contracts.

pub mod random;
pub mod settings;
pub mod timer;

pub use random::RandomSource;
pub use settings::{BackgroundSettings, Settings, ThemeSettings, TimingSettings};
pub use timer::{TimerHandle, TimerScheduler};
