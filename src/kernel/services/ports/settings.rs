use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kernel::starfield::{DEFAULT_STAR_COUNT, MAX_STAR_COUNT};
use crate::kernel::FlipTimings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub timing: TimingSettings,
    #[serde(default)]
    pub background: BackgroundSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Theme at startup. Toggling at runtime is not written back.
    #[serde(default = "default_dark")]
    pub dark: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { dark: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSettings {
    #[serde(default = "default_flip_ms")]
    pub flip_ms: u64,
    #[serde(default = "default_consult_ms")]
    pub consult_ms: u64,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl TimingSettings {
    pub fn flip_timings(&self) -> FlipTimings {
        FlipTimings {
            flip: Duration::from_millis(self.flip_ms),
            consult: Duration::from_millis(self.consult_ms),
        }
    }

    /// Never below 10ms so the main loop cannot spin.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            flip_ms: default_flip_ms(),
            consult_ms: default_consult_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundSettings {
    #[serde(default = "default_star_count")]
    pub star_count: usize,
}

impl BackgroundSettings {
    /// Capped at `MAX_STAR_COUNT`; the field is taken verbatim from the file.
    pub fn stars(&self) -> usize {
        self.star_count.min(MAX_STAR_COUNT)
    }
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
        }
    }
}

fn default_dark() -> bool {
    true
}

fn default_flip_ms() -> u64 {
    3000
}

fn default_consult_ms() -> u64 {
    1500
}

fn default_tick_ms() -> u64 {
    100
}

fn default_star_count() -> usize {
    DEFAULT_STAR_COUNT
}
