//! Decorative background description.
//!
//! The store regenerates this whenever the theme changes; renderers only read
//! it. Nothing in the flip lifecycle depends on it.

use std::time::Duration;

use super::services::ports::RandomSource;
use super::state::Theme;

pub const DEFAULT_STAR_COUNT: usize = 50;
pub const MAX_STAR_COUNT: usize = 500;
const MAX_STAR_SIZE: f64 = 3.0;
const MAX_TWINKLE_DELAY_MS: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position, percent of the surface width in `[0, 100)`.
    pub x: f32,
    /// Vertical position, percent of the surface height in `[0, 100)`.
    pub y: f32,
    /// Diameter in `[0, 3)`.
    pub size: f32,
    pub twinkle_delay: Duration,
}

impl Star {
    /// Twinkle period is two seconds: lit for the first half, dimmed for the second.
    pub fn is_lit(&self, elapsed: Duration) -> bool {
        let phase = (elapsed + self.twinkle_delay).as_millis() % 2000;
        phase < 1000
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub theme: Theme,
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn empty(theme: Theme) -> Self {
        Self {
            theme,
            stars: Vec::new(),
        }
    }

    pub fn generate(theme: Theme, count: usize, random: &mut dyn RandomSource) -> Self {
        let stars = (0..count)
            .map(|_| {
                let size = (random.next_unit() * MAX_STAR_SIZE) as f32;
                let x = (random.next_unit() * 100.0) as f32;
                let y = (random.next_unit() * 100.0) as f32;
                let delay_ms = random.next_unit() * MAX_TWINKLE_DELAY_MS;
                Star {
                    x: x.min(99.999),
                    y: y.min(99.999),
                    size: size.min(2.999),
                    twinkle_delay: Duration::from_millis(delay_ms as u64),
                }
            })
            .collect();

        Self { theme, stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/starfield.rs"]
mod tests;
